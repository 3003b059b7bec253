use super::fail::MissionFailureResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::mission_control::FailureReason;

/// Signals mission failure with its reason to the ledger, once per run.
#[derive(serde::Serialize, Debug)]
pub(crate) struct MissionFailureRequest {
    #[serde(skip)]
    endpoint: String,
    reason: FailureReason,
}

impl MissionFailureRequest {
    pub fn new(mission_id: &str, reason: FailureReason) -> Self {
        Self { endpoint: format!("/missions/{mission_id}/fail"), reason }
    }
}

impl JSONBodyHTTPRequestType for MissionFailureRequest {
    type Body = MissionFailureRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for MissionFailureRequest {
    type Response = MissionFailureResponse;
    fn endpoint(&self) -> &str {
        &self.endpoint
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Post
    }
}
