use super::complete::MissionCompleteResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Signals mission completion to the ledger, once per run.
#[derive(Debug)]
pub struct MissionCompleteRequest {
    endpoint: String,
}

impl MissionCompleteRequest {
    pub fn new(mission_id: &str) -> Self {
        Self { endpoint: format!("/missions/{mission_id}/complete") }
    }
}

impl NoBodyHTTPRequestType for MissionCompleteRequest {}

impl HTTPRequestType for MissionCompleteRequest {
    type Response = MissionCompleteResponse;
    fn endpoint(&self) -> &str {
        &self.endpoint
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Post
    }
}
