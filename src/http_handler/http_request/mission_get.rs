use super::mission::MissionResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Fetches the mission document, done once at startup.
#[derive(Debug)]
pub struct MissionRequest {
    endpoint: String,
}

impl MissionRequest {
    pub fn new(mission_id: &str) -> Self {
        Self { endpoint: format!("/missions/{mission_id}") }
    }
}

impl NoBodyHTTPRequestType for MissionRequest {}

impl HTTPRequestType for MissionRequest {
    type Response = MissionResponse;
    fn endpoint(&self) -> &str {
        &self.endpoint
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
