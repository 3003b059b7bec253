use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Acknowledgement of a mission failure report.
#[derive(serde::Deserialize, Debug)]
pub struct MissionFailureResponse {}

impl SerdeJSONBodyHTTPResponseType for MissionFailureResponse {}
