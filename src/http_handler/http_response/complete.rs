use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Acknowledgement of a mission completion report.
#[derive(serde::Deserialize, Debug)]
pub struct MissionCompleteResponse {}

impl SerdeJSONBodyHTTPResponseType for MissionCompleteResponse {}
