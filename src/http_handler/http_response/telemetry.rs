use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Acknowledgement of a telemetry post; the body content is irrelevant.
#[derive(serde::Deserialize, Debug)]
pub struct TelemetryResponse {}

impl SerdeJSONBodyHTTPResponseType for TelemetryResponse {}
