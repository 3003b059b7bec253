use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::telemetry::TelemetryResponse;

/// Request type for the /telemetry endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct TelemetryRequest {
    /// The mission this lap belongs to.
    pub(crate) mission: String,
    /// The pilot flying the run.
    pub(crate) pilot: String,
    /// Total lap duration in seconds.
    pub(crate) lap_time_sec: f64,
    /// Split durations between consecutive gate passages.
    pub(crate) checkpoint_times_sec: Vec<f64>,
    /// Run status, always `"running"` for lap telemetry.
    pub(crate) status: &'static str,
}

impl JSONBodyHTTPRequestType for TelemetryRequest {
    type Body = TelemetryRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for TelemetryRequest {
    type Response = TelemetryResponse;
    fn endpoint(&self) -> &'static str { "/telemetry" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
