pub(crate) mod response_common;
pub mod complete;
pub mod fail;
pub mod mission;
pub mod observation;
pub mod telemetry;
