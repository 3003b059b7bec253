use super::http_response::{complete, fail, mission, observation, response_common, telemetry};

pub mod complete_post;
pub mod fail_post;
pub mod mission_get;
pub mod observation_get;
pub mod request_common;
pub mod telemetry_post;
