use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use crate::mission_control::course::{CourseDescriptor, DEFAULT_TIMEOUT_SEC, GateDescriptor};

/// The mission document as stored by the ledger. Only the `meta` block is
/// relevant to the supervisor; everything else is ignored on deserialization.
#[derive(serde::Deserialize, Debug)]
pub struct MissionResponse {
    #[serde(default)]
    meta: MissionMeta,
}

#[derive(serde::Deserialize, Debug)]
pub struct MissionMeta {
    #[serde(default)]
    gates: Vec<GateDescriptor>,
    #[serde(default = "MissionMeta::default_laps")]
    laps: u32,
    #[serde(default = "MissionMeta::default_timeout")]
    timeout_sec: f64,
}

impl MissionMeta {
    fn default_laps() -> u32 { 1 }
    fn default_timeout() -> f64 { DEFAULT_TIMEOUT_SEC }
}

impl Default for MissionMeta {
    fn default() -> Self {
        Self {
            gates: Vec::new(),
            laps: Self::default_laps(),
            timeout_sec: Self::default_timeout(),
        }
    }
}

impl SerdeJSONBodyHTTPResponseType for MissionResponse {}

impl MissionResponse {
    pub fn into_descriptor(self) -> CourseDescriptor {
        CourseDescriptor {
            gates: self.meta.gates,
            laps_required: self.meta.laps,
            timeout_sec: self.meta.timeout_sec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_defaults_fill_missing_fields() {
        let resp: MissionResponse =
            serde_json::from_str(r#"{"meta": {"gates": [{"x": 1.0, "yaw": 90.0}]}}"#).unwrap();
        let d = resp.into_descriptor();
        assert_eq!(d.gates.len(), 1);
        assert_eq!(d.gates[0].y, 0.0);
        assert_eq!(d.laps_required, 1);
        assert_eq!(d.timeout_sec, DEFAULT_TIMEOUT_SEC);
    }

    #[test]
    fn test_missing_meta_yields_fallback_shape() {
        let resp: MissionResponse = serde_json::from_str(r#"{"id": "m1"}"#).unwrap();
        let d = resp.into_descriptor();
        assert!(d.gates.is_empty());
        assert_eq!(d.laps_required, 1);
    }
}
