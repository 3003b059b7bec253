use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use crate::mission_control::common::Vec3D;
use crate::mission_control::Observation;

/// One pose sample from the simulation bridge.
#[derive(serde::Deserialize, Debug)]
pub struct ObservationResponse {
    x: f64,
    y: f64,
    z: f64,
    vx: f64,
    vy: f64,
    vz: f64,
    sim_time: f64,
}

impl SerdeJSONBodyHTTPResponseType for ObservationResponse {}

impl ObservationResponse {
    pub fn pos(&self) -> Vec3D<f64> { Vec3D::new(self.x, self.y, self.z) }
    pub fn vel(&self) -> Vec3D<f64> { Vec3D::new(self.vx, self.vy, self.vz) }
    pub fn sim_time(&self) -> f64 { self.sim_time }

    pub fn observation(&self) -> Observation {
        Observation::new(self.pos(), self.vel(), self.sim_time)
    }
}
