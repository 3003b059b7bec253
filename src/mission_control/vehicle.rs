use super::common::Vec3D;

/// One tick's worth of vehicle pose data from the simulation bridge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Position in simulation-world coordinates (z up).
    pub pos: Vec3D<f64>,
    /// Velocity in simulation-world units per second.
    pub vel: Vec3D<f64>,
    /// Simulation time in seconds.
    pub sim_time: f64,
}

impl Observation {
    pub const fn new(pos: Vec3D<f64>, vel: Vec3D<f64>, sim_time: f64) -> Self {
        Self { pos, vel, sim_time }
    }
}

/// Per-tick vehicle history, overwritten every tick.
///
/// `prev_pos` is `None` before the first tick and counts as "outside every
/// gate volume", so a vehicle spawned inside a gate triggers a rising edge
/// on its very first observation. `prev_vel` starts at zero.
#[derive(Debug)]
pub struct VehicleState {
    prev_pos: Option<Vec3D<f64>>,
    prev_vel: Vec3D<f64>,
    /// Sim-time of the last tick whose displacement exceeded the movement epsilon.
    last_movement_time: f64,
}

impl VehicleState {
    pub fn new(start_time: f64) -> Self {
        Self { prev_pos: None, prev_vel: Vec3D::zero(), last_movement_time: start_time }
    }

    pub fn prev_pos(&self) -> Option<Vec3D<f64>> { self.prev_pos }

    pub fn prev_vel(&self) -> Vec3D<f64> { self.prev_vel }

    pub fn last_movement_time(&self) -> f64 { self.last_movement_time }

    pub fn mark_movement(&mut self, now: f64) { self.last_movement_time = now; }

    /// Rolls the current observation into the history at the end of a tick.
    pub fn remember(&mut self, obs: &Observation) {
        self.prev_pos = Some(obs.pos);
        self.prev_vel = obs.vel;
    }
}
