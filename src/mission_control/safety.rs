use super::common::Vec3D;
use super::signal::FailureReason;
use super::vehicle::{Observation, VehicleState};

/// Per-tick crash / stuck / timeout checks, evaluated before any gate
/// progress and with fixed priority crash > stuck > timeout.
///
/// The monitor owns only vehicle-history state; lap timing is passed in
/// read-only each tick.
#[derive(Debug)]
pub struct SafetyMonitor {
    vehicle: VehicleState,
}

impl SafetyMonitor {
    /// Velocity-delta magnitude above which a tick counts as a crash, in m/s.
    pub const VELOCITY_CHANGE_THRESHOLD: f64 = 10.0;
    /// Vertical position below which the vehicle has hit the ground, in m.
    pub const ALTITUDE_THRESHOLD: f64 = -0.1;
    /// Time without significant displacement before the vehicle counts as stuck.
    pub const STUCK_THRESHOLD_SEC: f64 = 5.0;
    /// Minimum displacement per tick that counts as movement, in m.
    pub const MOVEMENT_EPSILON: f64 = 0.05;

    pub fn new(start_time: f64) -> Self {
        Self { vehicle: VehicleState::new(start_time) }
    }

    /// The position seen on the previous tick, `None` before the first one.
    pub fn previous_position(&self) -> Option<Vec3D<f64>> { self.vehicle.prev_pos() }

    /// Re-anchors the movement clock, used when the first observation arrives.
    pub fn seed(&mut self, start_time: f64) { self.vehicle.mark_movement(start_time); }

    /// Evaluates all safety rules against the current observation.
    ///
    /// Returns the highest-priority violated rule, or `None` if the tick is
    /// safe. Does not advance the pose history; call [`Self::remember`] once
    /// the whole tick is evaluated.
    pub fn check(
        &mut self,
        obs: &Observation,
        lap_start_time: f64,
        timeout_sec: f64,
    ) -> Option<FailureReason> {
        let dv = (obs.vel - self.vehicle.prev_vel()).abs();
        if dv > Self::VELOCITY_CHANGE_THRESHOLD || obs.pos.z() < Self::ALTITUDE_THRESHOLD {
            return Some(FailureReason::Crash);
        }

        if let Some(prev) = self.vehicle.prev_pos() {
            if obs.pos.euclid_distance(&prev) > Self::MOVEMENT_EPSILON {
                self.vehicle.mark_movement(obs.sim_time);
            } else if obs.sim_time - self.vehicle.last_movement_time() > Self::STUCK_THRESHOLD_SEC
            {
                return Some(FailureReason::Stuck);
            }
        }

        if obs.sim_time - lap_start_time > timeout_sec {
            return Some(FailureReason::Timeout);
        }
        None
    }

    /// Rolls the observation into the vehicle history at the end of a tick.
    pub fn remember(&mut self, obs: &Observation) { self.vehicle.remember(obs); }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(pos: (f64, f64, f64), vel: (f64, f64, f64), t: f64) -> Observation {
        Observation::new(Vec3D::from(pos), Vec3D::from(vel), t)
    }

    #[test]
    fn test_velocity_spike_is_a_crash() {
        let mut monitor = SafetyMonitor::new(0.0);
        let first = obs((0.0, 0.0, 1.0), (2.0, 0.0, 0.0), 0.0);
        assert_eq!(monitor.check(&first, 0.0, 600.0), None);
        monitor.remember(&first);

        let spike = obs((0.1, 0.0, 1.0), (13.0, 0.0, 0.0), 0.032);
        assert_eq!(monitor.check(&spike, 0.0, 600.0), Some(FailureReason::Crash));
    }

    #[test]
    fn test_ground_impact_is_a_crash() {
        let mut monitor = SafetyMonitor::new(0.0);
        let below = obs((0.0, 0.0, -0.2), (0.0, 0.0, -1.0), 0.0);
        assert_eq!(monitor.check(&below, 0.0, 600.0), Some(FailureReason::Crash));
    }

    #[test]
    fn test_stuck_after_threshold() {
        let mut monitor = SafetyMonitor::new(0.0);
        let mut t = 0.0;
        let still = |t| obs((1.0, 1.0, 1.0), (0.0, 0.0, 0.0), t);
        // no stuck verdict before a previous position exists
        assert_eq!(monitor.check(&still(t), 0.0, 600.0), None);
        monitor.remember(&still(t));
        while t < SafetyMonitor::STUCK_THRESHOLD_SEC {
            t += 1.0;
            assert_eq!(monitor.check(&still(t), 0.0, 600.0), None);
            monitor.remember(&still(t));
        }
        t += 1.0;
        assert_eq!(monitor.check(&still(t), 0.0, 600.0), Some(FailureReason::Stuck));
    }

    #[test]
    fn test_movement_resets_stuck_clock() {
        let mut monitor = SafetyMonitor::new(0.0);
        let start = obs((0.0, 0.0, 1.0), (0.0, 0.0, 0.0), 0.0);
        monitor.check(&start, 0.0, 600.0);
        monitor.remember(&start);

        let moved = obs((0.2, 0.0, 1.0), (0.0, 0.0, 0.0), 4.9);
        assert_eq!(monitor.check(&moved, 0.0, 600.0), None);
        monitor.remember(&moved);

        // 5s of stillness measured from the movement at t=4.9, not from t=0
        let still = obs((0.2, 0.0, 1.0), (0.0, 0.0, 0.0), 9.8);
        assert_eq!(monitor.check(&still, 0.0, 600.0), None);
        let late = obs((0.2, 0.0, 1.0), (0.0, 0.0, 0.0), 10.0);
        assert_eq!(monitor.check(&late, 0.0, 600.0), Some(FailureReason::Stuck));
    }

    #[test]
    fn test_timeout_measured_from_lap_start() {
        let mut monitor = SafetyMonitor::new(0.0);
        let moving = obs((5.0, 0.0, 1.0), (1.0, 0.0, 0.0), 41.0);
        assert_eq!(monitor.check(&moving, 20.0, 30.0), None);
        let later = obs((5.0, 1.0, 1.0), (1.0, 0.0, 0.0), 50.5);
        assert_eq!(monitor.check(&later, 20.0, 30.0), Some(FailureReason::Timeout));
    }

    #[test]
    fn test_crash_outranks_stuck_and_timeout() {
        let mut monitor = SafetyMonitor::new(0.0);
        // ground impact while also timed out
        let bad = obs((0.0, 0.0, -0.5), (0.0, 0.0, 0.0), 100.0);
        assert_eq!(monitor.check(&bad, 0.0, 30.0), Some(FailureReason::Crash));
    }
}
