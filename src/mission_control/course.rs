use super::common::Vec3D;
use strum_macros::Display;

/// Default full extent of a gate volume in meters, matching the gate
/// template used by the world generator.
pub const DEFAULT_GATE_SIZE: f64 = 0.5;
/// Default trigger margin added around every gate volume in meters.
pub const DEFAULT_TRIGGER_MARGIN: f64 = 1.0;
/// Default mission timeout per lap in seconds.
pub const DEFAULT_TIMEOUT_SEC: f64 = 600.0;

/// A single gate descriptor as delivered by the mission ledger.
///
/// Coordinate fields missing from the wire payload default to 0 instead of
/// rejecting the mission. `yaw` is carried for course tooling but does not
/// influence the axis-aligned trigger volume.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GateDescriptor {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default)]
    pub yaw: f64,
}

/// The static mission parameters a course is loaded from.
#[derive(Debug, Clone)]
pub struct CourseDescriptor {
    pub gates: Vec<GateDescriptor>,
    pub laps_required: u32,
    pub timeout_sec: f64,
}

impl CourseDescriptor {
    /// The descriptor used when the ledger fetch fails or the run is offline.
    pub fn fallback() -> Self {
        Self { gates: Vec::new(), laps_required: 1, timeout_sec: DEFAULT_TIMEOUT_SEC }
    }
}

/// Axis-aligned trigger volume of a gate, precomputed at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateBox {
    min: Vec3D<f64>,
    max: Vec3D<f64>,
}

impl GateBox {
    fn around(center: Vec3D<f64>, size: Vec3D<f64>, margin: f64) -> Self {
        let reach = size / 2.0 + Vec3D::new(margin, margin, margin);
        Self { min: center - reach, max: center + reach }
    }

    /// Strict containment test: a point exactly on a face is outside.
    pub fn contains(&self, p: Vec3D<f64>) -> bool {
        p.x() > self.min.x()
            && p.x() < self.max.x()
            && p.y() > self.min.y()
            && p.y() < self.max.y()
            && p.z() > self.min.z()
            && p.z() < self.max.z()
    }

    pub fn min(&self) -> Vec3D<f64> { self.min }

    pub fn max(&self) -> Vec3D<f64> { self.max }
}

/// One gate of the course, immutable after load.
#[derive(Debug, Clone)]
pub struct Gate {
    /// 1-based position in the passage sequence.
    seq: usize,
    center: Vec3D<f64>,
    bound: GateBox,
}

impl Gate {
    pub fn seq(&self) -> usize { self.seq }

    pub fn center(&self) -> Vec3D<f64> { self.center }

    pub fn bound(&self) -> &GateBox { &self.bound }
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum CourseError {
    NoLapsRequired,
    NonPositiveTimeout,
    NonFiniteGate(usize),
}

impl std::error::Error for CourseError {}

/// The ordered gate sequence plus mission parameters. Loaded once per run,
/// never mutated afterwards.
#[derive(Debug)]
pub struct Course {
    gates: Vec<Gate>,
    laps_required: u32,
    timeout_sec: f64,
    margin: f64,
}

impl Course {
    /// Builds a course from a ledger descriptor, precomputing every gate's
    /// trigger box. An empty gate list is legal and yields a course that can
    /// never complete (only safety failures end such a run).
    pub fn load(descriptor: &CourseDescriptor, margin: f64) -> Result<Course, CourseError> {
        if descriptor.laps_required < 1 {
            return Err(CourseError::NoLapsRequired);
        }
        if !(descriptor.timeout_sec > 0.0) {
            return Err(CourseError::NonPositiveTimeout);
        }
        let size = Vec3D::new(DEFAULT_GATE_SIZE, DEFAULT_GATE_SIZE, DEFAULT_GATE_SIZE);
        let mut gates = Vec::with_capacity(descriptor.gates.len());
        for (i, g) in descriptor.gates.iter().enumerate() {
            if !(g.x.is_finite() && g.y.is_finite() && g.z.is_finite()) {
                return Err(CourseError::NonFiniteGate(i + 1));
            }
            let center = Vec3D::new(g.x, g.y, g.z);
            gates.push(Gate { seq: i + 1, center, bound: GateBox::around(center, size, margin) });
        }
        Ok(Course {
            gates,
            laps_required: descriptor.laps_required,
            timeout_sec: descriptor.timeout_sec,
            margin,
        })
    }

    pub fn gates(&self) -> &[Gate] { &self.gates }

    pub fn gate_count(&self) -> usize { self.gates.len() }

    pub fn laps_required(&self) -> u32 { self.laps_required }

    pub fn timeout_sec(&self) -> f64 { self.timeout_sec }

    pub fn margin(&self) -> f64 { self.margin }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(gates: Vec<GateDescriptor>) -> CourseDescriptor {
        CourseDescriptor { gates, laps_required: 2, timeout_sec: 30.0 }
    }

    #[test]
    fn test_bounds_include_margin() {
        let d = descriptor(vec![GateDescriptor { x: 1.0, y: 2.0, z: 3.0, yaw: 0.0 }]);
        let course = Course::load(&d, 1.0).unwrap();
        let bound = course.gates()[0].bound();
        assert_eq!(bound.min(), Vec3D::new(-0.25, 0.75, 1.75));
        assert_eq!(bound.max(), Vec3D::new(2.25, 3.25, 4.25));
    }

    #[test]
    fn test_containment_is_open_interval() {
        let d = descriptor(vec![GateDescriptor { x: 0.0, y: 0.0, z: 0.0, yaw: 0.0 }]);
        let course = Course::load(&d, 1.0).unwrap();
        let bound = course.gates()[0].bound();
        assert!(bound.contains(Vec3D::new(0.0, 0.0, 0.0)));
        assert!(bound.contains(Vec3D::new(1.24, -1.24, 0.0)));
        // exactly on a face is outside
        assert!(!bound.contains(Vec3D::new(1.25, 0.0, 0.0)));
        assert!(!bound.contains(Vec3D::new(0.0, 0.0, -1.25)));
        assert!(!bound.contains(Vec3D::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_load_rejects_bad_parameters() {
        let mut d = descriptor(vec![]);
        d.laps_required = 0;
        assert_eq!(Course::load(&d, 1.0).unwrap_err(), CourseError::NoLapsRequired);

        let mut d = descriptor(vec![]);
        d.timeout_sec = 0.0;
        assert_eq!(Course::load(&d, 1.0).unwrap_err(), CourseError::NonPositiveTimeout);

        let d = descriptor(vec![GateDescriptor { x: f64::NAN, y: 0.0, z: 0.0, yaw: 0.0 }]);
        assert_eq!(Course::load(&d, 1.0).unwrap_err(), CourseError::NonFiniteGate(1));
    }

    #[test]
    fn test_missing_descriptor_fields_default_to_zero() {
        let g: GateDescriptor = serde_json::from_str(r#"{"x": 4.0}"#).unwrap();
        assert_eq!(g.x, 4.0);
        assert_eq!(g.y, 0.0);
        assert_eq!(g.z, 0.0);
    }

    #[test]
    fn test_empty_course_is_legal() {
        let course = Course::load(&CourseDescriptor::fallback(), 1.0).unwrap();
        assert_eq!(course.gate_count(), 0);
        assert_eq!(course.laps_required(), 1);
        assert_eq!(course.timeout_sec(), DEFAULT_TIMEOUT_SEC);
    }
}
