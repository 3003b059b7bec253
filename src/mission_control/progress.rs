use super::common::Vec3D;
use super::course::Course;

/// Timing record of one closed lap.
///
/// Built exactly once when the gate index wraps back to the first gate;
/// the validity flag is fixed at creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LapRecord {
    lap: u32,
    splits: Vec<f64>,
    total_sec: f64,
    valid: bool,
}

impl LapRecord {
    /// 1-based lap index.
    pub fn lap(&self) -> u32 { self.lap }

    /// Split durations between consecutive gate passages, one per gate.
    pub fn splits(&self) -> &[f64] { &self.splits }

    pub fn total_sec(&self) -> f64 { self.total_sec }

    /// False iff an out-of-sequence gate entry occurred during this lap.
    pub fn valid(&self) -> bool { self.valid }
}

/// What one progress evaluation produced.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// 1-based sequence number of the gate passed this tick, if any.
    pub passed_gate: Option<usize>,
    /// The record of a lap that closed this tick, valid or not.
    pub closed_lap: Option<LapRecord>,
    /// All required laps are done.
    pub completed: bool,
}

/// The gate-sequence state machine: which gate is expected next, split and
/// lap timing, out-of-sequence invalidation.
#[derive(Debug)]
pub struct ProgressTracker {
    /// Index into the course's gate list, always in `[0, gate_count)`.
    current_gate: usize,
    laps_completed: u32,
    splits: Vec<f64>,
    lap_start_time: f64,
    last_checkpoint_time: f64,
    lap_invalid: bool,
    lap_records: Vec<LapRecord>,
}

impl ProgressTracker {
    pub fn new(start_time: f64) -> Self {
        Self {
            current_gate: 0,
            laps_completed: 0,
            splits: Vec::new(),
            lap_start_time: start_time,
            last_checkpoint_time: start_time,
            lap_invalid: false,
            lap_records: Vec::new(),
        }
    }

    pub fn current_gate(&self) -> usize { self.current_gate }

    pub fn laps_completed(&self) -> u32 { self.laps_completed }

    pub fn lap_start_time(&self) -> f64 { self.lap_start_time }

    pub fn lap_records(&self) -> &[LapRecord] { &self.lap_records }

    /// Re-anchors the lap clocks, used when the first observation arrives.
    pub fn seed(&mut self, start_time: f64) {
        self.lap_start_time = start_time;
        self.last_checkpoint_time = start_time;
    }

    /// Evaluates gate passage for one tick.
    ///
    /// A gate counts as entered only on a rising edge: the previous position
    /// was outside its trigger box (`None` counts as outside) and the current
    /// one is inside. Dwelling inside a box across ticks produces nothing.
    /// A rising edge into any gate other than the expected one marks the
    /// current lap invalid without advancing the sequence.
    pub fn observe(
        &mut self,
        course: &Course,
        p0: Option<Vec3D<f64>>,
        p1: Vec3D<f64>,
        now: f64,
    ) -> ProgressUpdate {
        let mut update = ProgressUpdate::default();
        let gate_count = course.gate_count();
        if gate_count == 0 {
            // no-gate mode, only the safety monitor can end this run
            return update;
        }

        let expected = &course.gates()[self.current_gate];
        if Self::rising_edge(expected, p0, p1) {
            self.splits.push(now - self.last_checkpoint_time);
            self.last_checkpoint_time = now;
            update.passed_gate = Some(expected.seq());
            self.current_gate = (self.current_gate + 1) % gate_count;

            if self.current_gate == 0 {
                update.closed_lap = Some(self.close_lap(now));
                if self.laps_completed >= course.laps_required() {
                    update.completed = true;
                }
            }
        } else {
            for gate in course.gates() {
                if gate.seq() != expected.seq() && Self::rising_edge(gate, p0, p1) {
                    self.lap_invalid = true;
                }
            }
        }
        update
    }

    fn rising_edge(
        gate: &super::course::Gate,
        p0: Option<Vec3D<f64>>,
        p1: Vec3D<f64>,
    ) -> bool {
        let was_outside = p0.is_none_or(|p| !gate.bound().contains(p));
        was_outside && gate.bound().contains(p1)
    }

    /// Closes the current lap: the lap counter increments even for an
    /// invalidated lap, only its telemetry is suppressed upstream.
    fn close_lap(&mut self, now: f64) -> LapRecord {
        let record = LapRecord {
            lap: self.laps_completed + 1,
            splits: std::mem::take(&mut self.splits),
            total_sec: now - self.lap_start_time,
            valid: !self.lap_invalid,
        };
        self.laps_completed += 1;
        self.lap_invalid = false;
        self.lap_start_time = now;
        self.last_checkpoint_time = now;
        self.lap_records.push(record.clone());
        record
    }
}
