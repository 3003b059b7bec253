use super::course::Course;
use super::progress::{ProgressTracker, ProgressUpdate};
use super::safety::SafetyMonitor;
use super::signal::{MissionEvent, MissionOutcome, TickSignal};
use super::vehicle::Observation;
use crate::{error, event, gate, info, warn};
use tokio::sync::{mpsc, mpsc::Receiver};

/// Per-tick orchestrator for one mission run.
///
/// Owns the course and all mutable run state exclusively. Each tick runs the
/// safety monitor first (a violation short-circuits everything), then gate
/// progress, and pushes resulting [`MissionEvent`]s into the channel handed
/// out at construction. Once a terminal outcome is reached every further
/// `tick` call is a no-op.
#[derive(Debug)]
pub struct MissionSupervisor {
    course: Course,
    progress: ProgressTracker,
    safety: SafetyMonitor,
    outcome: MissionOutcome,
    event_tx: mpsc::Sender<MissionEvent>,
    seeded: bool,
}

impl MissionSupervisor {
    /// Capacity of the mission event channel.
    const EVENT_CHANNEL_SIZE: usize = 32;

    /// Creates a supervisor for the given course plus the receiving end of
    /// its event channel.
    pub fn new(course: Course) -> (MissionSupervisor, Receiver<MissionEvent>) {
        let (tx, rx) = mpsc::channel(Self::EVENT_CHANNEL_SIZE);
        (
            Self {
                course,
                progress: ProgressTracker::new(0.0),
                safety: SafetyMonitor::new(0.0),
                outcome: MissionOutcome::Running,
                event_tx: tx,
                seeded: false,
            },
            rx,
        )
    }

    pub fn outcome(&self) -> MissionOutcome { self.outcome }

    pub fn course(&self) -> &Course { &self.course }

    pub fn progress(&self) -> &ProgressTracker { &self.progress }

    /// Evaluates one simulation tick.
    pub fn tick(&mut self, obs: &Observation) -> TickSignal {
        if self.outcome.is_terminal() {
            return TickSignal::Terminal(self.outcome);
        }
        if !self.seeded {
            // lap and movement clocks start with the first observation
            self.progress.seed(obs.sim_time);
            self.safety.seed(obs.sim_time);
            self.seeded = true;
        }

        if let Some(reason) = self.safety.check(
            obs,
            self.progress.lap_start_time(),
            self.course.timeout_sec(),
        ) {
            warn!("Mission failure detected: {reason}");
            self.outcome = MissionOutcome::Failed(reason);
            self.emit(MissionEvent::Failed(reason));
            return TickSignal::Terminal(self.outcome);
        }

        let update =
            self.progress.observe(&self.course, self.safety.previous_position(), obs.pos, obs.sim_time);
        self.handle_progress(update);
        self.safety.remember(obs);

        if self.outcome.is_terminal() {
            TickSignal::Terminal(self.outcome)
        } else {
            TickSignal::Continue
        }
    }

    fn handle_progress(&mut self, update: ProgressUpdate) {
        if let Some(seq) = update.passed_gate {
            gate!("Passed Checkpoint {seq}/{}!", self.course.gate_count());
        }
        if let Some(record) = update.closed_lap {
            if record.valid() {
                info!(
                    "Lap {} completed in {:.2}s ({}/{} laps)",
                    record.lap(),
                    record.total_sec(),
                    self.progress.laps_completed(),
                    self.course.laps_required()
                );
                self.emit(MissionEvent::LapClosed(record));
            } else {
                warn!("Lap {} invalidated due to out-of-sequence gate.", record.lap());
            }
        }
        if update.completed {
            info!("Mission completed after {} laps!", self.progress.laps_completed());
            self.outcome = MissionOutcome::Completed;
            self.emit(MissionEvent::Completed);
        }
    }

    /// Event delivery must never stall the tick loop; a full channel drops
    /// the event with a log line.
    fn emit(&self, ev: MissionEvent) {
        event!("Emitting mission event: {ev:?}");
        if let Err(e) = self.event_tx.try_send(ev) {
            error!("Dropping mission event: {e}");
        }
    }
}
