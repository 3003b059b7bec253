pub(crate) mod common;
pub mod course;
mod progress;
mod reporter;
mod safety;
mod signal;
mod supervisor;
mod vehicle;

pub use progress::{LapRecord, ProgressTracker};
pub use reporter::Reporter;
pub use safety::SafetyMonitor;
pub use signal::{FailureReason, MissionEvent, MissionOutcome, TickSignal};
pub use supervisor::MissionSupervisor;
pub use vehicle::Observation;
