use super::progress::LapRecord;
use strum_macros::Display;

/// Why a mission run ended without completing.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FailureReason {
    Crash,
    Stuck,
    Timeout,
}

/// Lifecycle outcome of one mission run. Transitions are monotone:
/// `Running` moves at most once into `Completed` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    Running,
    Completed,
    Failed(FailureReason),
}

impl MissionOutcome {
    pub fn is_terminal(&self) -> bool { !matches!(self, MissionOutcome::Running) }
}

/// Tagged per-tick result steering the host loop: keep ticking, or stop
/// and tear the simulation session down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSignal {
    Continue,
    Terminal(MissionOutcome),
}

/// Discrete lifecycle events dispatched to the ledger reporter.
#[derive(Debug, Clone, PartialEq)]
pub enum MissionEvent {
    /// A valid lap closed; carries the lap's timing record.
    LapClosed(LapRecord),
    /// All required laps are done.
    Completed,
    /// The run ended early.
    Failed(FailureReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_wire_form() {
        assert_eq!(FailureReason::Crash.to_string(), "crash");
        assert_eq!(FailureReason::Stuck.to_string(), "stuck");
        assert_eq!(FailureReason::Timeout.to_string(), "timeout");
    }

    #[test]
    fn test_outcome_terminality() {
        assert!(!MissionOutcome::Running.is_terminal());
        assert!(MissionOutcome::Completed.is_terminal());
        assert!(MissionOutcome::Failed(FailureReason::Stuck).is_terminal());
    }
}
