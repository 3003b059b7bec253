#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod http_handler;
mod logger;
mod mission_control;

use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    observation_get::ObservationRequest, request_common::NoBodyHTTPRequestType,
};
use crate::mission_control::course::{Course, DEFAULT_TRIGGER_MARGIN};
use crate::mission_control::{
    MissionOutcome, MissionSupervisor, Observation, Reporter, TickSignal,
};
use std::process::ExitCode;
use std::{env, sync::Arc, time::Duration};

/// Fixed timestep of the supervision loop.
const TICK_INTERVAL: Duration = Duration::from_millis(32);
/// Observation fetch attempts before startup is declared failed.
const STARTUP_OBS_RETRIES: u32 = 10;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    let base_url_var = env::var("SIMFORGE_API");
    let base_url = base_url_var.as_ref().map_or("http://localhost:8000", |v| v.as_str());
    let mission_id = mission_id_from_args();
    let pilot = env::var("USERNAME").unwrap_or_else(|_| String::from("local"));
    let margin = env::var("GATE_TRIGGER_MARGIN")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TRIGGER_MARGIN);

    let client = Arc::new(HTTPClient::new(base_url));
    let reporter = Reporter::new(Arc::clone(&client), &mission_id, &pilot);

    let descriptor = reporter.fetch_descriptor().await;
    let course = Course::load(&descriptor, margin)
        .unwrap_or_else(|e| fatal!("Invalid course for mission {mission_id}: {e}"));
    info!(
        "Mission {mission_id} has {} gates and requires {} laps (timeout {:.0}s/lap).",
        course.gate_count(),
        course.laps_required(),
        course.timeout_sec()
    );

    let (mut supervisor, mut event_rx) = MissionSupervisor::new(course);
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    let mut startup_failures = 0;
    let mut observed_once = false;

    loop {
        interval.tick().await;
        let obs = match next_observation(&client).await {
            Ok(obs) => obs,
            Err(e) => {
                if observed_once {
                    error!("Observation fetch failed, skipping tick: {e}");
                    continue;
                }
                startup_failures += 1;
                if startup_failures > STARTUP_OBS_RETRIES {
                    fatal!("Simulation bridge unreachable, aborting before launch: {e}");
                }
                warn!("No observation yet ({startup_failures}/{STARTUP_OBS_RETRIES}): {e}");
                continue;
            }
        };
        observed_once = true;

        let signal = supervisor.tick(&obs);
        while let Ok(ev) = event_rx.try_recv() {
            reporter.deliver(ev).await;
        }

        if let TickSignal::Terminal(outcome) = signal {
            return match outcome {
                MissionOutcome::Completed => {
                    info!("Mission {mission_id} completed! Total time: {:.2}s", obs.sim_time);
                    ExitCode::SUCCESS
                }
                MissionOutcome::Failed(reason) => {
                    log!("Mission {mission_id} failed ({reason}) after {:.2}s.", obs.sim_time);
                    ExitCode::FAILURE
                }
                MissionOutcome::Running => ExitCode::FAILURE,
            };
        }
    }
}

/// Resolves the mission id from `MISSION_ID=<id>` process arguments, the
/// `MISSION_ID` environment variable, or the offline default.
fn mission_id_from_args() -> String {
    for arg in env::args().skip(1) {
        if let Some(id) = arg.strip_prefix("MISSION_ID=") {
            return String::from(id);
        }
    }
    env::var("MISSION_ID").unwrap_or_else(|_| String::from(Reporter::LOCAL_MISSION_ID))
}

/// Polls the simulation bridge for the current vehicle pose.
async fn next_observation(client: &HTTPClient) -> Result<Observation, HTTPError> {
    Ok(ObservationRequest {}.send_request(client).await?.observation())
}
