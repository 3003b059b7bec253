use super::course::CourseDescriptor;
use super::progress::LapRecord;
use super::signal::{FailureReason, MissionEvent};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    complete_post::MissionCompleteRequest,
    fail_post::MissionFailureRequest,
    mission_get::MissionRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
    telemetry_post::TelemetryRequest,
};
use crate::{error, info, warn};
use std::sync::Arc;

/// Delivers mission lifecycle events to the external ledger.
///
/// Reporting is fire-and-forget relative to the tick loop: lap telemetry is
/// sent from a spawned task, terminal reports are awaited once before the
/// process exits, and every delivery error is logged and discarded. No
/// deduplication happens here; the ledger gets at-least-once lap telemetry.
pub struct Reporter {
    client: Arc<HTTPClient>,
    mission_id: String,
    pilot: String,
    offline: bool,
}

impl Reporter {
    /// Mission id marking an offline run without any ledger.
    pub const LOCAL_MISSION_ID: &'static str = "local_mission";

    pub fn new(client: Arc<HTTPClient>, mission_id: &str, pilot: &str) -> Self {
        Self {
            client,
            mission_id: String::from(mission_id),
            pilot: String::from(pilot),
            offline: mission_id == Self::LOCAL_MISSION_ID,
        }
    }

    pub fn mission_id(&self) -> &str { &self.mission_id }

    pub fn is_offline(&self) -> bool { self.offline }

    /// Fetches the mission descriptor once at startup. Any fetch error falls
    /// back to an empty single-lap course instead of aborting the run.
    pub async fn fetch_descriptor(&self) -> CourseDescriptor {
        if self.offline {
            info!("Offline run, using fallback mission parameters.");
            return CourseDescriptor::fallback();
        }
        match MissionRequest::new(&self.mission_id).send_request(&self.client).await {
            Ok(response) => {
                info!("Fetched mission details for {}.", self.mission_id);
                response.into_descriptor()
            }
            Err(e) => {
                warn!(
                    "Error fetching mission details for {}: {e}. Using fallback parameters.",
                    self.mission_id
                );
                CourseDescriptor::fallback()
            }
        }
    }

    /// Routes one mission event to its ledger call.
    pub async fn deliver(&self, event: MissionEvent) {
        if self.offline {
            return;
        }
        match event {
            MissionEvent::LapClosed(record) => self.spawn_lap_telemetry(&record),
            MissionEvent::Completed => self.completion().await,
            MissionEvent::Failed(reason) => self.failure(reason).await,
        }
    }

    fn spawn_lap_telemetry(&self, record: &LapRecord) {
        let req = TelemetryRequest {
            mission: self.mission_id.clone(),
            pilot: self.pilot.clone(),
            lap_time_sec: record.total_sec(),
            checkpoint_times_sec: record.splits().to_vec(),
            status: "running",
        };
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            match req.send_request(&client).await {
                Ok(_) => info!("Telemetry sent."),
                Err(e) => error!("Error sending telemetry: {e}"),
            }
        });
    }

    async fn completion(&self) {
        match MissionCompleteRequest::new(&self.mission_id).send_request(&self.client).await {
            Ok(_) => info!("Mission completion signaled to ledger."),
            Err(e) => error!("Error signaling mission completion: {e}"),
        }
    }

    async fn failure(&self, reason: FailureReason) {
        match MissionFailureRequest::new(&self.mission_id, reason)
            .send_request(&self.client)
            .await
        {
            Ok(_) => info!("Mission failure ({reason}) signaled to ledger."),
            Err(e) => error!("Error signaling mission failure: {e}"),
        }
    }
}
