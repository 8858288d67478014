//! Advisory service facade.
//!
//! Composes the junction lookup, distance calculation, prediction
//! orchestrator, advisory engine and telemetry forwarder into the single
//! per-request operation exposed at the boundary.
//!
//! ```ignore
//! let service = AdvisoryService::new(junctions, orchestrator, Some(forwarder));
//! let response = service.advise(&request).await?;
//! println!("{} km/h: {}", response.recommended_speed, response.message);
//! ```

mod types;

pub use types::{AdvisoryRequest, AdvisoryResponse, ServiceError};

use std::sync::Arc;

use tracing::debug;

use crate::advisory::advise;
use crate::geo::{distance_meters, GeoPoint};
use crate::junction::{Junction, JunctionLookup};
use crate::prediction::PredictionOrchestrator;
use crate::telemetry::{TelemetryForwarder, TelemetryRecord};

/// Stateless advisory pipeline. Shared across requests via `Arc`.
pub struct AdvisoryService {
    junctions: Arc<dyn JunctionLookup>,
    orchestrator: PredictionOrchestrator,
    telemetry: Option<TelemetryForwarder>,
}

impl AdvisoryService {
    pub fn new(
        junctions: Arc<dyn JunctionLookup>,
        orchestrator: PredictionOrchestrator,
        telemetry: Option<TelemetryForwarder>,
    ) -> Self {
        Self {
            junctions,
            orchestrator,
            telemetry,
        }
    }

    /// Returns every known junction.
    pub fn junctions(&self) -> Vec<Junction> {
        self.junctions.list()
    }

    /// Computes the advisory for one vehicle approaching one junction.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidInput`] for non-finite coordinates or a bad timestamp
    /// - [`ServiceError::JunctionNotFound`] when the id is unknown
    /// - [`ServiceError::PredictionUnavailable`] when every predictor failed
    pub async fn advise(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse, ServiceError> {
        let position = GeoPoint::new_checked(request.lat, request.lng)
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        if let Some(ts) = request.timestamp {
            if !ts.is_finite() || ts < 0.0 {
                return Err(ServiceError::InvalidInput(format!(
                    "Invalid timestamp: {} (must be non-negative epoch seconds)",
                    ts
                )));
            }
        }

        let junction = self
            .junctions
            .get(&request.junction_id)
            .ok_or_else(|| ServiceError::JunctionNotFound(request.junction_id.clone()))?;

        let distance = distance_meters(position, junction.location);
        if !distance.is_finite() {
            return Err(ServiceError::InvalidInput(format!(
                "Distance to junction '{}' is not finite",
                junction.id
            )));
        }

        if let Some(telemetry) = &self.telemetry {
            telemetry.try_forward(TelemetryRecord::new(
                &junction.id,
                position,
                request.timestamp,
            ));
        }

        let timestamp = request.timestamp.unwrap_or_else(now_epoch_secs);
        let prediction = self
            .orchestrator
            .predict(&junction.id, position, timestamp)
            .await?;

        let advisory = advise(distance, prediction.seconds_to_change, prediction.phase);

        debug!(
            junction_id = %junction.id,
            distance_m = distance,
            phase = %prediction.phase,
            seconds_to_change = prediction.seconds_to_change,
            provider = %prediction.provider,
            speed_kmh = advisory.recommended_speed_kmh,
            "Advisory computed"
        );

        Ok(AdvisoryResponse {
            junction_name: junction.name,
            distance: distance.round() as u64,
            signal_status: prediction.phase,
            seconds_to_change: prediction.seconds_to_change,
            recommended_speed: advisory.recommended_speed_kmh,
            message: advisory.message.to_string(),
            provider: prediction.provider,
        })
    }
}

/// Current time as fractional epoch seconds.
fn now_epoch_secs() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}
