//! Ordered-fallback prediction orchestrator.
//!
//! Tries each configured predictor in order, bounding every attempt with
//! its own timeout. The first valid answer wins; failures before it are
//! logged and absorbed. If nothing answers, the caller gets
//! [`PredictionError::Unavailable`] with every provider's reason.
//!
//! Dropping the future returned by [`PredictionOrchestrator::predict`]
//! cancels whichever attempt is in flight.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::types::{
    PredictionError, PredictionRequest, PredictionResult, Predictor, PredictorError,
    ProviderFailure, ProviderKind,
};
use crate::geo::GeoPoint;

/// Default per-attempt timeout.
pub const DEFAULT_PREDICTOR_TIMEOUT: Duration = Duration::from_secs(3);

/// A predictor together with its identity and time budget.
#[derive(Clone)]
pub struct PredictorSlot {
    pub kind: ProviderKind,
    pub predictor: Arc<dyn Predictor>,
    pub timeout: Duration,
}

impl PredictorSlot {
    pub fn new(kind: ProviderKind, predictor: Arc<dyn Predictor>, timeout: Duration) -> Self {
        Self {
            kind,
            predictor,
            timeout,
        }
    }
}

/// Resolves signal phase predictions with primary → secondary failover.
#[derive(Clone)]
pub struct PredictionOrchestrator {
    slots: Vec<PredictorSlot>,
}

impl PredictionOrchestrator {
    /// Creates the standard two-tier orchestrator.
    pub fn new(
        primary: Arc<dyn Predictor>,
        primary_timeout: Duration,
        secondary: Arc<dyn Predictor>,
        secondary_timeout: Duration,
    ) -> Self {
        Self::with_slots(vec![
            PredictorSlot::new(ProviderKind::Primary, primary, primary_timeout),
            PredictorSlot::new(ProviderKind::Secondary, secondary, secondary_timeout),
        ])
    }

    /// Creates an orchestrator over an explicit attempt order.
    pub fn with_slots(slots: Vec<PredictorSlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[PredictorSlot] {
        &self.slots
    }

    /// Predicts the phase at `junction_id` for the given position and time.
    pub async fn predict(
        &self,
        junction_id: &str,
        position: GeoPoint,
        timestamp: f64,
    ) -> Result<PredictionResult, PredictionError> {
        let request = PredictionRequest {
            junction_id: junction_id.to_string(),
            position,
            timestamp,
        };

        let mut failures = Vec::new();

        for slot in &self.slots {
            match attempt(slot, &request).await {
                Ok(result) => {
                    if failures.is_empty() {
                        debug!(
                            junction_id,
                            provider = %slot.kind,
                            predictor = slot.predictor.name(),
                            "Prediction sourced"
                        );
                    } else {
                        info!(
                            junction_id,
                            provider = %slot.kind,
                            predictor = slot.predictor.name(),
                            failed_before = failures.len(),
                            "Prediction sourced from fallback provider"
                        );
                    }
                    return Ok(result);
                }
                Err(error) => {
                    warn!(
                        junction_id,
                        provider = %slot.kind,
                        predictor = slot.predictor.name(),
                        error = %error,
                        "Prediction provider failed"
                    );
                    failures.push(ProviderFailure {
                        provider: slot.kind,
                        error,
                    });
                }
            }
        }

        Err(PredictionError::Unavailable { failures })
    }
}

/// Runs one bounded, validated attempt.
async fn attempt(
    slot: &PredictorSlot,
    request: &PredictionRequest,
) -> Result<PredictionResult, PredictorError> {
    let prediction = tokio::time::timeout(slot.timeout, slot.predictor.predict(request))
        .await
        .map_err(|_| PredictorError::Timeout(slot.timeout))??
        .validate()?;

    Ok(PredictionResult {
        phase: prediction.phase,
        seconds_to_change: prediction.seconds_to_change,
        provider: slot.kind,
    })
}
