//! Prediction types and traits

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advisory::SignalPhase;
use crate::geo::GeoPoint;
use crate::http::HttpError;
pub(crate) use crate::BoxFuture;

/// What a predictor is asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub junction_id: String,
    /// Approximate vehicle position
    pub position: GeoPoint,
    /// Epoch seconds the prediction applies to
    pub timestamp: f64,
}

/// Raw phase/time answer from a single predictor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SignalPrediction {
    #[serde(rename = "current_status")]
    pub phase: SignalPhase,
    pub seconds_to_change: f64,
}

impl SignalPrediction {
    /// Rejects negative or non-finite seconds-to-change.
    pub fn validate(self) -> Result<Self, PredictorError> {
        if self.seconds_to_change.is_finite() && self.seconds_to_change >= 0.0 {
            Ok(self)
        } else {
            Err(PredictorError::InvalidValue(format!(
                "seconds_to_change = {}",
                self.seconds_to_change
            )))
        }
    }
}

/// Which configured provider answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Primary,
    Secondary,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Primary => "primary",
            ProviderKind::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated prediction tagged with the provider that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub phase: SignalPhase,
    pub seconds_to_change: f64,
    pub provider: ProviderKind,
}

/// Failure of a single predictor attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictorError {
    /// Transport or HTTP status failure
    #[error(transparent)]
    Http(#[from] HttpError),
    /// Response body was not the expected JSON shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Response parsed but carried an out-of-range value
    #[error("Invalid prediction value: {0}")]
    InvalidValue(String),
    /// No endpoint configured for this predictor
    #[error("Predictor endpoint not provisioned")]
    NotProvisioned,
    /// Attempt exceeded its time budget
    #[error("Prediction timed out after {0:?}")]
    Timeout(Duration),
}

/// One provider's failure, kept for the final error report.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderFailure {
    pub provider: ProviderKind,
    pub error: PredictorError,
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.provider, self.error)
    }
}

/// Orchestrator-level failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// Every configured predictor failed
    #[error("All prediction providers failed: {}", join_failures(.failures))]
    Unavailable { failures: Vec<ProviderFailure> },
}

fn join_failures(failures: &[ProviderFailure]) -> String {
    if failures.is_empty() {
        return "no providers configured".to_string();
    }
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A source of signal phase predictions.
///
/// Implementations share one request/response contract, so the
/// orchestrator can try them in any order.
pub trait Predictor: Send + Sync {
    /// Predicts the current phase and seconds until it changes.
    fn predict<'a>(
        &'a self,
        request: &'a PredictionRequest,
    ) -> BoxFuture<'a, Result<SignalPrediction, PredictorError>>;

    /// Returns the predictor's name for logging.
    fn name(&self) -> &str;
}

/// Decodes the shared `{current_status, seconds_to_change}` response body.
pub(crate) fn decode_prediction(body: &[u8]) -> Result<SignalPrediction, PredictorError> {
    serde_json::from_slice(body).map_err(|e| PredictorError::InvalidResponse(e.to_string()))
}
