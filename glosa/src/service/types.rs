//! Boundary request/response types and service errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advisory::SignalPhase;
use crate::prediction::{PredictionError, ProviderKind};

/// Advisory request as received at the boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub junction_id: String,
    pub lat: f64,
    pub lng: f64,
    /// Epoch seconds; the current time is used when absent
    #[serde(default)]
    pub timestamp: Option<f64>,
}

/// Advisory response returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResponse {
    pub junction_name: String,
    /// Meters, rounded
    pub distance: u64,
    pub signal_status: SignalPhase,
    pub seconds_to_change: f64,
    /// km/h
    pub recommended_speed: u32,
    pub message: String,
    pub provider: ProviderKind,
}

/// Errors surfaced at the request boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Junction not found: {0}")]
    JunctionNotFound(String),

    #[error("Failed to compute advisory: {0}")]
    PredictionUnavailable(#[from] PredictionError),
}
