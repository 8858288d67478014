//! Signal phase prediction with provider failover
//!
//! This module sources the current phase and seconds-to-change for a
//! junction. Predictors share a single contract ([`Predictor`]) and the
//! [`PredictionOrchestrator`] tries them in order:
//!
//! ```text
//! PredictionOrchestrator
//!     │
//!     ├── 1. PrimaryPredictor   (remote inference endpoint, bounded timeout)
//!     │        └── any failure → warn, continue
//!     │
//!     └── 2. SecondaryPredictor (local AI service, bounded timeout)
//!              └── failure → PredictionError::Unavailable
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use glosa::http::AsyncReqwestClient;
//! use glosa::prediction::{PredictionOrchestrator, PrimaryPredictor, SecondaryPredictor};
//!
//! let http = AsyncReqwestClient::new()?;
//! let orchestrator = PredictionOrchestrator::new(
//!     Arc::new(PrimaryPredictor::new(http.clone(), endpoint)),
//!     Duration::from_secs(3),
//!     Arc::new(SecondaryPredictor::new(http, "http://localhost:8000")),
//!     Duration::from_secs(3),
//! );
//! let result = orchestrator.predict("J001", position, timestamp).await?;
//! ```

mod cycle;
mod orchestrator;
mod primary;
mod secondary;
mod types;

pub use cycle::{CyclePlan, FixedCyclePredictor};
pub use orchestrator::{PredictionOrchestrator, PredictorSlot, DEFAULT_PREDICTOR_TIMEOUT};
pub use primary::PrimaryPredictor;
pub use secondary::{SecondaryPredictor, DEFAULT_SECONDARY_URL};
pub use types::{
    PredictionError, PredictionRequest, PredictionResult, Predictor, PredictorError,
    ProviderFailure, ProviderKind, SignalPrediction,
};
