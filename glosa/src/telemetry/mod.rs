//! Best-effort telemetry forwarding.
//!
//! Raw `(position, junction, timestamp)` tuples are handed to a
//! [`TelemetryForwarder`], which enqueues them without waiting. A separate
//! consumer task publishes each record to a [`TelemetrySink`] and retries
//! with exponential backoff. Nothing on this path can fail or delay an
//! advisory response; failures end up in the log and nowhere else.
//!
//! ```text
//! AdvisoryService ──try_forward──► mpsc queue ──► consumer task ──► TelemetrySink
//!                   (never awaits)   (bounded)     (retry/backoff)    (HTTP / noop)
//! ```

mod forwarder;
mod sink;

pub use forwarder::{TelemetryForwarder, TelemetryForwarderConfig};
pub use sink::{HttpTelemetrySink, NoopTelemetrySink};

use serde::Serialize;
use thiserror::Error;

use crate::geo::GeoPoint;
use crate::http::HttpError;
use crate::BoxFuture;

/// Topic prefix; the junction id is appended.
pub const TOPIC_PREFIX: &str = "glosa/telemetry";

/// Raw vehicle observation published to the ingestion system.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryPayload {
    pub lat: f64,
    pub lng: f64,
    pub junction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

/// A payload addressed to a topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    pub topic: String,
    pub payload: TelemetryPayload,
}

impl TelemetryRecord {
    /// Builds the record for one advisory request.
    pub fn new(junction_id: &str, position: GeoPoint, timestamp: Option<f64>) -> Self {
        Self {
            topic: format!("{}/{}", TOPIC_PREFIX, junction_id),
            payload: TelemetryPayload {
                lat: position.lat,
                lng: position.lng,
                junction_id: junction_id.to_string(),
                timestamp,
            },
        }
    }
}

/// Errors that can occur while publishing telemetry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TelemetryError {
    #[error("Telemetry publish failed: {0}")]
    Http(#[from] HttpError),

    #[error("Failed to serialize telemetry: {0}")]
    Serialize(String),
}

/// Destination for telemetry records.
pub trait TelemetrySink: Send + Sync {
    /// Publishes one record.
    fn publish<'a>(&'a self, record: &'a TelemetryRecord) -> BoxFuture<'a, Result<(), TelemetryError>>;

    /// Returns the sink's name for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_topic_and_payload() {
        let record = TelemetryRecord::new("J001", GeoPoint::new(28.1, 77.2), Some(1700000000.0));
        assert_eq!(record.topic, "glosa/telemetry/J001");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["topic"], "glosa/telemetry/J001");
        assert_eq!(json["payload"]["junctionId"], "J001");
        assert_eq!(json["payload"]["lat"], 28.1);
        assert_eq!(json["payload"]["timestamp"], 1700000000.0);
    }

    #[test]
    fn test_missing_timestamp_is_omitted() {
        let record = TelemetryRecord::new("J9", GeoPoint::new(0.0, 0.0), None);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["payload"].get("timestamp").is_none());
    }
}
