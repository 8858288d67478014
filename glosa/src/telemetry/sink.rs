//! Telemetry sink implementations.

use super::{TelemetryError, TelemetryRecord, TelemetrySink};
use crate::http::AsyncHttpClient;
use crate::BoxFuture;

/// Publishes records as JSON `{topic, payload}` to an ingestion endpoint.
pub struct HttpTelemetrySink<H: AsyncHttpClient> {
    http: H,
    endpoint: String,
}

impl<H: AsyncHttpClient> HttpTelemetrySink<H> {
    pub fn new(http: H, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    async fn send(&self, record: &TelemetryRecord) -> Result<(), TelemetryError> {
        let body =
            serde_json::to_string(record).map_err(|e| TelemetryError::Serialize(e.to_string()))?;
        self.http.post_json(&self.endpoint, &body).await?;
        tracing::trace!(topic = %record.topic, "Telemetry published");
        Ok(())
    }
}

impl<H: AsyncHttpClient> TelemetrySink for HttpTelemetrySink<H> {
    fn publish<'a>(&'a self, record: &'a TelemetryRecord) -> BoxFuture<'a, Result<(), TelemetryError>> {
        Box::pin(self.send(record))
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Sink used when no ingestion endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn publish<'a>(&'a self, record: &'a TelemetryRecord) -> BoxFuture<'a, Result<(), TelemetryError>> {
        tracing::trace!(topic = %record.topic, "Telemetry discarded (no sink configured)");
        Box::pin(async { Ok(()) })
    }

    fn name(&self) -> &str {
        "noop"
    }
}
