//! Queue-backed telemetry forwarder.
//!
//! # Design
//!
//! Follows the same daemon pattern as the network adapters:
//! - `spawn()` → returns a cloneable producer handle and the consumer's `JoinHandle`
//! - Consumer loop drains a bounded `mpsc` channel
//! - Exponential backoff between retries (`base × 2^n`, capped)
//! - Stops when every producer is dropped or the cancellation token fires

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{TelemetryRecord, TelemetrySink};

/// Configuration for the telemetry forwarder.
#[derive(Debug, Clone)]
pub struct TelemetryForwarderConfig {
    /// Maximum number of records waiting to be published.
    pub queue_capacity: usize,

    /// Retries after the first failed publish of a record.
    pub max_retries: u32,

    /// Delay before the first retry.
    pub retry_base_delay: Duration,

    /// Upper bound on any single retry delay.
    pub max_retry_delay: Duration,
}

impl Default for TelemetryForwarderConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 1024,
            max_retries: 3,
            retry_base_delay: Duration::from_millis(200),
            max_retry_delay: Duration::from_secs(30),
        }
    }
}

/// Producer handle for fire-and-forget telemetry.
///
/// Cloning shares the same queue.
#[derive(Clone)]
pub struct TelemetryForwarder {
    tx: mpsc::Sender<TelemetryRecord>,
}

impl TelemetryForwarder {
    /// Spawns the consumer task and returns the producer handle.
    pub fn spawn(
        sink: Arc<dyn TelemetrySink>,
        config: TelemetryForwarderConfig,
        cancellation: CancellationToken,
    ) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));

        let handle = tokio::spawn(async move {
            run(rx, sink, config, cancellation).await;
        });

        (Self { tx }, handle)
    }

    /// Enqueues a record without waiting.
    ///
    /// Returns `false` if the record was dropped because the queue is full
    /// or the consumer has stopped.
    pub fn try_forward(&self, record: TelemetryRecord) -> bool {
        match self.tx.try_send(record) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(record)) => {
                warn!(topic = %record.topic, "Telemetry queue full, dropping record");
                false
            }
            Err(mpsc::error::TrySendError::Closed(record)) => {
                warn!(topic = %record.topic, "Telemetry forwarder stopped, dropping record");
                false
            }
        }
    }
}

/// Consumer loop.
async fn run(
    mut rx: mpsc::Receiver<TelemetryRecord>,
    sink: Arc<dyn TelemetrySink>,
    config: TelemetryForwarderConfig,
    cancellation: CancellationToken,
) {
    info!(
        sink = sink.name(),
        queue_capacity = config.queue_capacity,
        max_retries = config.max_retries,
        "Telemetry forwarder started"
    );

    loop {
        let record = tokio::select! {
            _ = cancellation.cancelled() => break,
            next = rx.recv() => match next {
                Some(record) => record,
                None => break,
            },
        };

        publish_with_retry(sink.as_ref(), &record, &config, &cancellation).await;
    }

    info!("Telemetry forwarder stopped");
}

/// Publishes one record, retrying with backoff. Returns whether it was delivered.
async fn publish_with_retry(
    sink: &dyn TelemetrySink,
    record: &TelemetryRecord,
    config: &TelemetryForwarderConfig,
    cancellation: &CancellationToken,
) -> bool {
    let mut attempt: u32 = 0;

    loop {
        match sink.publish(record).await {
            Ok(()) => return true,
            Err(e) if attempt < config.max_retries => {
                let backoff = calculate_backoff(config, attempt);
                debug!(
                    topic = %record.topic,
                    error = %e,
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    "Telemetry publish failed, retrying"
                );
                tokio::select! {
                    _ = cancellation.cancelled() => return false,
                    _ = tokio::time::sleep(backoff) => {}
                }
                attempt += 1;
            }
            Err(e) => {
                warn!(
                    topic = %record.topic,
                    error = %e,
                    attempts = attempt + 1,
                    "Telemetry publish failed, dropping record"
                );
                return false;
            }
        }
    }
}

/// Calculate exponential backoff: base × 2^n, capped at `max_retry_delay`.
fn calculate_backoff(config: &TelemetryForwarderConfig, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.min(20));
    config
        .retry_base_delay
        .saturating_mul(factor)
        .min(config.max_retry_delay)
}
