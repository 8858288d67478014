//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::telemetry::TelemetryForwarderConfig;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// HTTP server settings
    pub server: ServerSettings,
    /// Junction seed data
    pub junctions: JunctionSettings,
    /// Remote inference endpoint
    pub primary: PrimarySettings,
    /// Local AI service fallback
    pub secondary: SecondarySettings,
    /// Telemetry ingestion
    pub telemetry: TelemetrySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Address the advisory server binds to
    pub bind: SocketAddr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JunctionSettings {
    /// JSON seed file; `None` uses the bundled sample set
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimarySettings {
    /// Inference endpoint URL; `None` means not provisioned
    pub endpoint: Option<String>,
    /// Per-attempt timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecondarySettings {
    /// Base URL of the AI service (`/predict` is appended)
    pub url: String,
    /// Per-attempt timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySettings {
    /// Ingestion URL; `None` discards telemetry
    pub endpoint: Option<String>,
    /// Records buffered before new ones are dropped
    pub queue_capacity: usize,
    /// Retries per record after the first failure
    pub max_retries: u32,
    /// Base delay for exponential backoff, in milliseconds
    pub retry_base_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

impl PrimarySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SecondarySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl TelemetrySettings {
    /// Forwarder configuration derived from these settings.
    pub fn forwarder_config(&self) -> TelemetryForwarderConfig {
        TelemetryForwarderConfig {
            queue_capacity: self.queue_capacity,
            max_retries: self.max_retries,
            retry_base_delay: Duration::from_millis(self.retry_base_delay_ms),
            ..Default::default()
        }
    }
}
