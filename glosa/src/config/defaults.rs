//! Default values and constants for all configuration settings.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::file::config_directory;
use super::settings::*;
use crate::prediction::DEFAULT_SECONDARY_URL;

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Default per-attempt predictor timeout in seconds.
pub const DEFAULT_PREDICTOR_TIMEOUT_SECS: u64 = 3;

/// Default telemetry queue capacity.
pub const DEFAULT_TELEMETRY_QUEUE_CAPACITY: usize = 1024;

/// Default telemetry retries per record.
pub const DEFAULT_TELEMETRY_MAX_RETRIES: u32 = 3;

/// Default telemetry backoff base in milliseconds.
pub const DEFAULT_TELEMETRY_RETRY_BASE_DELAY_MS: u64 = 200;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE: &str = "glosa.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                bind: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_SERVER_PORT),
            },
            junctions: JunctionSettings { file: None },
            primary: PrimarySettings {
                endpoint: None,
                timeout_secs: DEFAULT_PREDICTOR_TIMEOUT_SECS,
            },
            secondary: SecondarySettings {
                url: DEFAULT_SECONDARY_URL.to_string(),
                timeout_secs: DEFAULT_PREDICTOR_TIMEOUT_SECS,
            },
            telemetry: TelemetrySettings {
                endpoint: None,
                queue_capacity: DEFAULT_TELEMETRY_QUEUE_CAPACITY,
                max_retries: DEFAULT_TELEMETRY_MAX_RETRIES,
                retry_base_delay_ms: DEFAULT_TELEMETRY_RETRY_BASE_DELAY_MS,
            },
            logging: LoggingSettings {
                file: config_directory().join(DEFAULT_LOG_FILE),
            },
        }
    }
}
