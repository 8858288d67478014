//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let junctions_file = config
        .junctions
        .file
        .as_deref()
        .map(path_to_string)
        .unwrap_or_default();
    let primary_endpoint = config.primary.endpoint.as_deref().unwrap_or("");
    let telemetry_endpoint = config.telemetry.endpoint.as_deref().unwrap_or("");

    format!(
        r#"[server]
; Address the advisory HTTP server listens on
bind = {}

[junctions]
; JSON file of {{id, name, lat, lng, cycle_time}} records
; If empty, the bundled sample junctions are used
file = {}

[primary]
; Remote inference endpoint (receives {{junctionId, lat, lng}})
; If empty, the primary predictor is treated as not provisioned
endpoint = {}
; Seconds before a primary attempt is abandoned (default: 3)
timeout_secs = {}

[secondary]
; Base URL of the local AI service (POST <url>/predict)
url = {}
; Seconds before a secondary attempt is abandoned (default: 3)
timeout_secs = {}

[telemetry]
; Ingestion endpoint for raw position data (receives {{topic, payload}})
; If empty, telemetry is discarded
endpoint = {}
; Records buffered before new ones are dropped (default: 1024)
queue_capacity = {}
; Retries per record after a failed publish (default: 3)
max_retries = {}
; Base delay for exponential backoff in milliseconds (default: 200)
retry_base_delay_ms = {}

[logging]
; Log file location
file = {}
"#,
        config.server.bind,
        junctions_file,
        primary_endpoint,
        config.primary.timeout_secs,
        config.secondary.url,
        config.secondary.timeout_secs,
        telemetry_endpoint,
        config.telemetry.queue_capacity,
        config.telemetry.max_retries,
        config.telemetry.retry_base_delay_ms,
        path_to_string(&config.logging.file),
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
