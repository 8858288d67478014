//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use std::path::PathBuf;
use std::str::FromStr;

use ini::{Ini, Properties};

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [server] section
    if let Some(section) = ini.section(Some("server")) {
        if let Some(v) = section.get("bind") {
            config.server.bind = v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "server".to_string(),
                key: "bind".to_string(),
                value: v.to_string(),
                reason: "expected a socket address like '0.0.0.0:5000'".to_string(),
            })?;
        }
    }

    // [junctions] section
    if let Some(section) = ini.section(Some("junctions")) {
        if let Some(v) = non_empty(section, "file") {
            config.junctions.file = Some(expand_tilde(v));
        }
    }

    // [primary] section
    if let Some(section) = ini.section(Some("primary")) {
        if let Some(v) = non_empty(section, "endpoint") {
            config.primary.endpoint = Some(v.to_string());
        }
        if let Some(v) = section.get("timeout_secs") {
            config.primary.timeout_secs = parse_positive(v, "primary", "timeout_secs")?;
        }
    }

    // [secondary] section
    if let Some(section) = ini.section(Some("secondary")) {
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if v.is_empty() {
                return Err(ConfigFileError::InvalidValue {
                    section: "secondary".to_string(),
                    key: "url".to_string(),
                    value: v.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            config.secondary.url = v.to_string();
        }
        if let Some(v) = section.get("timeout_secs") {
            config.secondary.timeout_secs = parse_positive(v, "secondary", "timeout_secs")?;
        }
    }

    // [telemetry] section
    if let Some(section) = ini.section(Some("telemetry")) {
        if let Some(v) = non_empty(section, "endpoint") {
            config.telemetry.endpoint = Some(v.to_string());
        }
        if let Some(v) = section.get("queue_capacity") {
            config.telemetry.queue_capacity = parse_positive(v, "telemetry", "queue_capacity")?;
        }
        if let Some(v) = section.get("max_retries") {
            config.telemetry.max_retries = parse_value(v, "telemetry", "max_retries")?;
        }
        if let Some(v) = section.get("retry_base_delay_ms") {
            config.telemetry.retry_base_delay_ms =
                parse_value(v, "telemetry", "retry_base_delay_ms")?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section, "file") {
            config.logging.file = expand_tilde(v);
        }
    }

    Ok(config)
}

/// Returns the trimmed value of `key`, treating empty values as absent.
fn non_empty<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section.get(key).map(str::trim).filter(|v| !v.is_empty())
}

fn parse_value<T: FromStr>(v: &str, section: &str, key: &str) -> Result<T, ConfigFileError> {
    v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: v.to_string(),
        reason: "must be a non-negative integer".to_string(),
    })
}

fn parse_positive<T>(v: &str, section: &str, key: &str) -> Result<T, ConfigFileError>
where
    T: FromStr + PartialOrd + Default,
{
    match v.trim().parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: v.to_string(),
            reason: "must be a positive integer".to_string(),
        }),
    }
}

/// Expand `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
