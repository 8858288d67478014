//! Reading and writing `config.ini`.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::settings::ConfigFile;

/// Errors raised while loading or saving `config.ini`.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The file exists but is not valid INI
    #[error("Cannot read config.ini: {0}")]
    ReadError(#[from] ini::Error),

    /// The file could not be written
    #[error("Cannot write config.ini: {0}")]
    WriteError(String),

    /// A key held a value it cannot take
    #[error("[{section}] {key} = '{value}' is invalid: {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// The parent directory could not be created
    #[error("Cannot create configuration directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Reads `~/.glosa/config.ini`.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Reads `path`, overlaying its keys on the defaults.
    ///
    /// A missing file is not an error; it yields [`ConfigFile::default`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        super::parser::parse_ini(&Ini::load_from_file(path)?)
    }

    /// Writes the commented INI form of this configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(ConfigFileError::DirectoryError)?;
        }
        std::fs::write(path, super::writer::to_config_string(self))
            .map_err(|e| ConfigFileError::WriteError(format!("{}: {}", path.display(), e)))
    }

    /// Writes the default configuration unless `path` already exists.
    ///
    /// Returns whether a new file was written.
    pub fn ensure_exists(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }
}

/// `~/.glosa`, or `./.glosa` when no home directory is known.
pub fn config_directory() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".glosa"), |home| home.join(".glosa"))
}

/// `~/.glosa/config.ini`.
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let defaults = ConfigFile::default();

        assert_eq!(defaults.server.bind.port(), DEFAULT_SERVER_PORT);
        assert!(defaults.primary.endpoint.is_none());
        assert_eq!(defaults.primary.timeout_secs, DEFAULT_PREDICTOR_TIMEOUT_SECS);
        assert_eq!(defaults.secondary.url, "http://localhost:8000");
        assert!(defaults.telemetry.endpoint.is_none());
        assert!(defaults.junctions.file.is_none());
        assert!(defaults.logging.file.ends_with(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ConfigFile::load_from(&dir.path().join("absent.ini")).unwrap();
        assert_eq!(loaded, ConfigFile::default());
    }

    #[test]
    fn test_written_file_reads_back_equal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.ini");

        let mut written = ConfigFile::default();
        written.primary.endpoint = Some("https://infer.example/glosa".to_string());
        written.secondary.timeout_secs = 5;
        written.telemetry.endpoint = Some("https://ingest.example/publish".to_string());
        written.telemetry.max_retries = 7;
        written.save_to(&path).unwrap();

        assert_eq!(ConfigFile::load_from(&path).unwrap(), written);
    }

    #[test]
    fn test_ensure_exists_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        assert!(ConfigFile::ensure_exists(&path).unwrap());
        assert!(path.exists());
        assert!(!ConfigFile::ensure_exists(&path).unwrap());
    }

    #[test]
    fn test_invalid_value_message_names_the_key() {
        let err = ConfigFileError::InvalidValue {
            section: "primary".to_string(),
            key: "timeout_secs".to_string(),
            value: "0".to_string(),
            reason: "must be a positive integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "[primary] timeout_secs = '0' is invalid: must be a positive integer"
        );
    }
}
