//! Configuration file handling.
//!
//! Settings live in `~/.glosa/config.ini`. Each `[section]` maps to one
//! struct in [`settings`]; missing keys keep their defaults from
//! [`defaults`].
//!
//! ```
//! use glosa::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.secondary.url, "http://localhost:8000");
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConfigFile, JunctionSettings, LoggingSettings, PrimarySettings, SecondarySettings,
    ServerSettings, TelemetrySettings,
};
