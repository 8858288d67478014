//! CLI error handling with user-friendly messages.

use std::fmt;
use std::path::PathBuf;
use std::process;

use glosa::config::ConfigFileError;
use glosa::geo::GeoError;
use glosa::http::HttpError;
use glosa::junction::JunctionStoreError;
use glosa::service::ServiceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read or written
    Config(ConfigFileError),
    /// A command-line value was rejected
    InvalidArgument(String),
    /// Junction seed file could not be loaded
    Junctions {
        path: Option<PathBuf>,
        error: JunctionStoreError,
    },
    /// HTTP client could not be built
    HttpClient(HttpError),
    /// Tokio runtime could not be started
    Runtime(std::io::Error),
    /// Server failed to bind or stopped with an error
    Serve(std::io::Error),
    /// Advisory request failed
    Advisory(ServiceError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Config(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!("Fix the value in config.ini, or regenerate it with:");
                eprintln!("  glosa init --force");
            }
            CliError::Serve(_) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. Port already in use: change [server] bind or pass --bind");
                eprintln!("  2. Ports below 1024 need elevated privileges");
            }
            CliError::Advisory(ServiceError::PredictionUnavailable(_)) => {
                eprintln!();
                eprintln!("No prediction provider answered. Check that:");
                eprintln!("  1. The local AI service is reachable at [secondary] url");
                eprintln!("  2. Or run with --offline to use the fixed-cycle predictor");
            }
            CliError::Advisory(ServiceError::JunctionNotFound(_)) => {
                eprintln!();
                eprintln!("Known junction ids are listed at GET /api/junctions.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Junctions { path: Some(path), error } => {
                write!(f, "Failed to load junctions from '{}': {}", path.display(), error)
            }
            CliError::Junctions { path: None, error } => {
                write!(f, "Failed to load built-in junctions: {}", error)
            }
            CliError::HttpClient(e) => write!(f, "{}", e),
            CliError::Runtime(e) => write!(f, "Failed to start async runtime: {}", e),
            CliError::Serve(e) => write!(f, "Server error: {}", e),
            CliError::Advisory(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Junctions { error, .. } => Some(error),
            CliError::HttpClient(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            CliError::Serve(e) => Some(e),
            CliError::Advisory(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        CliError::Advisory(e)
    }
}

impl From<GeoError> for CliError {
    fn from(e: GeoError) -> Self {
        CliError::InvalidArgument(e.to_string())
    }
}
