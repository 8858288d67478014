//! CLI runner for common setup.
//!
//! Loads the configuration, initializes logging and assembles the advisory
//! service so command handlers only deal with their own arguments.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use glosa::config::{config_file_path, ConfigFile};
use glosa::http::AsyncReqwestClient;
use glosa::junction::{InMemoryJunctionStore, JunctionLookup};
use glosa::logging::{init_logging, split_log_path, LoggingGuard};
use glosa::prediction::{
    CyclePlan, FixedCyclePredictor, PredictionOrchestrator, Predictor, PrimaryPredictor,
    SecondaryPredictor,
};
use glosa::service::AdvisoryService;
use glosa::telemetry::{HttpTelemetrySink, NoopTelemetrySink, TelemetryForwarder, TelemetrySink};

use crate::error::CliError;

/// Runner that owns the configuration and keeps logging alive.
pub struct CliRunner {
    _logging_guard: LoggingGuard,
    config: ConfigFile,
    config_path: PathBuf,
}

/// A built service together with its background telemetry task.
pub struct ServiceHandle {
    pub service: Arc<AdvisoryService>,
    pub telemetry_task: JoinHandle<()>,
}

impl CliRunner {
    /// Loads config from `config_path` (or the default location) and
    /// initializes logging. `stdout` mirrors log events to the terminal.
    pub fn new(config_path: Option<PathBuf>, stdout: bool) -> Result<Self, CliError> {
        let config_path = config_path.unwrap_or_else(config_file_path);
        let config = ConfigFile::load_from(&config_path)?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, stdout)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            _logging_guard: logging_guard,
            config,
            config_path,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!(version = glosa::VERSION, command, "GLOSA starting");
        info!(config = %self.config_path.display(), "Configuration loaded");
    }

    /// Starts a multi-threaded tokio runtime.
    pub fn runtime(&self) -> Result<tokio::runtime::Runtime, CliError> {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(CliError::Runtime)
    }

    /// Builds the advisory service from configuration.
    ///
    /// Must be called inside the runtime since the telemetry forwarder
    /// spawns its consumer task. With `offline`, the secondary slot is the
    /// fixed-cycle predictor instead of the local AI service.
    pub fn build_service(
        &self,
        offline: bool,
        shutdown: CancellationToken,
    ) -> Result<ServiceHandle, CliError> {
        let config = &self.config;
        let junctions = load_junctions(config.junctions.file.as_deref())?;

        let http = AsyncReqwestClient::new().map_err(CliError::HttpClient)?;

        let primary = PrimaryPredictor::new(http.clone(), config.primary.endpoint.clone());
        if !primary.is_provisioned() {
            info!("Primary predictor not provisioned, requests will use the secondary");
        }

        let secondary: Arc<dyn Predictor> = if offline {
            info!("Offline mode: using fixed-cycle predictor as secondary");
            Arc::new(FixedCyclePredictor::new(CyclePlan::default()))
        } else {
            let secondary = SecondaryPredictor::new(http.clone(), &config.secondary.url);
            info!(url = secondary.predict_url(), "Secondary predictor configured");
            Arc::new(secondary)
        };

        let orchestrator = PredictionOrchestrator::new(
            Arc::new(primary),
            config.primary.timeout(),
            secondary,
            config.secondary.timeout(),
        );

        let sink = telemetry_sink(http, config.telemetry.endpoint.as_deref(), offline);
        info!(sink = sink.name(), "Telemetry sink selected");
        let (forwarder, telemetry_task) =
            TelemetryForwarder::spawn(sink, config.telemetry.forwarder_config(), shutdown);

        let service = AdvisoryService::new(junctions, orchestrator, Some(forwarder));

        Ok(ServiceHandle {
            service: Arc::new(service),
            telemetry_task,
        })
    }
}

/// Offline mode never publishes, even with `[telemetry] endpoint` set.
fn telemetry_sink(
    http: AsyncReqwestClient,
    endpoint: Option<&str>,
    offline: bool,
) -> Arc<dyn TelemetrySink> {
    match endpoint {
        Some(endpoint) if !offline => Arc::new(HttpTelemetrySink::new(http, endpoint.to_string())),
        _ => Arc::new(NoopTelemetrySink),
    }
}

fn load_junctions(path: Option<&Path>) -> Result<Arc<dyn JunctionLookup>, CliError> {
    let store = match path {
        Some(path) => InMemoryJunctionStore::load_from(path),
        None => InMemoryJunctionStore::sample(),
    }
    .map_err(|error| CliError::Junctions {
        path: path.map(Path::to_path_buf),
        error,
    })?;

    info!(count = store.len(), "Junctions loaded");
    Ok(Arc::new(store))
}
