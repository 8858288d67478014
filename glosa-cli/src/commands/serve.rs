//! Serve command - run the advisory HTTP server until Ctrl+C.

use std::net::SocketAddr;
use std::path::PathBuf;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the serve command.
pub struct ServeArgs {
    pub config_path: Option<PathBuf>,
    pub bind: Option<String>,
    pub offline: bool,
}

/// Run the serve command.
pub fn run(args: ServeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config_path, true)?;
    runner.log_startup("serve");

    let addr = resolve_bind(args.bind.as_deref(), runner.config().server.bind)?;
    let runtime = runner.runtime()?;
    let offline = args.offline;

    runtime.block_on(async {
        let shutdown = CancellationToken::new();
        let handle = runner.build_service(offline, shutdown.clone())?;

        let signal_token = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Shutdown requested"),
                Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C"),
            }
            signal_token.cancel();
        });

        println!("GLOSA advisory server v{}", glosa::VERSION);
        println!("Listening on http://{}", addr);
        println!("Press Ctrl+C to stop");

        let served = glosa::server::serve(handle.service, addr, shutdown.clone()).await;

        shutdown.cancel();
        if let Err(e) = handle.telemetry_task.await {
            warn!(error = %e, "Telemetry forwarder task failed");
        }

        served.map_err(CliError::Serve)
    })
}

/// CLI flag wins over the configured address.
fn resolve_bind(cli: Option<&str>, configured: SocketAddr) -> Result<SocketAddr, CliError> {
    match cli {
        Some(bind) => bind.parse().map_err(|_| {
            CliError::InvalidArgument(format!(
                "'{}' is not a socket address (expected e.g. 0.0.0.0:5000)",
                bind
            ))
        }),
        None => Ok(configured),
    }
}
