//! Advise command - compute one advisory and print it.

use std::path::PathBuf;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use glosa::service::{AdvisoryRequest, AdvisoryResponse};

use crate::error::CliError;
use crate::runner::CliRunner;

const TELEMETRY_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Arguments for the advise command.
pub struct AdviseArgs {
    pub config_path: Option<PathBuf>,
    pub junction_id: String,
    pub lat: f64,
    pub lng: f64,
    pub timestamp: Option<f64>,
    pub offline: bool,
    pub json: bool,
}

/// Run the advise command.
pub fn run(args: AdviseArgs) -> Result<(), CliError> {
    // Log to file only so the printed advisory stays clean
    let runner = CliRunner::new(args.config_path, false)?;
    runner.log_startup("advise");
    let runtime = runner.runtime()?;
    let offline = args.offline;

    let request = AdvisoryRequest {
        junction_id: args.junction_id,
        lat: args.lat,
        lng: args.lng,
        timestamp: args.timestamp,
    };

    let response = runtime.block_on(async {
        let shutdown = CancellationToken::new();
        let handle = runner.build_service(offline, shutdown.clone())?;

        let result = handle.service.advise(&request).await;

        // Give queued telemetry a moment to drain, then stop the forwarder
        drop(handle.service);
        let mut task = handle.telemetry_task;
        let joined = match tokio::time::timeout(TELEMETRY_DRAIN_TIMEOUT, &mut task).await {
            Ok(joined) => joined,
            Err(_) => {
                shutdown.cancel();
                task.await
            }
        };
        if let Err(e) = joined {
            warn!(error = %e, "Telemetry forwarder task failed");
        }

        result.map_err(CliError::from)
    })?;

    if args.json {
        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
        println!("{}", json);
    } else {
        print!("{}", format_advisory(&response));
    }

    Ok(())
}

fn format_advisory(response: &AdvisoryResponse) -> String {
    format!(
        "Junction:      {}\n\
         Distance:      {} m\n\
         Signal:        {} ({:.1} s to change)\n\
         Speed:         {} km/h\n\
         Advisory:      {}\n\
         Provider:      {}\n",
        response.junction_name,
        response.distance,
        response.signal_status,
        response.seconds_to_change,
        response.recommended_speed,
        response.message,
        response.provider,
    )
}
