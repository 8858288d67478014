//! GLOSA CLI - Command-line interface
//!
//! Runs the advisory HTTP server and offers one-shot helpers for computing
//! an advisory or a distance from the terminal.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::advise::AdviseArgs;
use commands::distance::DistanceArgs;
use commands::serve::ServeArgs;

#[derive(Parser)]
#[command(name = "glosa")]
#[command(version = glosa::VERSION)]
#[command(about = "Green Light Optimal Speed Advisory", long_about = None)]
struct Cli {
    /// Path to config.ini (default: ~/.glosa/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the advisory HTTP server
    Serve {
        /// Listen address, overriding [server] bind
        #[arg(long)]
        bind: Option<String>,

        /// Use the built-in fixed-cycle predictor instead of the local AI
        /// service, and skip HTTP telemetry publishing
        #[arg(long)]
        offline: bool,
    },

    /// Compute one advisory and print it
    Advise {
        /// Junction id (e.g. J001)
        #[arg(long)]
        junction: String,

        /// Vehicle latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Vehicle longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Epoch seconds (default: now)
        #[arg(long)]
        timestamp: Option<f64>,

        /// Use the built-in fixed-cycle predictor instead of the local AI
        /// service, and skip HTTP telemetry publishing
        #[arg(long)]
        offline: bool,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the great-circle distance between two points in meters
    Distance {
        #[arg(long, allow_negative_numbers = true)]
        from_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        from_lng: f64,
        #[arg(long, allow_negative_numbers = true)]
        to_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        to_lng: f64,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { bind, offline } => commands::serve::run(ServeArgs {
            config_path: cli.config,
            bind,
            offline,
        }),
        Commands::Advise {
            junction,
            lat,
            lng,
            timestamp,
            offline,
            json,
        } => commands::advise::run(AdviseArgs {
            config_path: cli.config,
            junction_id: junction,
            lat,
            lng,
            timestamp,
            offline,
            json,
        }),
        Commands::Distance {
            from_lat,
            from_lng,
            to_lat,
            to_lng,
        } => commands::distance::run(DistanceArgs {
            from_lat,
            from_lng,
            to_lat,
            to_lng,
        }),
        Commands::Init { force } => commands::init::run(cli.config, force),
    };

    if let Err(e) = result {
        e.exit();
    }
}
