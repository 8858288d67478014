//! GLOSA - Green Light Optimal Speed Advisory
//!
//! Given a vehicle's position and the junction it is approaching, this
//! library predicts the signal's phase and time-to-change and turns that
//! into a recommended approach speed and a short driver message.
//!
//! # High-Level API
//!
//! [`service::AdvisoryService`] composes the pieces for one request:
//!
//! ```ignore
//! use glosa::service::{AdvisoryRequest, AdvisoryService};
//!
//! let service = AdvisoryService::new(junctions, orchestrator, Some(telemetry));
//! let response = service.advise(&AdvisoryRequest { .. }).await?;
//! println!("{} km/h: {}", response.recommended_speed, response.message);
//! ```
//!
//! [`server::router`] exposes the same operation over HTTP.

use std::future::Future;
use std::pin::Pin;

pub mod advisory;
pub mod config;
pub mod geo;
pub mod http;
pub mod junction;
pub mod logging;
pub mod prediction;
pub mod server;
pub mod service;
pub mod telemetry;

/// Boxed future used by the object-safe provider and sink traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Version of the GLOSA library and CLI.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
