//! CLI command implementations.
//!
//! - [`serve`] - Run the advisory HTTP server
//! - [`advise`] - One-shot advisory from the terminal
//! - [`distance`] - Great-circle distance helper
//! - [`init`] - Write a default configuration file

pub mod advise;
pub mod distance;
pub mod init;
pub mod serve;
