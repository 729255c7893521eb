//! # Mazebots
//!
//! Bots with a handful of ray sensors evolve to find the exit of a
//! procedurally carved maze. This crate is the host: it loads configuration
//! and drives the simulation headlessly.

pub mod config;
pub mod headless;

// Re-export core modules for convenience
pub use mazebots_core::creature;
pub use mazebots_core::evolution;
pub use mazebots_core::maze;

pub use config::{AppConfig, RunConfig};
pub use headless::{HeadlessRunner, RunStats};
