//! Headless simulation runs
//!
//! Drives a `Simulation` without a window, reporting progress on the
//! terminal and collecting per-generation statistics.

mod runner;
mod stats;

pub use runner::HeadlessRunner;
pub use stats::{GenerationRecord, RunStats};
