//! Generational evolution
//!
//! `Simulation` owns the maze, the food field, the active population and the
//! random source, and advances them together one tick at a time. A
//! generation ends when a bot reaches the exit (winner) or the population
//! dies out (extinction); either way the next generation is bred from a
//! single seed genome before `tick` returns.

mod best;
mod simulation;

pub use best::{BestCandidate, BestTracker};
pub use simulation::{GenerationSummary, SimState, Simulation, TickOutcome};
