//! Mazebots simulation core
//!
//! A population of sensor-steered bots searches a procedurally carved maze
//! for its exit. Each generation ends when a bot reaches the exit or every
//! bot has starved; the next generation is mutated from the winner or from
//! the longest-lived bot.

pub mod config;
pub mod error;
pub mod evolution;
pub mod food;
pub mod maze;
pub mod render;

// Re-export from mazebots-creature so hosts need a single dependency
pub mod creature {
    pub use mazebots_creature::*;
}

pub use config::{EvolutionConfig, MazeConfig, SimConfig};
pub use error::{MazeError, SimError};
pub use evolution::{
    BestCandidate, BestTracker, GenerationSummary, SimState, Simulation, TickOutcome,
};
pub use food::{FoodConfig, FoodField};
pub use maze::{Maze, MazeDimensions};
pub use render::FrameSnapshot;
