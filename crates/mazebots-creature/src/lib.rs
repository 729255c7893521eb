//! Maze bots for Mazebots
//!
//! This crate implements:
//! - Bot genomes (sensor geometry, steering weights, bias) and their mutation
//! - Ray-marched sensors that detect the exit, food and walls
//! - Proportional steering with exit snapping
//! - Energy bookkeeping and wall collision with heading jitter
//! - Traits that decouple bots from the concrete maze and food field

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub mod bot;
pub mod genome;
pub mod rng;
pub mod sensors;
pub mod steering;
pub mod traits;
pub mod types;

// Re-export main types for convenience
pub use bot::{Bot, BotConfig, BotStep};
pub use genome::{BotGenome, GenomeConfig, MutationConfig};
pub use rng::SimRng;
pub use sensors::{SensorConfig, SensorHit, SensorReading};
pub use steering::SteeringConfig;
pub use traits::{FoodAccess, MazeAccess};
pub use types::{Energy, EnergyConfig, PixelRect};

/// Render data for a single bot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotRenderData {
    pub position: Vec2,
    pub heading: f32,
    pub radius: f32,
    /// Where each sensor ray stopped, in sensor order
    pub sensor_endpoints: Vec<Vec2>,
    /// Current energy over maximum energy (0.0 - 1.0)
    pub energy_ratio: f32,
}
