//! Simulation configuration
//!
//! Every section deserializes with defaults for missing fields, so a config
//! file only needs to name the values it changes.

use mazebots_creature::{BotConfig, EnergyConfig, GenomeConfig, MutationConfig};
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::food::FoodConfig;
use crate::maze::MazeDimensions;

/// Complete simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub maze: MazeConfig,

    #[serde(default)]
    pub bot: BotConfig,

    #[serde(default)]
    pub genome: GenomeConfig,

    #[serde(default)]
    pub energy: EnergyConfig,

    #[serde(default)]
    pub food: FoodConfig,

    #[serde(default)]
    pub evolution: EvolutionConfig,
}

/// Maze size and growth
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
    pub cell_size: u32,
    pub wall_thickness: u32,
    /// Pixels added to both sides on each growth event
    pub growth_step: u32,
    /// Growth stops once the height reaches this value
    pub max_height: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            cell_size: 40,
            wall_thickness: 3,
            growth_step: 4,
            max_height: 1080,
        }
    }
}

impl MazeConfig {
    pub fn dimensions(&self) -> Result<MazeDimensions, SimError> {
        Ok(MazeDimensions::new(
            self.width,
            self.height,
            self.cell_size,
            self.wall_thickness,
        )?)
    }
}

/// Population lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Bots per generation at startup
    pub population_size: usize,
    pub mutation: MutationConfig,
    /// Grow the maze and shrink the population when a winner ends a generation
    /// divisible by this value; 0 never
    pub growth_interval: u32,
    /// Population reduction applied on each growth event
    pub population_decrement: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation: MutationConfig::default(),
            growth_interval: 1,
            population_decrement: 1,
        }
    }
}

impl SimConfig {
    /// Check the configuration before building a simulation
    pub fn validate(&self) -> Result<(), SimError> {
        self.maze.dimensions()?;

        let invalid = |msg: String| -> Result<(), SimError> { Err(SimError::InvalidConfig(msg)) };

        if !positive(self.bot.speed) {
            return invalid(format!("bot speed must be positive, got {}", self.bot.speed));
        }
        if !non_negative(self.bot.steering.collision_jitter) {
            return invalid(format!(
                "collision jitter must not be negative, got {}",
                self.bot.steering.collision_jitter
            ));
        }
        if !self.bot.steering.damping.is_finite() {
            return invalid(format!(
                "steering damping must be finite, got {}",
                self.bot.steering.damping
            ));
        }
        if !self.bot.steering.exit_threshold.is_finite() {
            return invalid(format!(
                "exit threshold must be finite, got {}",
                self.bot.steering.exit_threshold
            ));
        }
        if self.bot.sensors.step == 0 {
            return invalid("sensor step must be positive".to_string());
        }
        if self.genome.sensor_angles.is_empty() {
            return invalid("at least one sensor angle is required".to_string());
        }
        if !non_negative(self.genome.sensor_range) {
            return invalid(format!(
                "sensor range must not be negative, got {}",
                self.genome.sensor_range
            ));
        }
        if !non_negative(self.genome.weight_range) {
            return invalid(format!(
                "weight range must not be negative, got {}",
                self.genome.weight_range
            ));
        }
        if !non_negative(self.genome.bias_range) {
            return invalid(format!(
                "bias range must not be negative, got {}",
                self.genome.bias_range
            ));
        }
        if self.genome.body_radius < 1 {
            return invalid(format!(
                "body radius must be at least 1, got {}",
                self.genome.body_radius
            ));
        }
        if !positive(self.energy.max) {
            return invalid(format!("maximum energy must be positive, got {}", self.energy.max));
        }
        if !non_negative(self.energy.decay_per_tick) {
            return invalid(format!(
                "energy decay must not be negative, got {}",
                self.energy.decay_per_tick
            ));
        }
        if !(0.0..=1.0).contains(&self.food.spawn_probability) {
            return invalid(format!(
                "food spawn probability must be within [0, 1], got {}",
                self.food.spawn_probability
            ));
        }
        if !non_negative(self.food.radius) {
            return invalid(format!("food radius must not be negative, got {}", self.food.radius));
        }
        if !non_negative(self.food.energy_recovery) {
            return invalid(format!(
                "food energy recovery must not be negative, got {}",
                self.food.energy_recovery
            ));
        }
        if !non_negative(self.evolution.mutation.rate) {
            return invalid(format!(
                "mutation rate must not be negative, got {}",
                self.evolution.mutation.rate
            ));
        }
        if self.evolution.mutation.min_body_radius < 1 {
            return invalid("minimum body radius must be at least 1".to_string());
        }

        Ok(())
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
