//! Reactive steering rule
//!
//! If any sensor sees the exit the bot turns straight to it. Otherwise the
//! heading is nudged by a damped linear combination of the readings.

use serde::{Deserialize, Serialize};

use crate::genome::BotGenome;
use crate::sensors::SensorReading;

/// Steering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Readings at or above this value mean "exit visible"
    pub exit_threshold: f32,
    /// Fraction of the steering scalar added to the heading each tick
    pub damping: f32,
    /// Heading jitter after a blocked move is drawn from [-jitter, jitter)
    pub collision_jitter: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            exit_threshold: 1.2,
            damping: 0.1,
            collision_jitter: 0.5,
        }
    }
}

/// Pick the sensor that sees the exit most strongly
///
/// Only readings at or above the threshold qualify; the first of equally
/// strong readings wins.
pub fn exit_heading(readings: &[SensorReading], threshold: f32) -> Option<f32> {
    let mut best: Option<&SensorReading> = None;
    for reading in readings.iter().filter(|r| r.value >= threshold) {
        if best.is_none_or(|b| reading.value > b.value) {
            best = Some(reading);
        }
    }
    best.map(|reading| reading.angle)
}

/// bias + sum(weight_i * reading_i)
pub fn steering_signal(genome: &BotGenome, readings: &[SensorReading]) -> f32 {
    genome.bias
        + genome
            .sensor_weights
            .iter()
            .zip(readings)
            .map(|(weight, reading)| weight * reading.value)
            .sum::<f32>()
}

/// Compute the heading for this tick
pub fn next_heading(
    heading: f32,
    genome: &BotGenome,
    readings: &[SensorReading],
    config: &SteeringConfig,
) -> f32 {
    match exit_heading(readings, config.exit_threshold) {
        Some(angle) => angle,
        None => heading + steering_signal(genome, readings) * config.damping,
    }
}
