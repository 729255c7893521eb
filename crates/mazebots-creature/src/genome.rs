//! Bot genome representation
//!
//! A genome is the set of numeric parameters that evolve across generations:
//! sensor offset angles, sensor range, body radius, one steering weight per
//! sensor and a scalar bias. Offspring are always freshly built values, the
//! parent genome is never modified.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use serde::{Deserialize, Serialize};

use crate::rng::SimRng;

/// Parameters for building random genomes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenomeConfig {
    /// Sensor offsets relative to heading (radians)
    pub sensor_angles: Vec<f32>,
    /// Sensor ray length in pixels
    pub sensor_range: f32,
    /// Body radius in pixels
    pub body_radius: i32,
    /// Initial weights are drawn from [-weight_range, weight_range)
    pub weight_range: f32,
    /// Initial bias is drawn from [-bias_range, bias_range)
    pub bias_range: f32,
}

impl Default for GenomeConfig {
    fn default() -> Self {
        Self {
            // frontal, left, right, left 45, right 45
            sensor_angles: vec![0.0, FRAC_PI_2, -FRAC_PI_2, FRAC_PI_4, -FRAC_PI_4],
            sensor_range: 40.0,
            body_radius: 10,
            weight_range: 1.0,
            bias_range: 0.1,
        }
    }
}

/// Configuration for genome mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Absolute perturbation bound for angles, weights and bias; relative
    /// bound (fraction of the current value) for sensor range and radius
    pub rate: f32,
    /// Smallest body radius an offspring may have
    pub min_body_radius: i32,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            rate: 0.1,
            min_body_radius: 1,
        }
    }
}

/// Complete bot genome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotGenome {
    pub sensor_angles: Vec<f32>,
    pub sensor_range: f32,
    pub body_radius: i32,
    /// One weight per sensor, parallel to `sensor_angles`
    pub sensor_weights: Vec<f32>,
    pub bias: f32,
}

impl BotGenome {
    /// Create a genome with the configured sensor layout and random weights
    pub fn random(config: &GenomeConfig, rng: &mut impl SimRng) -> Self {
        let sensor_weights = config
            .sensor_angles
            .iter()
            .map(|_| rng.gen_symmetric(config.weight_range))
            .collect();
        let bias = rng.gen_symmetric(config.bias_range);

        Self {
            sensor_angles: config.sensor_angles.clone(),
            sensor_range: config.sensor_range,
            body_radius: config.body_radius,
            sensor_weights,
            bias,
        }
    }

    /// Create a genome whose steering output is always zero
    pub fn inert(config: &GenomeConfig) -> Self {
        Self {
            sensor_angles: config.sensor_angles.clone(),
            sensor_range: config.sensor_range,
            body_radius: config.body_radius,
            sensor_weights: vec![0.0; config.sensor_angles.len()],
            bias: 0.0,
        }
    }

    pub fn sensor_count(&self) -> usize {
        self.sensor_angles.len()
    }

    /// Build a mutated offspring
    ///
    /// Every parameter gets an independent uniform delta. Angles, weights and
    /// bias move by at most `rate`; range and radius by at most `rate` times
    /// their current value. The radius is truncated to whole pixels and
    /// floored at `min_body_radius`.
    pub fn mutated(&self, config: &MutationConfig, rng: &mut impl SimRng) -> Self {
        let rate = config.rate;

        let sensor_angles = self
            .sensor_angles
            .iter()
            .map(|angle| angle + rng.gen_symmetric(rate))
            .collect();

        let sensor_range = self.sensor_range + rng.gen_symmetric(rate * self.sensor_range);

        let radius = self.body_radius as f32;
        let body_radius =
            ((radius + rng.gen_symmetric(rate * radius)) as i32).max(config.min_body_radius);

        let sensor_weights = self
            .sensor_weights
            .iter()
            .map(|weight| weight + rng.gen_symmetric(rate))
            .collect();

        let bias = self.bias + rng.gen_symmetric(rate);

        Self {
            sensor_angles,
            sensor_range,
            body_radius,
            sensor_weights,
            bias,
        }
    }
}

impl Default for BotGenome {
    fn default() -> Self {
        Self::inert(&GenomeConfig::default())
    }
}
