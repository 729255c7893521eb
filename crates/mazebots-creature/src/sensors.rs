//! Sensory systems for bots
//!
//! Each sensor marches a ray from the bot's centre in fixed steps and reports
//! the first thing it finds. At a single sample point the exit outranks food,
//! and food outranks walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::traits::{FoodAccess, MazeAccess};
use crate::types::PixelRect;

/// What a sensor ray stopped on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorHit {
    Exit,
    Food,
    Wall,
    Nothing,
}

/// Result of casting one sensor ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Scalar fed into the steering rule
    pub value: f32,
    /// Absolute angle of the ray (heading + sensor offset)
    pub angle: f32,
    /// Where the ray stopped
    pub endpoint: Vec2,
    pub hit: SensorHit,
}

/// Sensor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Distance between ray samples (pixels)
    pub step: u32,
    /// Reading when a sample lands in the exit
    pub exit_reading: f32,
    /// Reading when a sample lands near food
    pub food_reading: f32,
    /// Side of the square probe tested against walls (pixels)
    pub wall_probe_size: i32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            step: 5,
            exit_reading: 1.2,
            food_reading: 1.1,
            wall_probe_size: 2,
        }
    }
}

/// Cast a single sensor ray
///
/// Samples at distances 0, step, 2*step, ... up to the truncated range. Wall
/// readings fall off linearly with distance: a wall at the origin reads 1.0,
/// a wall at the end of the range reads close to 0.0.
pub fn cast_sensor(
    maze: &impl MazeAccess,
    food: &impl FoodAccess,
    origin: Vec2,
    angle: f32,
    range: f32,
    config: &SensorConfig,
) -> SensorReading {
    let direction = Vec2::from_angle(angle);
    let miss = SensorReading {
        value: 0.0,
        angle,
        endpoint: origin + direction * range.max(0.0),
        hit: SensorHit::Nothing,
    };

    if range <= 0.0 {
        return miss;
    }

    let step = config.step.max(1) as usize;
    for distance in (0..=range as i32).step_by(step) {
        let point = origin + direction * distance as f32;

        if maze.is_in_exit(point) {
            return SensorReading {
                value: config.exit_reading,
                angle,
                endpoint: point,
                hit: SensorHit::Exit,
            };
        }

        if food.food_near(point) {
            return SensorReading {
                value: config.food_reading,
                angle,
                endpoint: point,
                hit: SensorHit::Food,
            };
        }

        let probe = PixelRect::new(
            point.x as i32,
            point.y as i32,
            config.wall_probe_size,
            config.wall_probe_size,
        );
        if maze.intersects_wall(&probe) {
            return SensorReading {
                value: (range - distance as f32) / range,
                angle,
                endpoint: point,
                hit: SensorHit::Wall,
            };
        }
    }

    miss
}

/// Cast every sensor of a bot, in genome order
pub fn read_sensors(
    maze: &impl MazeAccess,
    food: &impl FoodAccess,
    origin: Vec2,
    heading: f32,
    sensor_angles: &[f32],
    range: f32,
    config: &SensorConfig,
) -> Vec<SensorReading> {
    sensor_angles
        .iter()
        .map(|offset| cast_sensor(maze, food, origin, heading + offset, range, config))
        .collect()
}
