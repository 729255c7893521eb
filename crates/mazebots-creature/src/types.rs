//! Common types for bots
//!
//! `PixelRect` lives here rather than in mazebots-core so the bot can test
//! itself against walls without depending on the maze implementation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in whole pixels
///
/// Intersection follows the half-open convention: rectangles that only share
/// an edge do not intersect, and empty rectangles never intersect anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * half_extent` around `center`, corner truncated toward zero
    pub fn centered(center: Vec2, half_extent: i32) -> Self {
        Self {
            x: (center.x - half_extent as f32) as i32,
            y: (center.y - half_extent as f32) as i32,
            w: half_extent * 2,
            h: half_extent * 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn intersects(&self, other: &PixelRect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Inclusive on all four edges
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x as f32
            && point.x <= self.right() as f32
            && point.y >= self.y as f32
            && point.y <= self.bottom() as f32
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }
}

/// Energy parameters shared by every bot in a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    /// Starting and maximum energy
    pub max: f32,
    /// Energy lost every tick
    pub decay_per_tick: f32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            max: 100.0,
            decay_per_tick: 0.1,
        }
    }
}

/// Energy component for bots
/// Energy drains every tick and is refilled by eating food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    pub current: f32,
    pub max: f32,
    pub decay_per_tick: f32,
}

impl Energy {
    /// Create a full energy component
    pub fn new(max: f32, decay_per_tick: f32) -> Self {
        Energy {
            current: max,
            max,
            decay_per_tick,
        }
    }

    pub fn from_config(config: &EnergyConfig) -> Self {
        Self::new(config.max, config.decay_per_tick)
    }

    /// Apply one tick of decay
    /// Returns true if the energy is now depleted
    pub fn drain(&mut self) -> bool {
        self.current -= self.decay_per_tick;
        if self.current <= 0.0 {
            self.current = 0.0;
            return true;
        }
        false
    }

    /// Eat food to restore energy (kept within [0, max])
    pub fn replenish(&mut self, amount: f32) {
        self.current = (self.current + amount).clamp(0.0, self.max);
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Get energy as a ratio (0.0 - 1.0)
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.current / self.max).clamp(0.0, 1.0)
        }
    }

    /// Refill to max
    pub fn reset(&mut self) {
        self.current = self.max;
    }
}

impl Default for Energy {
    fn default() -> Self {
        Self::from_config(&EnergyConfig::default())
    }
}
