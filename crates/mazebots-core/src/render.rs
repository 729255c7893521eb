//! Per-tick drawable state for hosts

use glam::Vec2;
use mazebots_creature::{BotRenderData, PixelRect};
use serde::{Deserialize, Serialize};

use crate::evolution::Simulation;

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub generation: u32,
    pub population_size: usize,
    pub tick: u64,
    pub width: u32,
    pub height: u32,
    pub walls: Vec<PixelRect>,
    pub exit: PixelRect,
    /// Live bots in population order
    pub bots: Vec<BotRenderData>,
    pub food: Vec<Vec2>,
    pub food_radius: f32,
}

impl FrameSnapshot {
    pub fn capture(sim: &Simulation) -> Self {
        let maze = sim.maze();
        let food = sim.food();
        let sensors = &sim.config().bot.sensors;

        Self {
            generation: sim.generation(),
            population_size: sim.population_size(),
            tick: sim.total_ticks(),
            width: maze.width(),
            height: maze.height(),
            walls: maze.walls().to_vec(),
            exit: maze.exit(),
            bots: sim
                .bots()
                .iter()
                .filter(|bot| bot.alive)
                .map(|bot| bot.render_data(maze, food, sensors))
                .collect(),
            food: food.positions().to_vec(),
            food_radius: food.radius(),
        }
    }
}
