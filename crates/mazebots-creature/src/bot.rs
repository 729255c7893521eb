//! Main bot entity
//!
//! Combines genome, energy, and the per-tick sense → steer → move cycle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::BotRenderData;
use crate::genome::BotGenome;
use crate::rng::SimRng;
use crate::sensors::{SensorConfig, SensorReading, read_sensors};
use crate::steering::{SteeringConfig, next_heading};
use crate::traits::{FoodAccess, MazeAccess};
use crate::types::{Energy, EnergyConfig, PixelRect};

/// Per-run bot parameters that are not part of the genome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Distance travelled per tick (pixels)
    pub speed: f32,
    pub sensors: SensorConfig,
    pub steering: SteeringConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            sensors: SensorConfig::default(),
            steering: SteeringConfig::default(),
        }
    }
}

impl BotConfig {
    pub fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }
}

/// What happened to a bot during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotStep {
    /// Already dead, nothing happened
    Inert,
    /// Energy ran out this tick
    Died,
    /// Moved to a new position
    Moved,
    /// Move rejected by a wall; heading jittered instead
    Blocked,
}

/// Main bot entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub genome: BotGenome,
    pub position: Vec2,
    /// Heading in radians
    pub heading: f32,
    pub energy: Energy,
    pub alive: bool,
    /// Ticks survived, the fitness signal
    pub lifetime: u32,
}

impl Bot {
    /// Create bot from genome at a position and heading
    pub fn new(genome: BotGenome, position: Vec2, heading: f32, energy: &EnergyConfig) -> Self {
        Self {
            genome,
            position,
            heading,
            energy: Energy::from_config(energy),
            alive: true,
            lifetime: 0,
        }
    }

    /// Create bot facing heading 0
    pub fn spawn(genome: BotGenome, position: Vec2, energy: &EnergyConfig) -> Self {
        Self::new(genome, position, 0.0, energy)
    }

    pub fn radius(&self) -> i32 {
        self.genome.body_radius
    }

    /// Axis-aligned body box if the bot stood at `position`
    pub fn body_rect_at(&self, position: Vec2) -> PixelRect {
        PixelRect::centered(position, self.genome.body_radius)
    }

    /// Put the bot back at `position` with full energy and zero lifetime
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.energy.reset();
        self.alive = true;
        self.lifetime = 0;
    }

    /// Cast all sensors from the current position and heading
    pub fn sense(
        &self,
        maze: &impl MazeAccess,
        food: &impl FoodAccess,
        config: &SensorConfig,
    ) -> Vec<SensorReading> {
        read_sensors(
            maze,
            food,
            self.position,
            self.heading,
            &self.genome.sensor_angles,
            self.genome.sensor_range,
            config,
        )
    }

    /// Advance the bot one tick
    pub fn update(
        &mut self,
        maze: &impl MazeAccess,
        food: &impl FoodAccess,
        config: &BotConfig,
        rng: &mut impl SimRng,
    ) -> BotStep {
        if !self.alive {
            return BotStep::Inert;
        }

        self.lifetime += 1;

        if self.energy.drain() {
            self.alive = false;
            return BotStep::Died;
        }

        let readings = self.sense(maze, food, &config.sensors);
        self.heading = next_heading(self.heading, &self.genome, &readings, &config.steering);

        let target = self.position + Vec2::from_angle(self.heading) * config.speed;
        if maze.intersects_wall(&self.body_rect_at(target)) {
            let jitter = rng.gen_symmetric(config.steering.collision_jitter);
            log::trace!(
                "Bot blocked at ({:.1}, {:.1}), turning by {:.3}",
                self.position.x,
                self.position.y,
                jitter
            );
            self.heading += jitter;
            return BotStep::Blocked;
        }

        self.position = target;
        BotStep::Moved
    }

    /// Render data for this bot
    pub fn render_data(
        &self,
        maze: &impl MazeAccess,
        food: &impl FoodAccess,
        config: &SensorConfig,
    ) -> BotRenderData {
        BotRenderData {
            position: self.position,
            heading: self.heading,
            radius: self.genome.body_radius as f32,
            sensor_endpoints: self
                .sense(maze, food, config)
                .into_iter()
                .map(|reading| reading.endpoint)
                .collect(),
            energy_ratio: self.energy.ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::GenomeConfig;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    struct TestMaze {
        walls: Vec<PixelRect>,
        exit: PixelRect,
    }

    impl MazeAccess for TestMaze {
        fn is_in_exit(&self, point: Vec2) -> bool {
            self.exit.contains_point(point)
        }

        fn wall_rects(&self) -> &[PixelRect] {
            &self.walls
        }
    }

    struct NoFood;

    impl FoodAccess for NoFood {
        fn food_positions(&self) -> &[Vec2] {
            &[]
        }

        fn detection_radius(&self) -> f32 {
            5.0
        }
    }

    fn open_maze() -> TestMaze {
        TestMaze {
            walls: vec![],
            exit: PixelRect::new(1000, 1000, 10, 10),
        }
    }

    fn inert_bot(position: Vec2, energy: &EnergyConfig) -> Bot {
        Bot::spawn(BotGenome::inert(&GenomeConfig::default()), position, energy)
    }

    #[test]
    fn test_bot_moves_along_heading() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let mut bot = inert_bot(Vec2::new(20.0, 20.0), &EnergyConfig::default());

        let step = bot.update(&open_maze(), &NoFood, &BotConfig::with_speed(1.0), &mut rng);

        assert_eq!(step, BotStep::Moved);
        assert!((bot.position - Vec2::new(21.0, 20.0)).length() < 1e-6);
        assert_eq!(bot.lifetime, 1);
        assert!((bot.energy.current - 99.9).abs() < 1e-4);
    }

    #[test]
    fn test_bot_dies_when_energy_hits_zero() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let energy = EnergyConfig {
            max: 1.0,
            decay_per_tick: 1.0,
        };
        let mut bot = inert_bot(Vec2::new(20.0, 20.0), &energy);
        let config = BotConfig::with_speed(1.0);

        let step = bot.update(&open_maze(), &NoFood, &config, &mut rng);

        assert_eq!(step, BotStep::Died);
        assert!(!bot.alive);
        assert_eq!(bot.energy.current, 0.0);
        assert_eq!(bot.lifetime, 1);
        assert_eq!(bot.position, Vec2::new(20.0, 20.0));

        // Dead bots are inert
        let step = bot.update(&open_maze(), &NoFood, &config, &mut rng);
        assert_eq!(step, BotStep::Inert);
        assert_eq!(bot.lifetime, 1);
        assert_eq!(bot.position, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_blocked_move_keeps_position_and_jitters_heading() {
        let maze = TestMaze {
            walls: vec![PixelRect::new(30, 0, 3, 40)],
            exit: PixelRect::new(1000, 1000, 10, 10),
        };
        let config = BotConfig::with_speed(1.0);

        for seed in 0..50 {
            let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
            let mut bot = inert_bot(Vec2::new(20.0, 20.0), &EnergyConfig::default());

            let step = bot.update(&maze, &NoFood, &config, &mut rng);

            assert_eq!(step, BotStep::Blocked);
            assert_eq!(bot.position, Vec2::new(20.0, 20.0));
            assert!(bot.heading.abs() <= config.steering.collision_jitter);
        }
    }

    #[test]
    fn test_bot_turns_toward_visible_exit() {
        let maze = TestMaze {
            walls: vec![],
            exit: PixelRect::new(15, 40, 10, 10),
        };
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let mut bot = inert_bot(Vec2::new(20.0, 20.0), &EnergyConfig::default());

        bot.update(&maze, &NoFood, &BotConfig::with_speed(1.0), &mut rng);

        // The left sensor (+90 degrees, pointing down the y axis) sees the exit first
        assert!((bot.heading - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((bot.position - Vec2::new(20.0, 21.0)).length() < 1e-5);
    }

    #[test]
    fn test_reset_restores_spawn_state() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let mut bot = inert_bot(Vec2::new(20.0, 20.0), &EnergyConfig::default());
        for _ in 0..10 {
            bot.update(&open_maze(), &NoFood, &BotConfig::with_speed(1.0), &mut rng);
        }

        bot.reset(Vec2::new(5.0, 5.0));

        assert_eq!(bot.position, Vec2::new(5.0, 5.0));
        assert_eq!(bot.lifetime, 0);
        assert!(bot.alive);
        assert_eq!(bot.energy.ratio(), 1.0);
    }

    #[test]
    fn test_render_data_has_one_endpoint_per_sensor() {
        let bot = inert_bot(Vec2::new(20.0, 20.0), &EnergyConfig::default());

        let data = bot.render_data(&open_maze(), &NoFood, &SensorConfig::default());

        assert_eq!(data.sensor_endpoints.len(), bot.genome.sensor_count());
        assert_eq!(data.energy_ratio, 1.0);
        assert_eq!(data.radius, 10.0);
        assert!((data.sensor_endpoints[0] - Vec2::new(60.0, 20.0)).length() < 1e-4);
    }
}
