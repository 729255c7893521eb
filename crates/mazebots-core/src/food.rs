//! Food field: point food that spawns at cell centres and refills energy

use glam::Vec2;
use mazebots_creature::{Bot, FoodAccess, SimRng};
use serde::{Deserialize, Serialize};

use crate::maze::Maze;

/// Food parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodConfig {
    /// Consumption and sensor detection radius
    pub radius: f32,
    /// Chance of one new item per tick
    pub spawn_probability: f32,
    /// Energy granted to the bot that eats an item
    pub energy_recovery: f32,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            spawn_probability: 0.01,
            energy_recovery: 20.0,
        }
    }
}

/// Current set of food points
#[derive(Debug, Clone, Default)]
pub struct FoodField {
    items: Vec<Vec2>,
    radius: f32,
}

impl FoodField {
    pub fn new(radius: f32) -> Self {
        Self {
            items: Vec::new(),
            radius,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// With the given probability, add one item at a random cell centre
    pub fn maybe_spawn(
        &mut self,
        maze: &Maze,
        probability: f32,
        rng: &mut impl SimRng,
    ) -> Option<Vec2> {
        if !rng.check_probability(probability) {
            return None;
        }
        let position = maze.random_cell_center(rng);
        log::debug!("Food spawned at ({:.0}, {:.0})", position.x, position.y);
        self.items.push(position);
        Some(position)
    }

    pub fn spawn_at(&mut self, position: Vec2) {
        self.items.push(position);
    }

    /// Let live bots eat nearby food
    ///
    /// Each item goes to the first live bot, in slice order, whose body
    /// reaches it. Returns how many items were eaten.
    pub fn resolve_consumption(&mut self, bots: &mut [Bot], energy_recovery: f32) -> usize {
        let radius = self.radius;
        let before = self.items.len();

        self.items.retain(|&item| {
            let eater = bots
                .iter_mut()
                .filter(|bot| bot.alive)
                .find(|bot| bot.position.distance(item) < bot.radius() as f32 + radius);

            match eater {
                Some(bot) => {
                    bot.energy.replenish(energy_recovery);
                    log::debug!(
                        "Food at ({:.0}, {:.0}) eaten, bot energy now {:.1}",
                        item.x,
                        item.y,
                        bot.energy.current
                    );
                    false
                }
                None => true,
            }
        });

        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl FoodAccess for FoodField {
    fn food_positions(&self) -> &[Vec2] {
        &self.items
    }

    fn detection_radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebots_creature::{BotGenome, EnergyConfig, GenomeConfig};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn bot_at(x: f32, y: f32) -> Bot {
        let mut bot = Bot::spawn(
            BotGenome::inert(&GenomeConfig::default()),
            Vec2::new(x, y),
            &EnergyConfig::default(),
        );
        bot.energy.current = 50.0;
        bot
    }

    #[test]
    fn test_spawn_probability_extremes() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let maze = Maze::new(200, 200, 40, 3, &mut rng).unwrap();
        let mut food = FoodField::new(5.0);

        for _ in 0..100 {
            assert!(food.maybe_spawn(&maze, 0.0, &mut rng).is_none());
        }
        assert!(food.is_empty());

        for _ in 0..10 {
            let p = food.maybe_spawn(&maze, 1.0, &mut rng).unwrap();
            assert_eq!((p.x - 20.0) % 40.0, 0.0);
            assert_eq!((p.y - 20.0) % 40.0, 0.0);
        }
        assert_eq!(food.len(), 10);
    }

    #[test]
    fn test_consumption_needs_strictly_closer_than_sum_of_radii() {
        let mut food = FoodField::new(5.0);
        // body radius 10 + food radius 5
        food.spawn_at(Vec2::new(115.0, 100.0));
        food.spawn_at(Vec2::new(114.0, 100.0));
        let mut bots = vec![bot_at(100.0, 100.0)];

        assert_eq!(food.resolve_consumption(&mut bots, 20.0), 1);
        assert_eq!(food.positions(), &[Vec2::new(115.0, 100.0)]);
        assert_eq!(bots[0].energy.current, 70.0);
    }

    #[test]
    fn test_recovery_is_capped_at_max() {
        let mut food = FoodField::new(5.0);
        food.spawn_at(Vec2::new(100.0, 100.0));
        let mut bots = vec![bot_at(100.0, 100.0)];
        bots[0].energy.current = 95.0;

        food.resolve_consumption(&mut bots, 20.0);
        assert_eq!(bots[0].energy.current, 100.0);
    }

    #[test]
    fn test_negative_recovery_keeps_energy_in_range() {
        let mut food = FoodField::new(5.0);
        food.spawn_at(Vec2::new(100.0, 100.0));
        let mut bots = vec![bot_at(100.0, 100.0)];

        assert_eq!(food.resolve_consumption(&mut bots, -500.0), 1);
        assert_eq!(bots[0].energy.current, 0.0);
    }

    #[test]
    fn test_first_live_bot_wins_each_item() {
        let mut food = FoodField::new(5.0);
        food.spawn_at(Vec2::new(100.0, 100.0));
        let mut bots = vec![bot_at(101.0, 100.0), bot_at(100.0, 100.0), bot_at(99.0, 100.0)];
        bots[0].alive = false;

        assert_eq!(food.resolve_consumption(&mut bots, 20.0), 1);
        assert!(food.is_empty());
        assert_eq!(bots[0].energy.current, 50.0);
        assert_eq!(bots[1].energy.current, 70.0);
        assert_eq!(bots[2].energy.current, 50.0);
    }

    #[test]
    fn test_dead_bots_do_not_eat() {
        let mut food = FoodField::new(5.0);
        food.spawn_at(Vec2::new(100.0, 100.0));
        let mut bots = vec![bot_at(100.0, 100.0)];
        bots[0].alive = false;

        assert_eq!(food.resolve_consumption(&mut bots, 20.0), 0);
        assert_eq!(food.len(), 1);
    }

    #[test]
    fn test_clear_and_access_trait() {
        let mut food = FoodField::new(5.0);
        food.spawn_at(Vec2::new(10.0, 10.0));
        assert!(food.food_near(Vec2::new(15.0, 10.0)));
        assert!(!food.food_near(Vec2::new(15.1, 10.0)));
        food.clear();
        assert!(food.food_positions().is_empty());
    }
}
