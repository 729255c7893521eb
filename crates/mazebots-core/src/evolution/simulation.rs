use mazebots_creature::{Bot, BotGenome};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};

use super::best::{BestCandidate, BestTracker};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::food::FoodField;
use crate::maze::{Maze, MazeDimensions};
use crate::render::FrameSnapshot;

/// Where the controller is in its state machine
///
/// Transitions complete inside `Simulation::tick`, so between ticks the
/// controller is always running; `TickOutcome::state` reports which state a
/// tick passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimState {
    Running,
    /// A bot reached the exit; the next generation is bred from it
    WinnerTransition,
    /// Every bot died; the next generation is bred from the best candidate
    ExtinctionTransition,
}

/// What happened to the generation that just ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub generation: u32,
    /// Genome the next generation was bred from; `None` means random genomes
    pub seed: Option<BestCandidate>,
    /// Ticks the generation ran for
    pub ticks: u64,
    /// Longest lifetime recorded during the generation
    pub best_lifetime: u32,
}

/// Result of a single tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Continue,
    Winner(GenerationSummary),
    Extinction(GenerationSummary),
}

impl TickOutcome {
    /// State the controller passed through during this tick
    pub fn state(&self) -> SimState {
        match self {
            TickOutcome::Continue => SimState::Running,
            TickOutcome::Winner(_) => SimState::WinnerTransition,
            TickOutcome::Extinction(_) => SimState::ExtinctionTransition,
        }
    }

    pub fn summary(&self) -> Option<&GenerationSummary> {
        match self {
            TickOutcome::Continue => None,
            TickOutcome::Winner(summary) | TickOutcome::Extinction(summary) => Some(summary),
        }
    }

    pub fn is_transition(&self) -> bool {
        !matches!(self, TickOutcome::Continue)
    }
}

/// Maze, food and population advanced together
pub struct Simulation {
    config: SimConfig,
    rng: Xoshiro256StarStar,
    maze: Maze,
    bots: Vec<Bot>,
    food: FoodField,
    population_size: usize,
    generation: u32,
    generation_ticks: u64,
    total_ticks: u64,
    best: BestTracker,
}

impl Simulation {
    /// Build a simulation with a random first generation
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let population_size = config.evolution.population_size;
        let mut sim = Self::empty(config, population_size)?;
        sim.bots = sim.random_generation();

        log::info!(
            "Simulation started: {} bots in a {}x{} maze",
            sim.bots.len(),
            sim.maze.width(),
            sim.maze.height()
        );
        Ok(sim)
    }

    /// Build a simulation whose first generation uses the given genomes
    ///
    /// The population size becomes the number of genomes.
    pub fn from_genomes(config: SimConfig, genomes: Vec<BotGenome>) -> Result<Self, SimError> {
        let mut sim = Self::empty(config, genomes.len())?;
        let start = sim.maze.start_position();
        sim.bots = genomes
            .into_iter()
            .map(|genome| Bot::spawn(genome, start, &sim.config.energy))
            .collect();
        Ok(sim)
    }

    fn empty(config: SimConfig, population_size: usize) -> Result<Self, SimError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
            None => Xoshiro256StarStar::from_entropy(),
        };
        let maze = Maze::generate(config.maze.dimensions()?, &mut rng);
        let food = FoodField::new(config.food.radius);

        Ok(Self {
            config,
            rng,
            maze,
            bots: Vec::new(),
            food,
            population_size,
            generation: 1,
            generation_ticks: 0,
            total_ticks: 0,
            best: BestTracker::new(),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    /// Mutable access to the active population, for hosts that steer bots
    pub fn bots_mut(&mut self) -> &mut [Bot] {
        &mut self.bots
    }

    pub fn food(&self) -> &FoodField {
        &self.food
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn generation_ticks(&self) -> u64 {
        self.generation_ticks
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    pub fn best_candidate(&self) -> Option<&BestCandidate> {
        self.best.current()
    }

    /// Drawable state of the current tick
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self)
    }

    /// Advance one tick
    ///
    /// Order: food spawn, bot updates, best-candidate tracking, food
    /// consumption, pruning of dead bots, then the winner and extinction
    /// checks. A transition breeds the next generation before returning.
    pub fn tick(&mut self) -> TickOutcome {
        self.generation_ticks += 1;
        self.total_ticks += 1;

        self.food
            .maybe_spawn(&self.maze, self.config.food.spawn_probability, &mut self.rng);

        for bot in &mut self.bots {
            bot.update(&self.maze, &self.food, &self.config.bot, &mut self.rng);
        }

        // before pruning, so bots that died this tick still count
        for (slot, bot) in self.bots.iter().enumerate() {
            self.best.observe(slot, bot);
        }

        self.food
            .resolve_consumption(&mut self.bots, self.config.food.energy_recovery);

        self.bots.retain(|bot| bot.alive);

        if let Some(slot) = self
            .bots
            .iter()
            .position(|bot| self.maze.is_in_exit(bot.position))
        {
            let winner = BestCandidate::from_bot(&self.bots[slot], slot);
            return TickOutcome::Winner(self.winner_transition(winner));
        }

        if self.bots.is_empty() {
            return TickOutcome::Extinction(self.extinction_transition());
        }

        TickOutcome::Continue
    }

    /// Tick until a generation ends or `max_ticks` ticks have passed
    pub fn run_generation(&mut self, max_ticks: u64) -> Option<GenerationSummary> {
        for _ in 0..max_ticks {
            if let Some(summary) = self.tick().summary() {
                return Some(summary.clone());
            }
        }
        None
    }

    fn winner_transition(&mut self, winner: BestCandidate) -> GenerationSummary {
        log::info!(
            "Winner found in generation {} after {} ticks",
            self.generation,
            self.generation_ticks
        );

        self.bots = self.offspring_of(&winner.genome);

        if self.growth_due() {
            self.shrink_population();
            let dimensions = self
                .maze
                .dimensions()
                .grown(self.config.maze.growth_step, self.config.maze.max_height);
            self.rebuild_maze(dimensions);
        }

        self.finish_generation(Some(winner))
    }

    fn extinction_transition(&mut self) -> GenerationSummary {
        log::info!(
            "All bots died in generation {} after {} ticks",
            self.generation,
            self.generation_ticks
        );

        let seed = self.best.current().cloned();
        self.bots = match &seed {
            Some(candidate) => self.offspring_of(&candidate.genome),
            None => {
                log::warn!(
                    "No best candidate in generation {}, spawning random bots",
                    self.generation
                );
                self.random_generation()
            }
        };

        self.rebuild_maze(self.maze.dimensions());
        self.finish_generation(seed)
    }

    fn growth_due(&self) -> bool {
        let interval = self.config.evolution.growth_interval;
        interval > 0 && self.generation % interval == 0
    }

    fn shrink_population(&mut self) {
        let before = self.population_size;
        self.population_size = before.saturating_sub(self.config.evolution.population_decrement);
        if self.population_size != before {
            log::info!("Population size {} -> {}", before, self.population_size);
            if self.population_size == 0 {
                log::warn!("Population size reached zero");
            }
        }
    }

    fn rebuild_maze(&mut self, dimensions: MazeDimensions) {
        self.maze = Maze::generate(dimensions, &mut self.rng);
        log::info!(
            "Maze rebuilt at {}x{}",
            self.maze.width(),
            self.maze.height()
        );
    }

    fn finish_generation(&mut self, seed: Option<BestCandidate>) -> GenerationSummary {
        let summary = GenerationSummary {
            generation: self.generation,
            seed,
            ticks: self.generation_ticks,
            best_lifetime: self.best.best_lifetime(),
        };

        self.food.clear();
        self.best.reset();
        self.generation += 1;
        self.generation_ticks = 0;
        summary
    }

    fn offspring_of(&mut self, parent: &BotGenome) -> Vec<Bot> {
        let start = self.maze.start_position();
        (0..self.population_size)
            .map(|_| {
                let genome = parent.mutated(&self.config.evolution.mutation, &mut self.rng);
                Bot::spawn(genome, start, &self.config.energy)
            })
            .collect()
    }

    fn random_generation(&mut self) -> Vec<Bot> {
        let start = self.maze.start_position();
        (0..self.population_size)
            .map(|_| {
                let genome = BotGenome::random(&self.config.genome, &mut self.rng);
                Bot::spawn(genome, start, &self.config.energy)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebots_creature::GenomeConfig;

    fn config(seed: u64) -> SimConfig {
        let mut config = SimConfig {
            seed: Some(seed),
            ..Default::default()
        };
        config.evolution.population_size = 10;
        config
    }

    #[test]
    fn test_new_spawns_population_at_start() {
        let sim = Simulation::new(config(1)).unwrap();
        assert_eq!(sim.bots().len(), 10);
        assert_eq!(sim.population_size(), 10);
        assert_eq!(sim.generation(), 1);
        for bot in sim.bots() {
            assert_eq!(bot.position, sim.maze().start_position());
            assert_eq!(bot.heading, 0.0);
            assert_eq!(bot.lifetime, 0);
        }
    }

    #[test]
    fn test_non_finite_jitter_is_rejected_at_construction() {
        let mut cfg = config(1);
        cfg.bot.steering.collision_jitter = f32::INFINITY;
        assert!(matches!(
            Simulation::new(cfg),
            Err(SimError::InvalidConfig(_))
        ));

        let mut cfg = config(1);
        cfg.genome.weight_range = f32::NAN;
        assert!(matches!(
            Simulation::new(cfg),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut cfg = config(1);
        cfg.maze.cell_size = 0;
        assert!(matches!(
            Simulation::new(cfg),
            Err(SimError::Maze(crate::error::MazeError::ZeroCellSize))
        ));
    }

    #[test]
    fn test_tick_ages_bots_and_tracks_best() {
        let mut sim = Simulation::new(config(2)).unwrap();
        assert_eq!(sim.tick(), TickOutcome::Continue);
        assert!(sim.bots().iter().all(|bot| bot.lifetime == 1));
        let best = sim.best_candidate().unwrap();
        assert_eq!(best.lifetime, 1);
        assert_eq!(best.slot, 0);
        assert_eq!(sim.total_ticks(), 1);
    }

    #[test]
    fn test_growth_interval_zero_keeps_maze_and_population() {
        let mut cfg = config(3);
        cfg.maze.width = 80;
        cfg.maze.height = 40;
        cfg.evolution.growth_interval = 0;
        cfg.energy.decay_per_tick = 0.0;
        cfg.food.spawn_probability = 0.0;
        let genomes = vec![BotGenome::inert(&GenomeConfig::default())];
        let mut sim = Simulation::from_genomes(cfg, genomes).unwrap();

        let summary = loop {
            sim.bots_mut()[0].heading = 0.0;
            if let TickOutcome::Winner(summary) = sim.tick() {
                break summary;
            }
            assert!(sim.total_ticks() < 100);
        };

        assert_eq!(summary.generation, 1);
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.population_size(), 1);
        assert_eq!((sim.maze().width(), sim.maze().height()), (80, 40));
    }

    #[test]
    fn test_growth_stops_at_max_height() {
        let mut cfg = config(4);
        cfg.maze.width = 80;
        cfg.maze.height = 40;
        cfg.maze.max_height = 40;
        cfg.energy.decay_per_tick = 0.0;
        cfg.food.spawn_probability = 0.0;
        let genomes = vec![BotGenome::inert(&GenomeConfig::default()); 3];
        let mut sim = Simulation::from_genomes(cfg, genomes).unwrap();

        let outcome = loop {
            for bot in sim.bots_mut() {
                bot.heading = 0.0;
            }
            let outcome = sim.tick();
            if outcome.is_transition() {
                break outcome;
            }
            assert!(sim.total_ticks() < 100);
        };

        assert_eq!(outcome.state(), SimState::WinnerTransition);
        assert_eq!(sim.population_size(), 2);
        assert_eq!(sim.bots().len(), 3);
        assert_eq!((sim.maze().width(), sim.maze().height()), (80, 40));
    }
}
