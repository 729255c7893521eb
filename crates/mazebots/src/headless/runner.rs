//! Tick loop with terminal progress reporting

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use mazebots_core::{FrameSnapshot, Simulation, TickOutcome};

use super::stats::RunStats;
use crate::config::{AppConfig, RunConfig};

/// Runs a simulation without rendering
pub struct HeadlessRunner {
    sim: Simulation,
    run: RunConfig,
    stats: RunStats,
}

impl HeadlessRunner {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let sim = Simulation::new(config.simulation.clone())
            .context("Failed to create simulation")?;
        Ok(Self {
            sim,
            run: config.run.clone(),
            stats: RunStats::new(),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.sim.snapshot()
    }

    fn progress_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
    }

    /// No bots left and none will be bred: every further tick is an empty extinction
    fn population_collapsed(&self) -> bool {
        self.sim.population_size() == 0 && self.sim.bots().is_empty()
    }

    fn generation_limit_reached(&self) -> bool {
        self.run.max_generations > 0 && self.stats.generations() >= self.run.max_generations as usize
    }

    /// Tick until the tick or generation limit is hit
    pub fn run(&mut self) -> &RunStats {
        let pb = if self.run.progress {
            let pb = ProgressBar::new(self.run.max_ticks);
            pb.set_style(Self::progress_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        } else {
            ProgressBar::hidden()
        };

        pb.println(format!(
            "Starting run: {} bots, {}x{} maze, up to {} ticks",
            self.sim.population_size(),
            self.sim.maze().width(),
            self.sim.maze().height(),
            self.run.max_ticks
        ));

        for _ in 0..self.run.max_ticks {
            if self.generation_limit_reached() {
                break;
            }
            if self.population_collapsed() {
                log::warn!(
                    "Population collapsed in generation {}, stopping run",
                    self.sim.generation()
                );
                break;
            }

            let outcome = self.sim.tick();
            self.stats.total_ticks += 1;
            pb.inc(1);

            if let Some(summary) = outcome.summary() {
                self.stats.record(
                    outcome.state(),
                    summary,
                    self.sim.population_size(),
                    (self.sim.maze().width(), self.sim.maze().height()),
                );

                let label = match outcome {
                    TickOutcome::Winner(_) => "winner",
                    _ => "extinction",
                };
                pb.set_message(format!(
                    "gen {} ({}) best={} bots={}",
                    self.sim.generation(),
                    label,
                    summary.best_lifetime,
                    self.sim.bots().len()
                ));
            }
        }

        pb.finish_and_clear();
        log::info!(
            "Run finished after {} ticks: {} winners, {} extinctions",
            self.stats.total_ticks,
            self.stats.winners,
            self.stats.extinctions
        );
        &self.stats
    }
}
