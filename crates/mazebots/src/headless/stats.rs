//! Statistics collected over a headless run

use std::fmt;

use mazebots_core::{GenerationSummary, SimState};
use serde::{Deserialize, Serialize};

/// One finished generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: u32,
    pub outcome: SimState,
    pub ticks: u64,
    pub best_lifetime: u32,
    /// Size of the population bred for the next generation
    pub next_population: usize,
    /// Maze the next generation runs in
    pub maze_width: u32,
    pub maze_height: u32,
}

/// Totals and history of a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub total_ticks: u64,
    pub winners: u32,
    pub extinctions: u32,
    pub history: Vec<GenerationRecord>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        outcome: SimState,
        summary: &GenerationSummary,
        next_population: usize,
        maze_size: (u32, u32),
    ) {
        match outcome {
            SimState::WinnerTransition => self.winners += 1,
            SimState::ExtinctionTransition => self.extinctions += 1,
            SimState::Running => return,
        }

        self.history.push(GenerationRecord {
            generation: summary.generation,
            outcome,
            ticks: summary.ticks,
            best_lifetime: summary.best_lifetime,
            next_population,
            maze_width: maze_size.0,
            maze_height: maze_size.1,
        });
    }

    pub fn generations(&self) -> usize {
        self.history.len()
    }

    /// Longest lifetime over all finished generations
    pub fn best_lifetime(&self) -> u32 {
        self.history
            .iter()
            .map(|record| record.best_lifetime)
            .max()
            .unwrap_or(0)
    }

    /// Mean generation length in ticks
    pub fn avg_generation_ticks(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let total: u64 = self.history.iter().map(|record| record.ticks).sum();
        total as f64 / self.history.len() as f64
    }

    pub fn last(&self) -> Option<&GenerationRecord> {
        self.history.last()
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticks:        {}", self.total_ticks)?;
        writeln!(f, "Generations:  {}", self.generations())?;
        writeln!(f, "Winners:      {}", self.winners)?;
        writeln!(f, "Extinctions:  {}", self.extinctions)?;
        writeln!(f, "Best lifetime: {}", self.best_lifetime())?;
        write!(f, "Avg generation length: {:.1} ticks", self.avg_generation_ticks())?;
        if let Some(last) = self.last() {
            write!(
                f,
                "\nFinal maze:   {}x{} with {} bots",
                last.maze_width, last.maze_height, last.next_population
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(generation: u32, ticks: u64, best_lifetime: u32) -> GenerationSummary {
        GenerationSummary {
            generation,
            seed: None,
            ticks,
            best_lifetime,
        }
    }

    #[test]
    fn test_record_counts_outcomes() {
        let mut stats = RunStats::new();
        stats.record(SimState::WinnerTransition, &summary(1, 30, 30), 49, (204, 204));
        stats.record(SimState::ExtinctionTransition, &summary(2, 10, 8), 49, (204, 204));
        stats.record(SimState::Running, &summary(3, 1, 1), 49, (204, 204));

        assert_eq!(stats.winners, 1);
        assert_eq!(stats.extinctions, 1);
        assert_eq!(stats.generations(), 2);
        assert_eq!(stats.best_lifetime(), 30);
        assert_eq!(stats.avg_generation_ticks(), 20.0);
        assert_eq!(stats.last().unwrap().outcome, SimState::ExtinctionTransition);
    }

    #[test]
    fn test_empty_stats() {
        let stats = RunStats::new();
        assert_eq!(stats.best_lifetime(), 0);
        assert_eq!(stats.avg_generation_ticks(), 0.0);
        assert!(stats.to_string().contains("Generations:  0"));
    }
}
