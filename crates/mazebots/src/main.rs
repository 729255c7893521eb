use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mazebots::{AppConfig, HeadlessRunner};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (RON); defaults to ./mazebots.ron if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Stop after this many generations
    #[arg(long)]
    generations: Option<u32>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Initial population size
    #[arg(long)]
    population: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,

    /// Write the final frame snapshot (RON) to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(ticks) = self.ticks {
            config.run.max_ticks = ticks;
        }
        if let Some(generations) = self.generations {
            config.run.max_generations = generations;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(population) = self.population {
            config.simulation.evolution.population_size = population;
        }
        if self.quiet {
            config.run.progress = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config
        .simulation
        .validate()
        .context("Invalid simulation configuration")?;

    log::info!("Starting Mazebots");
    let mut runner = HeadlessRunner::new(&config)?;
    let stats = runner.run();
    println!("{}", stats);

    if let Some(path) = &args.snapshot {
        let snapshot = runner.snapshot();
        let text = ron::ser::to_string_pretty(&snapshot, ron::ser::PrettyConfig::default())
            .context("Failed to serialize snapshot")?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        log::info!("Snapshot written to {}", path.display());
    }

    Ok(())
}
