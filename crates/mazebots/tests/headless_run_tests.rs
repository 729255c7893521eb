//! Full headless runs through the public host API

use mazebots::{AppConfig, HeadlessRunner};
use mazebots_core::FrameSnapshot;

fn config(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.simulation.seed = Some(seed);
    config.simulation.evolution.population_size = 10;
    config.run.progress = false;
    config
}

#[test]
fn test_same_seed_same_stats() {
    let mut cfg = config(31);
    cfg.run.max_ticks = 3000;
    cfg.simulation.energy.max = 30.0;

    let mut a = HeadlessRunner::new(&cfg).unwrap();
    let mut b = HeadlessRunner::new(&cfg).unwrap();
    let stats_a = a.run().clone();
    let stats_b = b.run().clone();

    assert_eq!(stats_a.history, stats_b.history);
    assert_eq!(a.snapshot(), b.snapshot());
    assert!(stats_a.generations() > 0);
}

#[test]
fn test_snapshot_survives_ron_round_trip() {
    let mut cfg = config(4);
    cfg.run.max_ticks = 200;
    cfg.simulation.food.spawn_probability = 0.5;

    let mut runner = HeadlessRunner::new(&cfg).unwrap();
    runner.run();
    let snapshot = runner.snapshot();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.ron");
    let text = ron::ser::to_string_pretty(&snapshot, ron::ser::PrettyConfig::default()).unwrap();
    std::fs::write(&path, text).unwrap();

    let loaded: FrameSnapshot = ron::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded.generation, snapshot.generation);
    assert_eq!(loaded.walls, snapshot.walls);
    assert_eq!(loaded.exit, snapshot.exit);
    assert_eq!(loaded.bots.len(), snapshot.bots.len());
    assert_eq!(loaded.food.len(), snapshot.food.len());
}
