use mazebots_creature::{Bot, BotGenome};
use serde::{Deserialize, Serialize};

/// Snapshot of the longest-lived bot of a generation
///
/// Holds a copy of the genome, so it stays valid after the bot is pruned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestCandidate {
    pub genome: BotGenome,
    pub lifetime: u32,
    /// Index in the population when the snapshot was taken
    pub slot: usize,
}

impl BestCandidate {
    pub fn from_bot(bot: &Bot, slot: usize) -> Self {
        Self {
            genome: bot.genome.clone(),
            lifetime: bot.lifetime,
            slot,
        }
    }
}

/// Tracks the best candidate of the running generation
#[derive(Debug, Clone, Default)]
pub struct BestTracker {
    best: Option<BestCandidate>,
}

impl BestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `bot` if it outlived the current best
    ///
    /// Only strictly longer lifetimes replace the record, so the earliest
    /// observed bot wins ties. Bots that never lived a tick are ignored.
    pub fn observe(&mut self, slot: usize, bot: &Bot) -> bool {
        if bot.lifetime == 0 {
            return false;
        }
        if self
            .best
            .as_ref()
            .is_some_and(|best| bot.lifetime <= best.lifetime)
        {
            return false;
        }

        log::debug!(
            "New best candidate: slot {} with lifetime {}",
            slot,
            bot.lifetime
        );
        self.best = Some(BestCandidate::from_bot(bot, slot));
        true
    }

    pub fn current(&self) -> Option<&BestCandidate> {
        self.best.as_ref()
    }

    pub fn best_lifetime(&self) -> u32 {
        self.best.as_ref().map_or(0, |best| best.lifetime)
    }

    pub fn take(&mut self) -> Option<BestCandidate> {
        self.best.take()
    }

    pub fn reset(&mut self) {
        self.best = None;
    }
}
