//! Round state and core simulation types
//!
//! Everything a round needs lives in one [`RoundState`] value, including the
//! seeded RNG, so a seed plus an input sequence always replays identically.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::chain::Chain;
use super::grid::Grid;
use super::motion::Actor;
use super::spawner::SpawnClock;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Ticks are being applied
    #[default]
    Running,
    /// Round ended (self-collision or empty-handed hazard). One-way.
    Terminal,
}

/// Side-effect requests for the audio/render collaborators.
/// These never feed back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectIntent {
    /// Actor moved onto an empty cell
    Step,
    /// Item collected
    Pickup,
    /// Item delivered to a hazard
    Delivered,
    /// Actor entered a hazard with nothing to deliver
    Hurt,
    /// A new tile appeared
    Spawn,
}

impl EffectIntent {
    /// Sound asset name for this intent
    pub fn cue_name(&self) -> &'static str {
        match self {
            EffectIntent::Step => "step",
            EffectIntent::Pickup => "gift",
            EffectIntent::Delivered => "house",
            EffectIntent::Hurt => "hurt",
            EffectIntent::Spawn => "spawn",
        }
    }
}

/// Per-round counters (the score is `delivered`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundStats {
    /// Ticks applied this round
    pub ticks: u64,
    /// Items picked up
    pub collected: u32,
    /// Items delivered
    pub delivered: u32,
    /// Longest chain carried at once
    pub longest_chain: usize,
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// Spawner RNG, advanced only by spawn rolls
    pub rng: Pcg32,
    pub phase: Phase,
    pub grid: Grid,
    pub chain: Chain,
    pub actor: Actor,
    pub spawn_clock: SpawnClock,
    pub stats: RoundStats,
}

impl RoundState {
    /// Start a fresh round: empty map, actor at its start cell, nothing carried
    pub fn new(seed: u64) -> Self {
        log::info!("New round with seed {}", seed);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Running,
            grid: Grid::new(),
            chain: Chain::new(),
            actor: Actor::default(),
            spawn_clock: SpawnClock::new(),
            stats: RoundStats::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn spawn_clock(&self) -> &SpawnClock {
        &self.spawn_clock
    }

    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }
}
