//! Fixed-step driver around the simulation
//!
//! Owns the current round, turns variable frame times into fixed ticks,
//! remembers the held direction and records finished rounds.

use crate::consts::{MAX_FRAME_DT, MAX_TICKS_PER_FRAME, TICK_PERIOD};
use crate::highscores::HighScores;
use crate::sim::{Direction, EffectIntent, RoundState, tick};

/// A play session: consecutive rounds sharing a leaderboard
#[derive(Debug, Clone)]
pub struct Session {
    state: RoundState,
    /// Session seed; each round's seed is derived from it
    seed: u64,
    rounds_played: u32,
    accumulator: f32,
    /// Latest direction asked for by the player
    requested: Direction,
    high_scores: HighScores,
    /// Round already recorded on the leaderboard
    recorded: bool,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        let state = RoundState::new(round_seed(seed, 0));
        let requested = state.actor.facing;
        Self {
            state,
            seed,
            rounds_played: 0,
            accumulator: 0.0,
            requested,
            high_scores: HighScores::new(),
            recorded: false,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Held direction; applied (or refused) on the next tick
    pub fn request_direction(&mut self, direction: Direction) {
        self.requested = direction;
    }

    /// Accumulate frame time and run as many fixed ticks as are due
    pub fn update(&mut self, frame_dt: f32) -> Vec<EffectIntent> {
        let mut effects = Vec::new();
        if self.state.is_terminal() {
            self.accumulator = 0.0;
            return effects;
        }

        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= TICK_PERIOD && ticks < MAX_TICKS_PER_FRAME {
            effects.extend(self.step());
            self.accumulator -= TICK_PERIOD;
            ticks += 1;

            if self.state.is_terminal() {
                self.accumulator = 0.0;
                break;
            }
        }

        effects
    }

    /// Run exactly one tick, for turn-based front ends
    pub fn step(&mut self) -> Vec<EffectIntent> {
        let effects = tick(&mut self.state, self.requested, TICK_PERIOD);
        if self.state.is_terminal() {
            self.record_round();
        }
        effects
    }

    /// Discard the current round and start the next one. Abandoned rounds
    /// are not recorded.
    pub fn restart(&mut self) {
        if !self.state.is_terminal() {
            log::info!("Round {} abandoned", self.rounds_played + 1);
        }
        self.rounds_played += 1;
        self.state = RoundState::new(round_seed(self.seed, self.rounds_played));
        self.requested = self.state.actor.facing;
        self.accumulator = 0.0;
        self.recorded = false;
    }

    fn record_round(&mut self) {
        if self.recorded {
            return;
        }
        self.recorded = true;

        let stats = self.state.stats;
        log::info!(
            "Round {} finished: {} delivered ({} collected, longest chain {}) in {} ticks",
            self.rounds_played + 1,
            stats.delivered,
            stats.collected,
            stats.longest_chain,
            stats.ticks
        );
        if let Some(rank) = self.high_scores.record(stats, self.state.seed) {
            log::info!("New high score #{}: {} delivered", rank, stats.delivered);
        }
    }
}

/// Per-round seed: golden-ratio hash of the round index mixed with the session seed
fn round_seed(seed: u64, round: u32) -> u64 {
    (round as u64).wrapping_mul(2654435761).wrapping_add(seed)
}
