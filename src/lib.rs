//! Sleigh Run - A toroidal grid delivery arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, chain, spawner, tick)
//! - `session`: Fixed-step driver, round restarts and scoring
//! - `highscores`: In-memory leaderboard
//! - `renderer`: Text rendering of the board

pub mod highscores;
pub mod renderer;
pub mod session;
pub mod sim;

pub use highscores::HighScores;
pub use session::Session;

/// Game configuration constants
pub mod consts {
    use crate::sim::{Coord, Direction};

    /// Side length of the square map (cells)
    pub const GRID_SIDE: usize = 8;

    /// Fixed simulation timestep (seconds per tick)
    pub const TICK_PERIOD: f32 = 0.5;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 2;
    /// Frame deltas above this are clamped (e.g. after a window drag).
    /// Longer than `MAX_TICKS_PER_FRAME` ticks, so a stall leaves a backlog.
    pub const MAX_FRAME_DT: f32 = 2.0;

    /// Spawn interval at round start (seconds)
    pub const SPAWN_INTERVAL_START: f32 = 2.0;
    /// Fraction of the interval removed after every spawn attempt
    pub const SPAWN_INTERVAL_DECAY: f32 = 0.01;
    /// Spawning never gets faster than this
    pub const SPAWN_INTERVAL_FLOOR: f32 = 0.5;

    /// Actor start cell
    pub const START_POSITION: Coord = Coord::new(0, 0);
    /// Actor start facing
    pub const START_FACING: Direction = Direction::East;
}

/// Wrap a signed index onto `[0, side)`
#[inline]
pub fn wrap_index(index: i32, side: usize) -> usize {
    index.rem_euclid(side as i32) as usize
}
