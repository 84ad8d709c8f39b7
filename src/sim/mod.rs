//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell of movement per tick
//! - Seeded RNG only
//! - Row-major iteration order
//! - No rendering, audio or platform dependencies

pub mod chain;
pub mod grid;
pub mod motion;
pub mod spawner;
pub mod state;
pub mod tick;

pub use chain::Chain;
pub use grid::{Coord, Direction, Grid, Tile};
pub use motion::{Actor, resolve, steer};
pub use spawner::{SpawnClock, maybe_spawn};
pub use state::{EffectIntent, Phase, RoundState, RoundStats};
pub use tick::tick;
