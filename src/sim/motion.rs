//! Actor steering and movement

use serde::{Deserialize, Serialize};

use super::grid::{Coord, Direction, Grid};
use crate::consts::{START_FACING, START_POSITION};

/// The player-controlled actor (the sleigh)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub position: Coord,
    pub facing: Direction,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            position: START_POSITION,
            facing: START_FACING,
        }
    }
}

/// Apply a requested direction, returning whether the facing changed.
///
/// While anything is carried, turning straight back is refused: the first
/// link sits right behind the actor.
pub fn steer(actor: &mut Actor, request: Direction, chain_len: usize) -> bool {
    if chain_len > 0 && request == actor.facing.opposite() {
        log::debug!(
            "Refused reversal {} -> {} with {} carried",
            actor.facing.as_str(),
            request.as_str(),
            chain_len
        );
        return false;
    }
    let changed = actor.facing != request;
    actor.facing = request;
    changed
}

/// Cell the actor moves into when stepping `facing` from `position`
#[inline]
pub fn resolve(grid: &Grid, facing: Direction, position: Coord) -> Coord {
    grid.neighbor(position, facing)
}
