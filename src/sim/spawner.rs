//! Timed random spawning of pickups and hazards
//!
//! Every time the clock fires, one empty cell (never the actor's) receives a
//! pickup or a hazard, then the interval shrinks by a fixed fraction, clamped
//! at `SPAWN_INTERVAL_FLOOR`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Coord, Grid, Tile};
use crate::consts::{SPAWN_INTERVAL_DECAY, SPAWN_INTERVAL_FLOOR, SPAWN_INTERVAL_START};

/// Spawn timer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnClock {
    /// Seconds between spawns (never increases)
    interval: f32,
    /// Seconds since the last spawn attempt
    elapsed: f32,
}

impl Default for SpawnClock {
    fn default() -> Self {
        Self {
            interval: SPAWN_INTERVAL_START,
            elapsed: 0.0,
        }
    }
}

impl SpawnClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Accumulate real time
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    #[inline]
    pub fn is_due(&self) -> bool {
        self.elapsed >= self.interval
    }

    /// Shorten the interval (harder) and restart the timer
    fn escalate(&mut self) {
        self.interval -= SPAWN_INTERVAL_DECAY * self.interval;
        self.interval = self.interval.max(SPAWN_INTERVAL_FLOOR);
        self.elapsed = 0.0;
    }
}

/// Spawn a random tile if the clock is due.
///
/// Returns the placed tile, or `None` when the clock is not due or the map
/// has no free cell. A due clock escalates either way.
pub fn maybe_spawn<R: Rng + ?Sized>(
    clock: &mut SpawnClock,
    grid: &mut Grid,
    actor: Coord,
    rng: &mut R,
) -> Option<(Coord, Tile)> {
    if !clock.is_due() {
        return None;
    }

    let free: Vec<Coord> = grid
        .iter()
        .filter(|&(at, tile)| tile.is_empty() && at != actor)
        .map(|(at, _)| at)
        .collect();

    let placed = if free.is_empty() {
        log::debug!("Spawn skipped: no free cell");
        None
    } else {
        let at = free[rng.random_range(0..free.len())];
        let tile = if rng.random_bool(0.5) {
            Tile::Pickup
        } else {
            Tile::Hazard
        };
        grid.set(at, tile);
        Some((at, tile))
    };

    clock.escalate();
    log::debug!("Spawn interval now {:.3}s", clock.interval);

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GRID_SIDE;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_not_due_does_nothing() {
        let mut clock = SpawnClock::new();
        let mut grid = Grid::new();
        let mut rng = Pcg32::seed_from_u64(1);

        clock.advance(SPAWN_INTERVAL_START * 0.5);
        assert_eq!(maybe_spawn(&mut clock, &mut grid, Coord::new(0, 0), &mut rng), None);
        assert_eq!(clock.interval(), SPAWN_INTERVAL_START);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_due_places_one_tile_and_escalates() {
        let mut clock = SpawnClock::new();
        let mut grid = Grid::new();
        let mut rng = Pcg32::seed_from_u64(7);
        let actor = Coord::new(3, 3);

        clock.advance(SPAWN_INTERVAL_START);
        let (at, tile) = maybe_spawn(&mut clock, &mut grid, actor, &mut rng).expect("spawned");

        assert_ne!(at, actor);
        assert!(matches!(tile, Tile::Pickup | Tile::Hazard));
        assert_eq!(grid.get(at), tile);
        assert_eq!(grid.count(|t| !t.is_empty()), 1);
        assert!(clock.interval() < SPAWN_INTERVAL_START);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn test_never_spawns_on_actor() {
        // Only the actor's cell is empty
        let mut grid = Grid::new();
        let actor = Coord::new(5, 2);
        for (at, _) in Grid::new().iter() {
            if at != actor {
                grid.set(at, Tile::Hazard);
            }
        }
        let mut clock = SpawnClock::new();
        let mut rng = Pcg32::seed_from_u64(3);

        clock.advance(10.0);
        assert_eq!(maybe_spawn(&mut clock, &mut grid, actor, &mut rng), None);
        assert_eq!(grid.get(actor), Tile::Empty);
        // Clock still resets and escalates on a full map
        assert_eq!(clock.elapsed(), 0.0);
        assert!(clock.interval() < SPAWN_INTERVAL_START);
    }

    #[test]
    fn test_interval_clamps_at_floor() {
        let mut clock = SpawnClock::new();
        let mut grid = Grid::new();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut last = clock.interval();

        for _ in 0..500 {
            clock.advance(clock.interval());
            maybe_spawn(&mut clock, &mut grid, Coord::new(0, 0), &mut rng);
            assert!(clock.interval() <= last);
            assert!(clock.interval() >= SPAWN_INTERVAL_FLOOR);
            last = clock.interval();
        }
        assert_eq!(clock.interval(), SPAWN_INTERVAL_FLOOR);
        assert_eq!(grid.count(|t| t.is_empty()), 1, "all but the actor cell filled");
        assert!(grid.count(|t| *t == Tile::Pickup) > 0);
        assert!(grid.count(|t| *t == Tile::Hazard) > 0);
        assert_eq!(grid.count(|_| true), GRID_SIDE * GRID_SIDE);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let run = |seed| {
            let mut clock = SpawnClock::new();
            let mut grid = Grid::new();
            let mut rng = Pcg32::seed_from_u64(seed);
            (0..20)
                .map(|_| {
                    clock.advance(clock.interval());
                    maybe_spawn(&mut clock, &mut grid, Coord::new(0, 0), &mut rng)
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }
}
