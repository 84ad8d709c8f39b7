//! Fixed timestep simulation tick
//!
//! One call moves the actor one cell and resolves whatever it landed on.

use super::grid::{Direction, Tile};
use super::motion::{resolve, steer};
use super::spawner::maybe_spawn;
use super::state::{EffectIntent, Phase, RoundState};

/// Advance the round by one tick.
///
/// `request` is the direction currently asked for by the player; it is
/// subject to the anti-reversal rule. `dt` is the real time this tick
/// represents and only feeds the spawn clock.
pub fn tick(state: &mut RoundState, request: Direction, dt: f32) -> Vec<EffectIntent> {
    let mut effects = Vec::new();

    if state.phase == Phase::Terminal {
        return effects;
    }

    steer(&mut state.actor, request, state.chain.len());

    let old = state.actor.position;
    let new = resolve(&state.grid, state.actor.facing, old);
    state.actor.position = new;

    match state.grid.get(new) {
        Tile::Empty => {
            if !state.chain.is_empty() {
                state.chain.push_head(&mut state.grid, old);
                state.chain.drop_tail(&mut state.grid);
            }
            effects.push(EffectIntent::Step);
        }

        Tile::Pickup => {
            state.grid.set(new, Tile::Empty);
            state.chain.push_head(&mut state.grid, old);
            state.stats.collected += 1;
            state.stats.longest_chain = state.stats.longest_chain.max(state.chain.len());
            log::debug!("Picked up at {:?}, carrying {}", new, state.chain.len());
            effects.push(EffectIntent::Pickup);
        }

        Tile::ChainLink { .. } => {
            log::info!(
                "Round over: ran into own chain at {:?} after {} ticks",
                new,
                state.stats.ticks
            );
            state.phase = Phase::Terminal;
        }

        Tile::Hazard => {
            if state.chain.is_empty() {
                log::info!(
                    "Round over: reached hazard at {:?} empty-handed after {} ticks",
                    new,
                    state.stats.ticks
                );
                state.phase = Phase::Terminal;
                effects.push(EffectIntent::Hurt);
            } else {
                let carried = state.chain.len();
                state.grid.set(new, Tile::Empty);
                // Oldest item is delivered
                state.chain.drop_tail(&mut state.grid);
                if carried > 1 {
                    // Remaining links follow the actor
                    state.chain.push_head(&mut state.grid, old);
                    state.chain.drop_tail(&mut state.grid);
                }
                state.stats.delivered += 1;
                log::debug!(
                    "Delivered at {:?}, {} delivered, {} still carried",
                    new,
                    state.stats.delivered,
                    state.chain.len()
                );
                effects.push(EffectIntent::Delivered);
            }
        }
    }

    state.spawn_clock.advance(dt);
    if state.phase == Phase::Running {
        if let Some((at, tile)) = maybe_spawn(
            &mut state.spawn_clock,
            &mut state.grid,
            state.actor.position,
            &mut state.rng,
        ) {
            log::debug!("Spawned {:?} at {:?}", tile, at);
            effects.push(EffectIntent::Spawn);
        }
    }

    state.stats.ticks += 1;

    if cfg!(debug_assertions) {
        state.chain.verify(&state.grid);
    }

    effects
}
