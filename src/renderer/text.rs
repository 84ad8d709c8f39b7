//! ASCII board rendering
//!
//! `.` empty, `@` carried item, `$` pickup, `^` hazard. The actor is drawn
//! over its cell as `A`, `v`, `<` or `>` depending on facing.

use crate::sim::{Coord, Direction, RoundState, Tile};

fn tile_glyph(tile: Tile) -> char {
    match tile {
        Tile::Empty => '.',
        Tile::Pickup => '$',
        Tile::Hazard => '^',
        Tile::ChainLink { .. } => '@',
    }
}

fn actor_glyph(facing: Direction) -> char {
    match facing {
        Direction::North => 'A',
        Direction::South => 'v',
        Direction::West => '<',
        Direction::East => '>',
    }
}

/// One line per row, top row first
pub fn render_board(state: &RoundState) -> String {
    let grid = state.grid();
    let actor = state.actor();
    let mut out = String::with_capacity(grid.side() * (grid.side() + 1));

    for row in 0..grid.side() {
        for (col, &tile) in grid.row(row).iter().enumerate() {
            let glyph = if actor.position == Coord::new(row, col) {
                actor_glyph(actor.facing)
            } else {
                tile_glyph(tile)
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

/// Single-line HUD
pub fn render_status(state: &RoundState) -> String {
    let stats = state.stats();
    let mut line = format!(
        "tick {} | facing {} | carrying {} (best {}) | collected {} | delivered {} | spawn every {:.2}s",
        stats.ticks,
        state.actor().facing.as_str(),
        state.chain().len(),
        stats.longest_chain,
        stats.collected,
        stats.delivered,
        state.spawn_clock().interval(),
    );
    if state.is_terminal() {
        line.push_str(" | GAME OVER");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;

    #[test]
    fn test_fresh_board() {
        let state = RoundState::new(1);
        let board = render_board(&state);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), state.grid().side());
        assert_eq!(lines[0], ">.......");
        assert!(lines[1..].iter().all(|l| *l == "........"));
    }

    #[test]
    fn test_board_shows_chain_and_tiles() {
        let mut state = RoundState::new(1);
        state.grid.set(Coord::new(0, 1), Tile::Pickup);
        state.grid.set(Coord::new(2, 5), Tile::Hazard);
        state.grid.set(Coord::new(3, 3), Tile::Pickup);
        tick(&mut state, Direction::East, 0.0);
        tick(&mut state, Direction::South, 0.0);

        let board = render_board(&state);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[0], ".@......");
        assert_eq!(lines[1], ".v......");
        assert_eq!(lines[2], ".....^..");
        assert_eq!(lines[3], "...$....");
    }

    #[test]
    fn test_status_line() {
        let mut state = RoundState::new(1);
        let status = render_status(&state);
        assert!(status.starts_with("tick 0 | facing East | carrying 0 (best 0)"));
        assert!(!status.contains("GAME OVER"));

        state.grid.set(Coord::new(0, 1), Tile::Pickup);
        tick(&mut state, Direction::East, 0.0);
        let status = render_status(&state);
        assert!(status.contains("carrying 1 (best 1) | collected 1 | delivered 0"));

        let mut state = RoundState::new(1);
        state.grid.set(Coord::new(0, 1), Tile::Hazard);
        tick(&mut state, Direction::East, 0.0);
        assert!(render_status(&state).ends_with("GAME OVER"));
    }
}
