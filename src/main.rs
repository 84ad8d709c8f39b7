//! Sleigh Run entry point
//!
//! Turn-based console front end: every input line runs one tick.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use sleigh_run::Session;
use sleigh_run::renderer::{render_board, render_status};
use sleigh_run::sim::Direction;

/// A parsed input line
enum Command {
    /// Tick, optionally turning first
    Move(Option<Direction>),
    Restart,
    Dump,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let command = match line.trim().to_lowercase().as_str() {
        "" | "." => Command::Move(None),
        "n" | "w" | "k" | "up" => Command::Move(Some(Direction::North)),
        "s" | "j" | "down" => Command::Move(Some(Direction::South)),
        "a" | "h" | "left" => Command::Move(Some(Direction::West)),
        "d" | "e" | "l" | "right" => Command::Move(Some(Direction::East)),
        "r" => Command::Restart,
        "p" => Command::Dump,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn draw(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let state = session.state();
    write!(out, "{}", render_board(state))?;
    writeln!(out, "{}", render_status(state))?;
    if state.is_terminal() {
        if let Some(best) = session.high_scores().best() {
            writeln!(out, "best: {} delivered in {} ticks", best.stats.delivered, best.stats.ticks)?;
        }
        writeln!(out, "press r to play again, q to quit")?;
    }
    write!(out, "> ")?;
    out.flush()
}

fn main() -> io::Result<()> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("Sleigh Run (console) starting with seed {}", seed);

    let mut session = Session::new(seed);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "move: w/a/s/d (or h/j/k/l), enter: keep going, r: restart, p: dump, q: quit")?;
    draw(&mut out, &session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            log::warn!("Unknown command: {:?}", line.trim());
            draw(&mut out, &session)?;
            continue;
        };

        match command {
            Command::Move(turn) => {
                if session.is_over() {
                    log::warn!("Round is over; restart with r");
                } else {
                    if let Some(direction) = turn {
                        session.request_direction(direction);
                    }
                    for effect in session.step() {
                        log::info!("sfx: {}", effect.cue_name());
                    }
                }
            }
            Command::Restart => session.restart(),
            Command::Dump => {
                let json = serde_json::to_string_pretty(session.state())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(out, "{}", json)?;
            }
            Command::Quit => break,
        }

        draw(&mut out, &session)?;
    }

    log::info!("Played {} rounds", session.rounds_played() + 1);
    Ok(())
}
