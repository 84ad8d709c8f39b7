//! Rendering module
//!
//! Text output only; graphical front ends read `RoundState` directly.

pub mod text;

pub use text::{render_board, render_status};
