//! Command-line interface for the nineboard engine
//!
//! `play` connects to a game server and plays one game; `analyze` prints the
//! engine's evaluation of a given position.

pub mod commands;
pub mod output;
