//! Nine-board ("ultimate") tic-tac-toe engine
//!
//! This crate provides:
//! - Compound board model with in-place place/undo
//! - Potential-win heuristic with an incremental per-node score vector
//! - Negamax search with alpha-beta pruning and a random root tie-break
//! - The game server's line protocol and a session loop to play over TCP

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod protocol;
pub mod search;
pub mod session;

pub use board::{Cell, CompoundBoard, Move, Player, SubBoard};
pub use config::EngineConfig;
pub use engine::{Analysis, Engine};
pub use error::{Error, Result};
pub use game::{DepthSchedule, Game, Outcome, Response};
pub use protocol::Command;
pub use search::{Score, Selection};
pub use session::Session;
