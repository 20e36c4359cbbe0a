//! Authoritative game state and the reaction to each server command

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    board::{CompoundBoard, Move, Player},
    engine::Engine,
    protocol::Command,
};

/// Search depth used for the two opening replies
pub const OPENING_DEPTH: u32 = 3;

/// Search depth as a function of how many messages the server has sent.
///
/// `steps` are `(last_message, depth)` pairs in ascending order; the first
/// step whose bound covers the message count wins, `fallback` applies beyond
/// the last bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSchedule {
    pub steps: Vec<(usize, u32)>,
    pub fallback: u32,
}

impl Default for DepthSchedule {
    fn default() -> Self {
        Self {
            steps: vec![(8, 3), (17, 4), (30, 5)],
            fallback: 6,
        }
    }
}

impl DepthSchedule {
    /// Depth for the 1-indexed `message_count`
    pub fn depth_for(&self, message_count: usize) -> u32 {
        self.steps
            .iter()
            .find(|&&(last, _)| message_count <= last)
            .map_or(self.fallback, |&(_, depth)| depth)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !self.steps.windows(2).all(|w| w[0].0 < w[1].0) {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("depth schedule bounds must ascend: {:?}", self.steps),
            });
        }
        if self.fallback == 0 || self.steps.iter().any(|&(_, depth)| depth == 0) {
            return Err(crate::Error::InvalidConfiguration {
                message: "depth schedule entries must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// How a finished game ended, from our side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// What the session should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Send this cell (0-8) of the active sub-board
    Reply(usize),
    Finished(Outcome),
}

/// Single authoritative copy of the position plus the engine choosing our moves.
#[derive(Debug)]
pub struct Game {
    board: CompoundBoard,
    engine: Engine,
    schedule: DepthSchedule,
}

impl Game {
    pub fn new(engine: Engine, schedule: DepthSchedule) -> Self {
        Self {
            board: CompoundBoard::new(),
            engine,
            schedule,
        }
    }

    pub fn board(&self) -> &CompoundBoard {
        &self.board
    }

    fn record(&mut self, mv: Move, player: Player) -> crate::Result<()> {
        self.board = self.board.apply_move(mv, player)?;
        Ok(())
    }

    /// Search the current position and commit the chosen move.
    fn reply(&mut self, depth: u32) -> crate::Result<Response> {
        let (mv, next) = self.engine.play(&self.board, depth)?;
        self.board = next;
        debug!("playing {mv} at depth {depth}");
        Ok(Response::Reply(mv.cell))
    }

    /// Apply `command`, received as part of the `message_count`-th message.
    pub fn handle(&mut self, command: Command, message_count: usize) -> crate::Result<Response> {
        match command {
            Command::SecondMove { board, cell } => {
                self.record(Move::new(board, cell), Player::Opponent)?;
                self.reply(OPENING_DEPTH)
            }
            Command::ThirdMove { board, cell, reply } => {
                self.record(Move::new(board, cell), Player::Mine)?;
                self.record(Move::new(self.board.active, reply), Player::Opponent)?;
                self.reply(OPENING_DEPTH)
            }
            Command::NextMove { cell } => {
                self.record(Move::new(self.board.active, cell), Player::Opponent)?;
                self.reply(self.schedule.depth_for(message_count))
            }
            Command::Win => Ok(self.finish(Outcome::Win)),
            Command::Loss => Ok(self.finish(Outcome::Loss)),
            Command::Draw => Ok(self.finish(Outcome::Draw)),
        }
    }

    fn finish(&self, outcome: Outcome) -> Response {
        info!("game over: {outcome:?}");
        debug!("final position:\n{}", self.board);
        Response::Finished(outcome)
    }
}
