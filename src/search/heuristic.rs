//! Potential-win heuristic for sub-boards and the per-node heuristic vector.
//!
//! Each of the eight lines of a sub-board that only one side has marked counts
//! towards that side: a single mark is worth 1, two marks 100 and a completed
//! line 100000. A sub-board's score is the difference between the two sides.

use serde::{Deserialize, Serialize};

use super::Score;
use crate::board::{BOARD_COUNT, CompoundBoard, LineAnalyzer, Player, SubBoard};

/// Value of an uncontested line indexed by the number of marks on it
pub const LINE_WEIGHTS: [Score; 4] = [0, 1, 100, 100_000];

/// Score `board` from `perspective`.
///
/// The result is purely local: other sub-boards and the active pointer play no
/// part. `score(b, Mine) == -score(b, Opponent)` for every board.
pub fn score(board: &SubBoard, perspective: Player) -> Score {
    let mut mine = 0;
    let mut opponent = 0;
    for count in LineAnalyzer::counts(&board.cells) {
        if let Some(marks) = count.uncontested(Player::Mine) {
            mine += LINE_WEIGHTS[marks];
        }
        if let Some(marks) = count.uncontested(Player::Opponent) {
            opponent += LINE_WEIGHTS[marks];
        }
    }

    match perspective {
        Player::Mine => mine - opponent,
        Player::Opponent => opponent - mine,
    }
}

/// Per-sub-board scores carried by every search node.
///
/// Entries are oriented to the player who made the move leading to the node.
/// Moving to a child flips every entry except the sub-board just played in,
/// which is recomputed for the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicVector(pub [Score; BOARD_COUNT]);

impl HeuristicVector {
    /// Vector for a search root, oriented to the opponent (who moved last).
    pub fn root(board: &CompoundBoard) -> Self {
        Self(board.boards.map(|sub| score(&sub, Player::Opponent)))
    }

    /// Vector for the child reached by `mover` playing in sub-board `moved_in`.
    ///
    /// `board` must already contain the move.
    #[must_use]
    pub fn advance(&self, board: &CompoundBoard, moved_in: usize, mover: Player) -> Self {
        let mut next = self.0.map(|entry| -entry);
        next[moved_in] = score(board.board(moved_in), mover);
        Self(next)
    }

    /// Node score: the negated sum of all entries, i.e. from the point of view
    /// of the player to move at the node.
    pub fn aggregate(&self) -> Score {
        -self.0.iter().sum::<Score>()
    }

    pub fn entries(&self) -> &[Score; BOARD_COUNT] {
        &self.0
    }
}
