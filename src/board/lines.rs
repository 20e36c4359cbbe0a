//! Winning line analysis for a 3x3 sub-board

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Marks held by each side on a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCount {
    pub mine: usize,
    pub opponent: usize,
}

impl LineCount {
    /// Marks of `player` when the other side has none on the line, else `None`.
    pub fn uncontested(&self, player: Player) -> Option<usize> {
        match player {
            Player::Mine if self.opponent == 0 => Some(self.mine),
            Player::Opponent if self.mine == 0 => Some(self.opponent),
            _ => None,
        }
    }
}

/// Utility for analyzing winning lines on a sub-board
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Count the marks of both sides on one line
    pub fn count(cells: &[Cell; 9], line: &[usize; 3]) -> LineCount {
        line.iter()
            .fold(LineCount::default(), |mut count, &idx| {
                match cells[idx] {
                    Cell::Mine => count.mine += 1,
                    Cell::Opponent => count.opponent += 1,
                    Cell::Empty => {}
                }
                count
            })
    }

    /// Counts for all eight lines, in `WINNING_LINES` order
    pub fn counts(cells: &[Cell; 9]) -> [LineCount; 8] {
        WINNING_LINES.map(|line| Self::count(cells, &line))
    }
}
