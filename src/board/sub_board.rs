//! Single 3x3 sub-board and its cell values

use std::fmt;

use serde::{Deserialize, Serialize};

use super::BOARD_COUNT;

/// A cell on a sub-board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mine,
    Opponent,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mine => 'X',
            Cell::Opponent => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Mine),
            'O' | 'o' => Some(Cell::Opponent),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::Mine => Some(Player::Mine),
            Cell::Opponent => Some(Player::Opponent),
            Cell::Empty => None,
        }
    }
}

/// One side of the game. The engine always plays `Mine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Mine,
    Opponent,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Mine => Player::Opponent,
            Player::Opponent => Player::Mine,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Mine => Cell::Mine,
            Player::Opponent => Cell::Opponent,
        }
    }
}

/// Nine cells of one 3x3 board, indexed 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SubBoard {
    pub cells: [Cell; BOARD_COUNT],
}

impl SubBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_COUNT]) -> Self {
        Self { cells }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Empty positions in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub(crate) fn set(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
