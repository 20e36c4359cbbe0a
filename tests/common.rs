//! Common test utilities for the nineboard test suite.
//!
//! Position builders shared by the integration tests.

#![allow(dead_code)]

use nineboard::{Cell, CompoundBoard, Move, Player, SubBoard};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Build a sub-board from nine characters ('.', 'X', 'O').
pub fn sub_board(text: &str) -> SubBoard {
    let mut cells = [Cell::Empty; 9];
    for (i, c) in text.chars().enumerate() {
        cells[i] = Cell::from_char(c).expect("test board uses '.', 'X' or 'O'");
    }
    SubBoard::from_cells(cells)
}

/// Sub-board with each cell drawn independently.
pub fn random_sub_board(rng: &mut StdRng) -> SubBoard {
    let mut cells = [Cell::Empty; 9];
    for cell in &mut cells {
        *cell = match rng.random_range(0..3) {
            0 => Cell::Empty,
            1 => Cell::Mine,
            _ => Cell::Opponent,
        };
    }
    SubBoard::from_cells(cells)
}

/// Play `plies` random legal moves from the empty board, opponent first,
/// starting in sub-board `start`. Stops early if the active sub-board fills.
pub fn random_position(rng: &mut StdRng, start: usize, plies: usize) -> CompoundBoard {
    let mut board = CompoundBoard::new().with_active(start);
    let mut player = Player::Opponent;
    for _ in 0..plies {
        let moves = board.legal_moves();
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        board = board.apply_move(mv, player).expect("legal move");
        player = player.opponent();
    }
    board
}

/// Position whose active sub-board has exactly one empty cell.
pub fn single_gap(board_index: usize, gap: usize) -> CompoundBoard {
    let mut board = CompoundBoard::new().with_active(board_index);
    let mut cells = [Cell::Empty; 9];
    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = if i == gap {
            Cell::Empty
        } else if i % 2 == 0 {
            Cell::Mine
        } else {
            Cell::Opponent
        };
    }
    board.boards[board_index] = SubBoard::from_cells(cells);
    board
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn is_empty_before(board: &CompoundBoard, mv: Move) -> bool {
    board.get(mv) == Cell::Empty
}
