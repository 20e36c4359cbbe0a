//! Nine-board tic-tac-toe position model

pub mod compound;
pub mod lines;
pub mod sub_board;

pub use compound::{CompoundBoard, Move, Placement};
pub use lines::{LineAnalyzer, LineCount, WINNING_LINES};
pub use sub_board::{Cell, Player, SubBoard};

/// Number of sub-boards in the compound board, and of cells in a sub-board.
pub const BOARD_COUNT: usize = 9;
