//! Compound board: nine sub-boards plus the active sub-board pointer

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BOARD_COUNT, Cell, Player, SubBoard};

/// A move: the sub-board played in and the cell within it, both 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub board: usize,
    pub cell: usize,
}

impl Move {
    pub fn new(board: usize, cell: usize) -> Self {
        Self { board, cell }
    }
}

impl fmt::Display for Move {
    /// Shown with the 1-9 numbering used on the wire
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.board + 1, self.cell + 1)
    }
}

/// Undo record for an in-place placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub mv: Move,
    pub previous_active: usize,
}

/// Full game position.
///
/// `active` is the sub-board the next move must be played in. It always
/// equals the cell index of the last move played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CompoundBoard {
    pub boards: [SubBoard; BOARD_COUNT],
    pub active: usize,
}

impl CompoundBoard {
    /// Create an empty compound board with sub-board 0 active
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(mut self, active: usize) -> Self {
        self.active = active;
        self
    }

    pub fn board(&self, index: usize) -> &SubBoard {
        &self.boards[index]
    }

    pub fn get(&self, mv: Move) -> Cell {
        self.boards[mv.board].get(mv.cell)
    }

    /// Moves available in the active sub-board, in ascending cell order
    pub fn legal_moves(&self) -> Vec<Move> {
        let active = self.active;
        self.boards[active]
            .empty_cells()
            .map(|cell| Move::new(active, cell))
            .collect()
    }

    fn check(mv: Move) -> Result<(), crate::Error> {
        for index in [mv.board, mv.cell] {
            if index >= BOARD_COUNT {
                return Err(crate::Error::InvalidIndex { index });
            }
        }
        Ok(())
    }

    /// Play `player` at `mv` and return the resulting position.
    ///
    /// The move is not required to be in the active sub-board, and moves into
    /// a sub-board that is already won or full are not rejected; only the
    /// target cell must be empty.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: Move, player: Player) -> Result<CompoundBoard, crate::Error> {
        let mut next = *self;
        next.place(mv, player)?;
        Ok(next)
    }

    /// Play `player` at `mv` in place, returning the record needed to undo it.
    pub fn place(&mut self, mv: Move, player: Player) -> Result<Placement, crate::Error> {
        Self::check(mv)?;
        if !self.boards[mv.board].is_empty(mv.cell) {
            return Err(crate::Error::CellOccupied {
                board: mv.board,
                cell: mv.cell,
            });
        }

        let placement = Placement {
            mv,
            previous_active: self.active,
        };
        self.boards[mv.board].set(mv.cell, player.to_cell());
        self.active = mv.cell;
        Ok(placement)
    }

    /// Revert a placement made with [`CompoundBoard::place`].
    pub fn undo(&mut self, placement: Placement) {
        let Placement {
            mv,
            previous_active,
        } = placement;
        self.boards[mv.board].set(mv.cell, Cell::Empty);
        self.active = previous_active;
    }

    /// Parse 81 cells in sub-board-major order (sub-board 0 cells 0-8 first).
    ///
    /// Whitespace and the separators `|`, `-` and `+` are skipped so the cells
    /// can be laid out for readability. The active sub-board is 0.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 81 cells are given or a character is not a
    /// valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '|' | '-' | '+'))
            .collect();
        let expected = BOARD_COUNT * BOARD_COUNT;
        if chars.len() != expected {
            return Err(crate::Error::InvalidBoardLength {
                expected,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = CompoundBoard::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.boards[i / BOARD_COUNT].set(i % BOARD_COUNT, cell);
        }
        Ok(board)
    }

    /// Inverse of [`CompoundBoard::from_string`], without separators
    pub fn encode(&self) -> String {
        self.boards
            .iter()
            .flat_map(|b| b.cells.iter().map(|c| c.to_char()))
            .collect()
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        boards: [usize; 3],
        cells: [usize; 3],
    ) -> fmt::Result {
        let groups: Vec<String> = boards
            .iter()
            .map(|&b| {
                cells
                    .iter()
                    .map(|&c| self.boards[b].get(c).to_char().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        writeln!(f, " {}", groups.join(" | "))
    }
}

impl fmt::Display for CompoundBoard {
    /// Server-style layout: sub-boards 1-3 across the top, 7-9 across the bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (band, boards) in [[0, 1, 2], [3, 4, 5], [6, 7, 8]].into_iter().enumerate() {
            if band > 0 {
                writeln!(f, " ------+-------+------")?;
            }
            for cells in [[0, 1, 2], [3, 4, 5], [6, 7, 8]] {
                self.write_row(f, boards, cells)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_cell_and_active() {
        let board = CompoundBoard::new().with_active(4);
        let next = board.apply_move(Move::new(2, 4), Player::Opponent).unwrap();

        assert_eq!(next.get(Move::new(2, 4)), Cell::Opponent);
        assert_eq!(next.active, 4);
        // the original is untouched
        assert_eq!(board.get(Move::new(2, 4)), Cell::Empty);
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = CompoundBoard::new()
            .apply_move(Move::new(0, 0), Player::Mine)
            .unwrap();
        let err = board.apply_move(Move::new(0, 0), Player::Opponent).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let board = CompoundBoard::new();
        assert!(board.apply_move(Move::new(9, 0), Player::Mine).is_err());
        assert!(board.apply_move(Move::new(0, 9), Player::Mine).is_err());
    }

    #[test]
    fn test_apply_move_ignores_active_and_decided_boards() {
        // sub-board 0 already won by Mine, active points elsewhere
        let mut board = CompoundBoard::from_string(&format!("XXX......{}", ".".repeat(72)))
            .unwrap()
            .with_active(5);
        board = board.apply_move(Move::new(0, 8), Player::Opponent).unwrap();
        assert_eq!(board.active, 8);
    }

    #[test]
    fn test_place_and_undo_restore_state() {
        let original = CompoundBoard::new().with_active(3);
        let mut board = original;

        let first = board.place(Move::new(3, 7), Player::Mine).unwrap();
        let second = board.place(Move::new(7, 1), Player::Opponent).unwrap();
        assert_eq!(board.active, 1);

        board.undo(second);
        assert_eq!(board.active, 7);
        board.undo(first);
        assert_eq!(board, original);
    }

    #[test]
    fn test_legal_moves_in_active_board() {
        let mut board = CompoundBoard::new().with_active(6);
        board.boards[6].set(0, Cell::Mine);
        board.boards[6].set(8, Cell::Opponent);

        let cells: Vec<usize> = board.legal_moves().iter().map(|m| m.cell).collect();
        assert_eq!(cells, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(board.legal_moves().iter().all(|m| m.board == 6));
    }

    #[test]
    fn test_from_string_roundtrip() {
        let text = format!("X...O....{}.......XO", ".".repeat(63));
        let board = CompoundBoard::from_string(&text).unwrap();
        assert_eq!(board.get(Move::new(0, 0)), Cell::Mine);
        assert_eq!(board.get(Move::new(0, 4)), Cell::Opponent);
        assert_eq!(board.get(Move::new(8, 7)), Cell::Mine);
        assert_eq!(board.get(Move::new(8, 8)), Cell::Opponent);
        assert_eq!(board.encode(), text);
    }

    #[test]
    fn test_from_string_skips_separators() {
        let text = "XO. ... ... | ... ... ... | ... ... ...\n".repeat(3);
        let board = CompoundBoard::from_string(&text).unwrap();
        assert_eq!(board.get(Move::new(3, 1)), Cell::Opponent);
    }

    #[test]
    fn test_from_string_errors() {
        assert!(CompoundBoard::from_string("XO").is_err());
        let bad = format!("Z{}", ".".repeat(80));
        let err = CompoundBoard::from_string(&bad).unwrap_err();
        assert!(err.to_string().contains("invalid character 'Z'"));
    }

    #[test]
    fn test_display_layout() {
        let board = CompoundBoard::new()
            .apply_move(Move::new(0, 0), Player::Mine)
            .unwrap()
            .apply_move(Move::new(8, 8), Player::Opponent)
            .unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], " X . . | . . . | . . .");
        assert_eq!(lines[3], " ------+-------+------");
        assert_eq!(lines[10], " . . . | . . . | . . O");
    }

    #[test]
    fn test_move_display_is_one_based() {
        assert_eq!(Move::new(2, 4).to_string(), "(3,5)");
    }
}
