//! Fail-hard negamax with alpha-beta pruning.
//!
//! Two equivalent forms: [`negamax`] walks a prebuilt [`SearchTree`], while
//! [`Searcher`] expands the same tree on the fly with place/undo on a single
//! board and never allocates nodes.

use super::{HeuristicVector, Score, tree::NodeId, tree::SearchTree};
use crate::board::{CompoundBoard, Player};

/// Negamax value of `node` from the point of view of the player to move there.
///
/// Leaves return their aggregate heuristic. Children are visited in the order
/// they were generated and the remaining siblings are skipped as soon as the
/// value reaches `beta`.
pub fn negamax(tree: &SearchTree, node: NodeId, alpha: Score, beta: Score) -> Score {
    let current = tree.node(node);
    if current.is_leaf() {
        return current.heuristic.aggregate();
    }

    let mut value = alpha;
    for &child in &current.children {
        value = value.max(-negamax(tree, child, -beta, -value));
        if value >= beta {
            return value;
        }
    }
    value
}

/// Tree-less negamax: expansion and evaluation in one recursive pass.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited since creation or the last [`Searcher::reset`]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    /// Negamax value of the position in `board`.
    ///
    /// `heuristic` is the node's vector and `to_move` the side whose replies are
    /// generated. `depth` is the number of plies still to expand; a node with
    /// `depth == 0` or a full active sub-board is a leaf. `board` is restored
    /// before returning.
    pub fn negamax(
        &mut self,
        board: &mut CompoundBoard,
        heuristic: &HeuristicVector,
        to_move: Player,
        depth: u32,
        alpha: Score,
        beta: Score,
    ) -> Result<Score, crate::Error> {
        self.nodes += 1;
        if depth == 0 {
            return Ok(heuristic.aggregate());
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            return Ok(heuristic.aggregate());
        }

        let mut value = alpha;
        for mv in moves {
            let placement = board.place(mv, to_move)?;
            let child = heuristic.advance(board, mv.board, to_move);
            let child_value =
                -self.negamax(board, &child, to_move.opponent(), depth - 1, -beta, -value)?;
            board.undo(placement);

            value = value.max(child_value);
            if value >= beta {
                return Ok(value);
            }
        }
        Ok(value)
    }
}
