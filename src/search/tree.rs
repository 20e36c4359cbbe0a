//! Explicit search tree stored as an index arena.
//!
//! The production search never materialises the tree (see
//! [`Searcher`](super::Searcher)); this arena exists for inspection and for
//! checking the fused search against a straightforward construction.

use super::heuristic::HeuristicVector;
use crate::board::{CompoundBoard, Move, Player};

/// Index of a node in a [`SearchTree`]
pub type NodeId = usize;

/// A node of the search tree.
///
/// Nodes do not carry a board snapshot; use [`SearchTree::state_at`] to
/// rebuild one from the root.
#[derive(Debug, Clone)]
pub struct Node {
    /// Move leading to this node; `None` for the root
    pub mv: Option<Move>,
    /// Player who made `mv`
    pub mover: Option<Player>,
    pub heuristic: HeuristicVector,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Sub-board the move creating this node was played in
    pub fn played_in(&self) -> Option<usize> {
        self.mv.map(|mv| mv.board)
    }
}

/// Game tree rooted at a private copy of the position to search
#[derive(Debug, Clone)]
pub struct SearchTree {
    root_state: CompoundBoard,
    nodes: Vec<Node>,
}

impl SearchTree {
    pub const ROOT: NodeId = 0;

    /// Build the tree for `board` with `Mine` to move.
    ///
    /// The root always receives every empty cell of the active sub-board as a
    /// child. Each child is then expanded `depth` further plies, so leaves sit
    /// `depth + 1` plies below the root unless a sub-board fills up first.
    pub fn build(board: &CompoundBoard, depth: u32) -> Result<Self, crate::Error> {
        let root_state = *board;
        let mut tree = SearchTree {
            root_state,
            nodes: vec![Node {
                mv: None,
                mover: None,
                heuristic: HeuristicVector::root(&root_state),
                parent: None,
                children: Vec::new(),
            }],
        };

        let mut work = root_state;
        tree.expand(Self::ROOT, &mut work, Player::Mine, depth + 1)?;
        Ok(tree)
    }

    /// Add children for every empty cell of the active sub-board, then recurse.
    ///
    /// `work` holds the node's position on entry and is restored before return.
    fn expand(
        &mut self,
        node: NodeId,
        work: &mut CompoundBoard,
        mover: Player,
        depth: u32,
    ) -> Result<(), crate::Error> {
        if depth == 0 {
            return Ok(());
        }

        for mv in work.legal_moves() {
            let placement = work.place(mv, mover)?;
            let heuristic = self.nodes[node].heuristic.advance(work, mv.board, mover);

            let child = self.nodes.len();
            self.nodes.push(Node {
                mv: Some(mv),
                mover: Some(mover),
                heuristic,
                parent: Some(node),
                children: Vec::new(),
            });
            self.nodes[node].children.push(child);

            self.expand(child, work, mover.opponent(), depth - 1)?;
            work.undo(placement);
        }
        Ok(())
    }

    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT]
    }

    pub fn root_state(&self) -> &CompoundBoard {
        &self.root_state
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of plies between the root and `id`
    pub fn ply(&self, id: NodeId) -> usize {
        let mut ply = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            ply += 1;
            current = parent;
        }
        ply
    }

    /// Rebuild the position at `id` by replaying its moves from the root.
    pub fn state_at(&self, id: NodeId) -> Result<CompoundBoard, crate::Error> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            let node = &self.nodes[current];
            if let (Some(mv), Some(mover)) = (node.mv, node.mover) {
                path.push((mv, mover));
            }
            current = parent;
        }

        path.iter()
            .rev()
            .try_fold(self.root_state, |state, &(mv, mover)| {
                state.apply_move(mv, mover)
            })
    }
}
