//! Search entry point: one tree per call, discarded afterwards.

use std::time::Instant;

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    board::{CompoundBoard, Move, Player},
    search::{
        Searcher, Selection, SearchTree,
        selector::{evaluate, evaluate_tree, select},
    },
};

/// Move-selection engine. Holds nothing across calls except the tie-break RNG.
pub struct Engine {
    rng: StdRng,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

/// Tree-based analysis of a position
#[derive(Debug, Clone)]
pub struct Analysis {
    pub selection: Selection,
    pub tree_nodes: usize,
}

impl Engine {
    /// Create an engine; `None` seeds the tie-break RNG from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self::with_rng(rng)
    }

    /// Create an engine drawing tie-breaks from `rng`.
    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Search `board` with `Mine` to move in its active sub-board.
    ///
    /// The caller's board is never modified; the search runs on a copy.
    pub fn select(&mut self, board: &CompoundBoard, depth: u32) -> crate::Result<Selection> {
        let started = Instant::now();
        let mut searcher = Searcher::new();
        let candidates = evaluate(board, depth, &mut searcher)?;
        let selection = select(candidates, board.active, &mut self.rng)?;

        debug!(
            "searched board {} to depth {depth}: {} nodes in {:?}, best {} = {} ({} tied)",
            board.active + 1,
            searcher.nodes(),
            started.elapsed(),
            selection.chosen,
            selection.best_value,
            selection.tied().count()
        );
        Ok(selection)
    }

    pub fn choose_move(&mut self, board: &CompoundBoard, depth: u32) -> crate::Result<Move> {
        self.select(board, depth).map(|selection| selection.chosen)
    }

    /// Choose a move and return it together with the position after playing it.
    pub fn play(
        &mut self,
        board: &CompoundBoard,
        depth: u32,
    ) -> crate::Result<(Move, CompoundBoard)> {
        let mv = self.choose_move(board, depth)?;
        let next = board.apply_move(mv, Player::Mine)?;
        Ok((mv, next))
    }

    /// Same choice as [`Engine::select`] but through an explicit [`SearchTree`].
    pub fn analyze(&mut self, board: &CompoundBoard, depth: u32) -> crate::Result<Analysis> {
        let tree = SearchTree::build(board, depth)?;
        let selection = select(evaluate_tree(&tree), board.active, &mut self.rng)?;
        Ok(Analysis {
            selection,
            tree_nodes: tree.len(),
        })
    }
}
