//! Root move selection with a random tie-break among equally valued moves.

use rand::{Rng, seq::IndexedRandom};
use serde::Serialize;

use super::{HeuristicVector, SCORE_INF, Score, Searcher, negamax, tree::SearchTree};
use crate::board::{CompoundBoard, Move, Player};

/// A root move and its negamax value from our point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub mv: Move,
    pub value: Score,
}

/// Outcome of a root selection
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub chosen: Move,
    pub best_value: Score,
    /// Every root move in generation order
    pub candidates: Vec<Candidate>,
}

impl Selection {
    /// Root moves sharing the best value
    pub fn tied(&self) -> impl Iterator<Item = Move> + '_ {
        self.candidates
            .iter()
            .filter(|c| c.value == self.best_value)
            .map(|c| c.mv)
    }
}

/// Value every child of the root of a prebuilt tree.
pub fn evaluate_tree(tree: &SearchTree) -> Vec<Candidate> {
    tree.children(SearchTree::ROOT)
        .iter()
        .filter_map(|&child| {
            tree.node(child).mv.map(|mv| Candidate {
                mv,
                value: -negamax(tree, child, -SCORE_INF, SCORE_INF),
            })
        })
        .collect()
}

/// Value every legal reply in `board` with the tree-less searcher.
///
/// Searches the same tree [`SearchTree::build`] would construct for `depth`
/// and yields identical values. `board` is left unchanged.
pub fn evaluate(
    board: &CompoundBoard,
    depth: u32,
    searcher: &mut Searcher,
) -> Result<Vec<Candidate>, crate::Error> {
    let mut work = *board;
    let root = HeuristicVector::root(&work);

    let mut candidates = Vec::new();
    for mv in work.legal_moves() {
        let placement = work.place(mv, Player::Mine)?;
        let child = root.advance(&work, mv.board, Player::Mine);
        let value = -searcher.negamax(
            &mut work,
            &child,
            Player::Opponent,
            depth,
            -SCORE_INF,
            SCORE_INF,
        )?;
        work.undo(placement);
        candidates.push(Candidate { mv, value });
    }
    Ok(candidates)
}

/// Pick the best candidate, drawing uniformly from `rng` when several tie.
///
/// # Errors
///
/// Returns [`Error::NoLegalMoves`](crate::Error::NoLegalMoves) for an empty
/// candidate list; `board` names the sub-board that had no room.
pub fn select<R: Rng + ?Sized>(
    candidates: Vec<Candidate>,
    board: usize,
    rng: &mut R,
) -> Result<Selection, crate::Error> {
    let best_value = candidates
        .iter()
        .map(|c| c.value)
        .max()
        .ok_or(crate::Error::NoLegalMoves { board })?;

    let tied: Vec<Move> = candidates
        .iter()
        .filter(|c| c.value == best_value)
        .map(|c| c.mv)
        .collect();
    let chosen = if tied.len() > 1 {
        *tied
            .choose(rng)
            .ok_or(crate::Error::NoLegalMoves { board })?
    } else {
        tied[0]
    };

    Ok(Selection {
        chosen,
        best_value,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn candidate(cell: usize, value: Score) -> Candidate {
        Candidate {
            mv: Move::new(0, cell),
            value,
        }
    }

    #[test]
    fn test_unique_best_is_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        let selection = select(
            vec![candidate(0, 3), candidate(4, 12), candidate(8, -5)],
            0,
            &mut rng,
        )
        .unwrap();
        assert_eq!(selection.chosen, Move::new(0, 4));
        assert_eq!(selection.best_value, 12);
        assert_eq!(selection.tied().count(), 1);
    }

    #[test]
    fn test_ties_are_broken_among_best_only() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let selection = select(
                vec![
                    candidate(0, 5),
                    candidate(1, 9),
                    candidate(2, 9),
                    candidate(3, 9),
                ],
                0,
                &mut rng,
            )
            .unwrap();
            seen.insert(selection.chosen.cell);
        }
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            select(
                (0..9).map(|cell| candidate(cell, 0)).collect(),
                0,
                &mut rng,
            )
            .unwrap()
            .chosen
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn test_empty_candidates_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = select(Vec::new(), 6, &mut rng).unwrap_err();
        assert!(err.to_string().contains("board 6"));
    }

    #[test]
    fn test_tree_and_fused_values_agree() {
        let board = CompoundBoard::new()
            .apply_move(Move::new(2, 7), Player::Opponent)
            .unwrap()
            .apply_move(Move::new(7, 7), Player::Mine)
            .unwrap()
            .apply_move(Move::new(7, 5), Player::Opponent)
            .unwrap();

        for depth in 0..3 {
            let tree = SearchTree::build(&board, depth).unwrap();
            let mut searcher = Searcher::new();
            assert_eq!(
                evaluate_tree(&tree),
                evaluate(&board, depth, &mut searcher).unwrap()
            );
        }
    }
}
