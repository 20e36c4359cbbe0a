//! Game-tree search: heuristic scoring, tree construction, negamax and root move selection

pub mod heuristic;
pub mod negamax;
pub mod selector;
pub mod tree;

pub use heuristic::{HeuristicVector, score};
pub use negamax::{Searcher, negamax};
pub use selector::{Candidate, Selection, select};
pub use tree::{Node, NodeId, SearchTree};

/// Search score, always from the point of view of the side being evaluated
pub type Score = i32;

/// Bound of the open alpha-beta window. Symmetric so it can be negated safely.
pub const SCORE_INF: Score = i32::MAX;
