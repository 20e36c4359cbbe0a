//! End-to-end properties of tree construction, negamax and move selection

mod common;

use common::{is_empty_before, random_position, seeded, single_gap};
use nineboard::{
    CompoundBoard, Engine, Move, Player, Score,
    search::{
        SCORE_INF, SearchTree, Searcher, negamax,
        selector::{evaluate, evaluate_tree, select},
        tree::NodeId,
    },
};

/// Negamax without pruning, as a reference for the pruned search
fn plain_negamax(tree: &SearchTree, node: NodeId) -> Score {
    let children = tree.children(node);
    if children.is_empty() {
        return tree.node(node).heuristic.aggregate();
    }
    children
        .iter()
        .map(|&child| -plain_negamax(tree, child))
        .max()
        .unwrap()
}

#[test]
fn empty_board_centre_reply_is_a_legal_cell() {
    let board = CompoundBoard::new().with_active(4);
    for seed in 0..5 {
        let mut engine = Engine::new(Some(seed));
        let mv = engine.choose_move(&board, 3).unwrap();
        assert_eq!(mv.board, 4);
        assert!((0..9).contains(&mv.cell));
        assert!(is_empty_before(&board, mv));
    }
}

#[test]
fn chosen_cell_was_always_empty() {
    let mut rng = seeded(31);
    for round in 0..40 {
        let board = random_position(&mut rng, round % 9, 10 + round);
        if board.legal_moves().is_empty() {
            continue;
        }
        let mut engine = Engine::new(Some(round as u64));
        let mv = engine.choose_move(&board, 2).unwrap();
        assert_eq!(mv.board, board.active);
        assert!(is_empty_before(&board, mv), "round {round}: {mv}\n{board}");
    }
}

#[test]
fn single_empty_cell_is_always_chosen() {
    for gap in 0..9 {
        let board = single_gap(3, gap);
        let mut engine = Engine::new(None);
        assert_eq!(engine.choose_move(&board, 3).unwrap(), Move::new(3, gap));
    }
}

#[test]
fn leaves_evaluate_to_their_aggregate() {
    let mut rng = seeded(5);
    let board = random_position(&mut rng, 2, 8);
    let tree = SearchTree::build(&board, 1).unwrap();

    for id in 1..tree.len() {
        let node = tree.node(id);
        if node.is_leaf() {
            assert_eq!(
                negamax(&tree, id, -SCORE_INF, SCORE_INF),
                node.heuristic.aggregate()
            );
        }
    }
}

#[test]
fn pruning_preserves_root_values() {
    let mut rng = seeded(77);
    for round in 0..6 {
        let board = random_position(&mut rng, round, 12);
        let tree = SearchTree::build(&board, 2).unwrap();
        for &child in tree.children(SearchTree::ROOT) {
            assert_eq!(
                negamax(&tree, child, -SCORE_INF, SCORE_INF),
                plain_negamax(&tree, child)
            );
        }
    }
}

#[test]
fn fused_search_matches_the_explicit_tree() {
    let mut rng = seeded(123);
    for round in 0..8 {
        let board = random_position(&mut rng, round % 9, 4 + 3 * round);
        for depth in 0..3 {
            let tree = SearchTree::build(&board, depth).unwrap();
            let mut searcher = Searcher::new();
            assert_eq!(
                evaluate_tree(&tree),
                evaluate(&board, depth, &mut searcher).unwrap(),
                "round {round}, depth {depth}"
            );
        }
    }
}

#[test]
fn chosen_move_reproduces_the_searched_child() {
    let mut rng = seeded(8);
    let board = random_position(&mut rng, 7, 9);
    let tree = SearchTree::build(&board, 2).unwrap();
    let selection = select(evaluate_tree(&tree), board.active, &mut seeded(1)).unwrap();

    let child = tree
        .children(SearchTree::ROOT)
        .iter()
        .copied()
        .find(|&id| tree.node(id).mv == Some(selection.chosen))
        .expect("chosen move is a root child");

    let applied = board.apply_move(selection.chosen, Player::Mine).unwrap();
    assert_eq!(tree.state_at(child).unwrap(), applied);
    assert_eq!(
        -negamax(&tree, child, -SCORE_INF, SCORE_INF),
        selection.best_value
    );
}

#[test]
fn same_seed_gives_same_move_and_search_leaves_input_alone() {
    let board = CompoundBoard::new().with_active(0);
    let first = Engine::new(Some(42)).choose_move(&board, 2).unwrap();
    let second = Engine::new(Some(42)).choose_move(&board, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(board, CompoundBoard::new().with_active(0));
}

#[test]
fn tree_and_engine_agree_on_best_value() {
    let mut rng = seeded(64);
    let board = random_position(&mut rng, 1, 7);
    let mut engine = Engine::new(Some(2));

    let analysis = engine.analyze(&board, 2).unwrap();
    let selection = engine.select(&board, 2).unwrap();
    assert_eq!(analysis.selection.best_value, selection.best_value);
    assert_eq!(analysis.selection.candidates, selection.candidates);
}
