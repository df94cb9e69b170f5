use negabench::{Node, Searcher, MAX};
use negabench::bench::tree_size;
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn walk<'a>(n: &'a Node, out: &mut Vec<&'a Node>) {
    out.push(n);
    for c in n.children() { walk(c, out); }
}

#[test]
fn single_leaf_value_in_range() {
    for seed in 0..50u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let t = Node::random_tree(&mut rng, 0, 5);
        assert!(t.is_leaf());
        assert!((0..MAX).contains(&t.value()), "seed {seed}: {}", t.value());
    }
}

#[test]
fn internal_value_is_negated_rounded_mean() {
    let mut rng = SmallRng::seed_from_u64(11);
    let t = Node::random_tree(&mut rng, 4, 3);
    let mut nodes = Vec::new();
    walk(&t, &mut nodes);
    for n in nodes.into_iter().filter(|n| !n.is_leaf()) {
        let sum: i32 = n.children().iter().map(Node::value).sum();
        let mean = (sum as f64 / n.children().len() as f64).round() as i32;
        assert_eq!(n.value(), -mean);
    }
}

#[test]
fn ties_round_away_from_zero() {
    assert_eq!(Node::internal(vec![Node::leaf(1), Node::leaf(2)]).value(), -2);
    assert_eq!(Node::internal(vec![Node::leaf(-1), Node::leaf(-2)]).value(), 2);
    assert_eq!(Node::internal(vec![Node::leaf(1), Node::leaf(1), Node::leaf(2)]).value(), -1);
}

#[test]
fn leaf_signs_follow_depth_parity() {
    // root sign 1 - 2*(depth % 2), flipped once per level, lands on +1 at the leaves
    for depth in 0..6 {
        let mut rng = SmallRng::seed_from_u64(depth as u64);
        let t = Node::random_tree(&mut rng, depth, 2);
        let mut nodes = Vec::new();
        walk(&t, &mut nodes);
        assert!(nodes.iter().filter(|n| n.is_leaf()).all(|n| n.value() >= 0), "depth {depth}");
    }
}

#[test]
fn shape_matches_depth_and_branching() {
    let mut rng = SmallRng::seed_from_u64(3);
    let t = Node::random_tree(&mut rng, 3, 4);
    assert_eq!(t.depth(), 3);
    assert_eq!(t.size() as u64, tree_size(3, 4).unwrap());
    assert_eq!(t.size(), 1 + 4 + 16 + 64);
    assert_eq!(tree_size(0, 9), Some(1));
    assert_eq!(tree_size(70, 1000), None);
}

#[test]
fn same_seed_same_tree() {
    let a = Node::random_tree(&mut SmallRng::seed_from_u64(1234), 4, 4);
    let b = Node::random_tree(&mut SmallRng::seed_from_u64(1234), 4, 4);
    assert_eq!(a, b);
    let c = Node::random_tree(&mut SmallRng::seed_from_u64(1235), 4, 4);
    assert_ne!(a, c);
}

#[test]
fn clear_resets_scores_and_bounds() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut t = Node::random_tree(&mut rng, 3, 3);
    Searcher::new().alphabeta_mem(&mut t, -MAX, MAX);
    assert_ne!(t.bounds(), (-MAX, MAX));
    t.clear();
    let mut nodes = Vec::new();
    walk(&t, &mut nodes);
    assert!(nodes.iter().all(|n| n.score() == 0 && n.bounds() == (-MAX, MAX)));
}

#[test]
fn dump_shows_abs_score_over_abs_value() {
    let mut t = Node::internal(vec![Node::leaf(3), Node::leaf(-5)]);
    Searcher::new().minimax(&mut t);
    // children sorted ascending by score: -5 then 3
    assert_eq!(t.to_string(), "5/1\n  5/5\n  3/3\n");
}
