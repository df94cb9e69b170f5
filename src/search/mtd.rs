//! MTD(f)-style drivers: converge on the exact score through a sequence of
//! null-window probes at the root.
//!
//! None of these reset the tree. `mtdf` and `srb` rely on the bounds that
//! memoized probes leave behind: the second and later probes are cheap only
//! because the first ones were not wiped.
//!
//! The guess is clamped into `[lower, upper]` before the first probe. From
//! then on each probe either fails low (`g < beta`, new `upper = g`) or fails
//! high (`g >= beta`, new `lower = g`), and `beta` is chosen so that both
//! cases strictly shrink the interval while `g` stays inside it. The loop
//! therefore runs at most `upper - lower` times for any starting guess.

use crate::search::{Searcher, Strategy};
use crate::tree::{Node, MAX};
use log::trace;

/// Outcome of one driver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Convergence {
    pub score: i32,
    /// Root-level searches issued, including a seed probe.
    pub probes: u32,
}

impl Searcher<'_> {
    /// MTD(f) over memoized alpha-beta.
    pub fn mtdf(&mut self, node: &mut Node, f: i32) -> Convergence {
        self.bisect(node, Strategy::Memoized, f, -MAX, MAX, 0)
    }

    /// MTD(f) over plain alpha-beta; every probe starts from nothing.
    pub fn mtdf2(&mut self, node: &mut Node, f: i32) -> Convergence {
        self.bisect(node, Strategy::Pruned, f, -MAX, MAX, 0)
    }

    /// Seed the root bounds with one memoized search over `[f1, f2]`, then
    /// run the MTD loop starting from whatever bounds that left on the root.
    pub fn srb(&mut self, node: &mut Node, f1: i32, f2: i32) -> Convergence {
        let g = self.alphabeta_mem(node, f1, f2);
        let (lower, upper) = node.bounds();
        trace!("srb seed [{f1}, {f2}] -> g={g} bounds=[{lower}, {upper}]");
        self.bisect(node, Strategy::Memoized, g, lower, upper, 1)
    }

    fn bisect(&mut self, node: &mut Node, strategy: Strategy, f: i32, mut lower: i32, mut upper: i32, mut probes: u32) -> Convergence {
        let mut g = f.clamp(lower, upper.max(lower));
        while lower < upper {
            let beta = if g == lower { g + 1 } else { g };
            g = self.search(node, strategy, beta - 1, beta);
            probes += 1;
            if g < beta { upper = g; } else { lower = g; }
            trace!("probe {probes}: beta={beta} g={g} bounds=[{lower}, {upper}]");
        }
        node.score = g;
        Convergence { score: g, probes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_leaf_converges_in_one_visit() {
        let mut leaf = Node::leaf(-37);
        let mut s = Searcher::new();
        let c = s.mtdf(&mut leaf, 400);
        assert_eq!(c.score, -37);
        assert_eq!(s.nodes(), 1);
    }

    #[test]
    fn guess_outside_range_is_clamped() {
        let mut t = Node::internal(vec![Node::leaf(10), Node::leaf(-20)]);
        let mut s = Searcher::new();
        let c = s.mtdf2(&mut t, 1_000_000);
        assert_eq!(c.score, 20);
        // fail-low probes step down one point at a time from MAX
        assert!(c.probes <= (2 * MAX) as u32, "took {} probes", c.probes);
    }

    #[test]
    fn srb_with_exact_seed_needs_no_bisection() {
        let mut t = Node::internal(vec![Node::leaf(10), Node::leaf(-20)]);
        let mut s = Searcher::new();
        let c = s.srb(&mut t, -MAX, MAX);
        assert_eq!(c.score, 20);
        assert_eq!(c.probes, 1);
    }
}
