//! Synthetic negamax game tree.
//!
//! Every node carries a fixed static `value` plus the mutable search state
//! (`score`, `lower`, `upper`) that successive searches write into it. The
//! tree is owned strictly parent-to-child and is mutated in place.

use rand::Rng;
use std::fmt;

/// Leaf values are drawn from `[0, MAX)`; `[-MAX, MAX]` is also the
/// widest search window.
pub const MAX: i32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    value: i32,
    pub(crate) score: i32,
    pub(crate) lower: i32,
    pub(crate) upper: i32,
    pub(crate) children: Vec<Node>,
}

impl Node {
    pub fn leaf(value: i32) -> Self {
        Self { value, score: 0, lower: -MAX, upper: MAX, children: Vec::new() }
    }

    /// Internal node whose value is the negated, rounded mean of its children.
    ///
    /// Panics if `children` is empty.
    pub fn internal(children: Vec<Node>) -> Self {
        assert!(!children.is_empty(), "internal node needs at least one child");
        let sum: i64 = children.iter().map(|c| c.value as i64).sum();
        // f64::round breaks ties away from zero
        let mean = (sum as f64 / children.len() as f64).round() as i32;
        Self { value: -mean, score: 0, lower: -MAX, upper: MAX, children }
    }

    /// Generate a random subtree of the given depth. Children flip `sign`,
    /// so values alternate perspective level by level.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, depth: u32, branching: usize, sign: i32) -> Self {
        if depth == 0 {
            return Self::leaf(sign * rng.gen_range(0..MAX));
        }
        let children = (0..branching).map(|_| Self::generate(&mut *rng, depth - 1, branching, -sign)).collect();
        Self::internal(children)
    }

    /// Root of a fresh tree; the root sign is chosen from the depth parity.
    pub fn random_tree<R: Rng + ?Sized>(rng: &mut R, depth: u32, branching: usize) -> Self {
        let sign = 1 - 2 * (depth % 2) as i32;
        Self::generate(rng, depth, branching, sign)
    }

    pub fn value(&self) -> i32 { self.value }
    pub fn score(&self) -> i32 { self.score }
    /// Persisted `(lower, upper)` bounds from memoized searches.
    pub fn bounds(&self) -> (i32, i32) { (self.lower, self.upper) }
    pub fn children(&self) -> &[Node] { &self.children }
    pub fn is_leaf(&self) -> bool { self.children.is_empty() }

    /// Total number of nodes in this subtree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    /// Height of this subtree; a leaf has depth 0.
    pub fn depth(&self) -> u32 {
        self.children.iter().map(|c| c.depth() + 1).max().unwrap_or(0)
    }

    /// Reset scores and bounds everywhere below (and including) this node.
    pub fn clear(&mut self) {
        self.score = 0;
        self.lower = -MAX;
        self.upper = MAX;
        for child in &mut self.children {
            child.clear();
        }
    }

    /// Sort children by ascending score, then with probability 1/3 swap the
    /// first two. Without a generator the swap never happens.
    pub(crate) fn reorder<R: Rng + ?Sized>(&mut self, rng: Option<&mut R>) {
        self.children.sort_by_key(|c| c.score);
        if self.children.len() < 2 { return; }
        if let Some(rng) = rng {
            if rng.gen_range(0..3) == 0 {
                self.children.swap(0, 1);
            }
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}/{}", "", self.score.abs(), self.value.abs(), indent = indent)?;
        for child in &self.children {
            child.fmt_indented(f, indent + 2)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn reorder_without_rng_only_sorts() {
        let mut n = Node::internal(vec![Node::leaf(1), Node::leaf(2), Node::leaf(3)]);
        n.children[0].score = 9;
        n.children[1].score = -4;
        n.children[2].score = 0;
        n.reorder::<SmallRng>(None);
        let scores: Vec<i32> = n.children.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![-4, 0, 9]);
    }

    #[test]
    fn reorder_swaps_roughly_a_third_of_the_time() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut swaps = 0;
        for _ in 0..3000 {
            let mut n = Node::internal(vec![Node::leaf(1), Node::leaf(2)]);
            n.children[0].score = 1;
            n.children[1].score = 2;
            n.reorder(Some(&mut rng));
            if n.children[0].score == 2 { swaps += 1; }
        }
        assert!((800..1200).contains(&swaps), "swap count {swaps} far from 1/3");
    }

    #[test]
    fn single_child_reorder_is_a_noop() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut n = Node::internal(vec![Node::leaf(5)]);
        n.reorder(Some(&mut rng));
        assert_eq!(n.children.len(), 1);
        assert_eq!(n.value(), -5);
    }
}
