use crate::search::{Counter, Strategy};
use crate::tree::{Node, MAX};
use rand::RngCore;

/// Drives searches over a tree and counts the nodes they visit.
///
/// The optional generator is only consulted by the exhaustive strategy, for
/// the random swap after sorting children. Without one the reordering is a
/// plain sort.
pub struct Searcher<'a> {
    pub(crate) nodes: Counter,
    rng: Option<&'a mut dyn RngCore>,
}

impl Default for Searcher<'_> {
    fn default() -> Self {
        Self { nodes: Counter::new(), rng: None }
    }
}

impl<'a> Searcher<'a> {
    pub fn new() -> Self { Self::default() }

    pub fn with_rng(rng: &'a mut dyn RngCore) -> Self {
        Self { nodes: Counter::new(), rng: Some(rng) }
    }

    pub fn nodes(&self) -> u64 { self.nodes.get() }
    pub fn counter(&self) -> Counter { self.nodes }
    pub fn reset_counter(&mut self) { self.nodes.reset(); }

    /// Exhaustive negamax. Leaves children sorted best-first for the parent
    /// (with the occasional swap) as a side effect.
    pub fn minimax(&mut self, node: &mut Node) -> i32 {
        self.search(node, Strategy::Exhaustive, -MAX, MAX)
    }

    pub fn alphabeta(&mut self, node: &mut Node, alpha: i32, beta: i32) -> i32 {
        self.search(node, Strategy::Pruned, alpha, beta)
    }

    /// Alpha-beta with persisted bounds. Bounds are not reset here; call
    /// [`Node::clear`] first when the search should start from scratch.
    pub fn alphabeta_mem(&mut self, node: &mut Node, alpha: i32, beta: i32) -> i32 {
        self.search(node, Strategy::Memoized, alpha, beta)
    }

    pub fn negascout(&mut self, node: &mut Node, alpha: i32, beta: i32) -> i32 {
        self.search(node, Strategy::PrincipalVariation, alpha, beta)
    }

    /// Shared negamax recursion. Writes the result into `node.score` and
    /// returns it.
    pub fn search(&mut self, node: &mut Node, strategy: Strategy, mut alpha: i32, mut beta: i32) -> i32 {
        if strategy == Strategy::Exhaustive {
            alpha = -MAX;
            beta = MAX;
        }
        if strategy == Strategy::Memoized {
            beta = beta.min(node.upper);
            alpha = alpha.max(node.lower);
            // Stored bounds already decide this window; not a visit.
            if alpha >= beta {
                node.score = alpha;
                return alpha;
            }
        }
        self.nodes.inc();
        if node.is_leaf() {
            node.score = node.value();
            if strategy == Strategy::Memoized {
                node.lower = node.score;
                node.upper = node.score;
            }
            return node.score;
        }

        let floor = alpha;
        let mut probe = beta;
        for child in node.children.iter_mut() {
            let mut a = -self.search(child, strategy, -probe, -alpha);
            if strategy == Strategy::PrincipalVariation && probe < beta && alpha < a && a < beta {
                a = -self.search(child, strategy, -beta, -alpha);
            }
            alpha = alpha.max(a);
            if strategy.prunes() && alpha >= beta { break; }
            if strategy == Strategy::PrincipalVariation { probe = alpha + 1; }
        }
        node.score = alpha;

        match strategy {
            Strategy::Memoized => {
                if alpha < beta { node.upper = alpha; }
                if alpha > floor { node.lower = alpha; }
            }
            Strategy::Exhaustive => node.reorder(self.rng.as_deref_mut()),
            _ => {}
        }
        node.score
    }
}
