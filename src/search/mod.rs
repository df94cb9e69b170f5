pub mod counter;
pub mod mtd;
pub mod negamax;

pub use counter::Counter;
pub use negamax::Searcher;

/// How the shared negamax skeleton treats windows and stored bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Full enumeration, no cutoffs; reorders children afterwards.
    Exhaustive,
    /// Plain alpha-beta.
    Pruned,
    /// Alpha-beta that clamps to and updates per-node `[lower, upper]`.
    Memoized,
    /// Principal variation search: null windows after the first child.
    PrincipalVariation,
}

impl Strategy {
    pub fn prunes(self) -> bool { !matches!(self, Strategy::Exhaustive) }
}
