// Synthetic negamax trees + exact search algorithms cross-checked against minimax
pub mod bench;
pub mod search;
pub mod tree;
pub mod verify;

pub use bench::{AlgoResult, Algorithm, Bench, BenchError, BenchParams, Report, Reset, Step};
pub use search::{Counter, Searcher, Strategy};
pub use tree::{Node, MAX};
pub use verify::Mismatch;
