use crate::tree::Node;
use thiserror::Error;

/// A search produced a different root score than the minimax baseline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("score divergence: expected {expected}, got {actual}")]
pub struct Mismatch {
    pub expected: i32,
    pub actual: i32,
}

impl Node {
    /// Compare the last search result stored on this node with `expected`.
    pub fn check(&self, expected: i32) -> Result<i32, Mismatch> {
        if self.score == expected {
            Ok(self.score)
        } else {
            Err(Mismatch { expected, actual: self.score })
        }
    }
}
