use std::fmt;

/// Visited-node counter shared by every call of one search run.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter(u64);

impl Counter {
    pub fn new() -> Self { Self(0) }
    pub fn inc(&mut self) { self.0 += 1; }
    pub fn get(&self) -> u64 { self.0 }
    pub fn reset(&mut self) { self.0 = 0; }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
