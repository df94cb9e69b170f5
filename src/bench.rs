//! Benchmark driver: one seeded tree, a minimax baseline, then every planned
//! algorithm run against the same tree and checked against the baseline.

use crate::search::Searcher;
use crate::tree::{Node, MAX};
use crate::verify::Mismatch;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Largest tree the driver agrees to build.
pub const MAX_TREE_NODES: u64 = 10_000_000;
/// Recursion depth limit; search recursion is as deep as the tree.
pub const MAX_DEPTH: u32 = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error("{algorithm} diverged from the minimax baseline: {source}")]
    Divergence {
        algorithm: Algorithm,
        #[source]
        source: Mismatch,
    },
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    AlphaBeta,
    AlphaBetaMem,
    Negascout,
    Mtdf,
    Mtdf2,
    Srb,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::AlphaBeta,
        Algorithm::AlphaBetaMem,
        Algorithm::Negascout,
        Algorithm::Mtdf,
        Algorithm::Mtdf2,
        Algorithm::Srb,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AlphaBeta => "alphabeta",
            Algorithm::AlphaBetaMem => "alphabetamem",
            Algorithm::Negascout => "negascout",
            Algorithm::Mtdf => "mtdf",
            Algorithm::Mtdf2 => "mtdf2",
            Algorithm::Srb => "srb",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// Tree state an algorithm expects to start from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reset {
    /// Scores and bounds wiped with `Node::clear` before the run.
    Cleared,
    /// Whatever the previous run left behind is reused.
    CarriedOver,
}

impl fmt::Display for Reset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Reset::Cleared => "cleared", Reset::CarriedOver => "carried over" })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub algorithm: Algorithm,
    pub reset: Reset,
}

pub fn default_plan() -> Vec<Step> {
    Algorithm::ALL.iter().map(|&algorithm| Step { algorithm, reset: Reset::Cleared }).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchParams {
    pub seed: u64,
    pub depth: u32,
    pub branching: usize,
    /// Half-width of the random guess offset and of the srb seed window.
    pub spread: i32,
    pub plan: Vec<Step>,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self { seed: 0, depth: 6, branching: 6, spread: 20, plan: default_plan() }
    }
}

impl BenchParams {
    /// Same plan, but no algorithm resets the tree before running.
    pub fn carried_over(mut self) -> Self {
        for step in &mut self.plan { step.reset = Reset::CarriedOver; }
        self
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.branching == 0 {
            return Err(BenchError::InvalidParams("branching must be at least 1".into()));
        }
        if self.depth > MAX_DEPTH {
            return Err(BenchError::InvalidParams(format!("depth {} exceeds {}", self.depth, MAX_DEPTH)));
        }
        if self.spread < 0 || self.spread > MAX {
            return Err(BenchError::InvalidParams(format!("spread {} outside 0..={}", self.spread, MAX)));
        }
        match tree_size(self.depth, self.branching) {
            Some(n) if n <= MAX_TREE_NODES => Ok(()),
            _ => Err(BenchError::InvalidParams(format!(
                "depth {} x branching {} exceeds {} nodes", self.depth, self.branching, MAX_TREE_NODES
            ))),
        }
    }
}

/// Node count of a uniform tree, or `None` on overflow.
pub fn tree_size(depth: u32, branching: usize) -> Option<u64> {
    let b = branching as u64;
    let mut level = 1u64;
    let mut total = 1u64;
    for _ in 0..depth {
        level = level.checked_mul(b)?;
        total = total.checked_add(level)?;
    }
    Some(total)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgoResult {
    #[serde(rename = "name")]
    pub algorithm: Algorithm,
    pub score: i32,
    pub nodes_visited: u64,
    pub probes: u32,
    pub reset: Reset,
}

impl fmt::Display for AlgoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: score={} nodes={} probes={} ({})", self.algorithm, self.score, self.nodes_visited, self.probes, self.reset)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub seed: u64,
    pub depth: u32,
    pub branching: usize,
    pub tree_nodes: u64,
    pub baseline: i32,
    pub baseline_nodes: u64,
    pub results: Vec<AlgoResult>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed={} depth={} branching={} tree_nodes={}", self.seed, self.depth, self.branching, self.tree_nodes)?;
        writeln!(f, "minimax: score={} nodes={}", self.baseline, self.baseline_nodes)?;
        for r in &self.results {
            writeln!(f, "{r}")?;
        }
        Ok(())
    }
}

/// A generated tree with its minimax baseline already established.
pub struct Bench {
    params: BenchParams,
    root: Node,
    baseline: i32,
    baseline_nodes: u64,
    offset: i32,
}

impl Bench {
    /// Build the tree and run the cleared minimax baseline. Minimax also
    /// reorders children, and every later algorithm sees that order.
    pub fn new(params: BenchParams) -> Result<Self, BenchError> {
        params.validate()?;
        let mut rng = SmallRng::seed_from_u64(params.seed);
        let mut root = Node::random_tree(&mut rng, params.depth, params.branching);
        root.clear();
        let (baseline, baseline_nodes) = {
            let mut s = Searcher::with_rng(&mut rng);
            let ans = s.minimax(&mut root);
            (ans, s.nodes())
        };
        let offset = if params.spread > 0 { rng.gen_range(0..2 * params.spread) - params.spread } else { 0 };
        info!(
            "seed={} depth={} branching={} nodes={} baseline={} guess_offset={}",
            params.seed, params.depth, params.branching, root.size(), baseline, offset
        );
        Ok(Self { params, root, baseline, baseline_nodes, offset })
    }

    pub fn tree(&self) -> &Node { &self.root }
    pub fn baseline(&self) -> i32 { self.baseline }
    pub fn baseline_nodes(&self) -> u64 { self.baseline_nodes }
    /// First guess handed to the MTD drivers.
    pub fn guess(&self) -> i32 { self.baseline + self.offset }

    pub fn run_step(&mut self, step: Step) -> Result<AlgoResult, BenchError> {
        if step.reset == Reset::Cleared {
            self.root.clear();
        }
        let f = self.guess();
        let spread = self.params.spread;
        let root = &mut self.root;
        let mut s = Searcher::new();
        let probes = match step.algorithm {
            Algorithm::AlphaBeta => { s.alphabeta(root, -MAX, MAX); 1 }
            Algorithm::AlphaBetaMem => { s.alphabeta_mem(root, -MAX, MAX); 1 }
            Algorithm::Negascout => { s.negascout(root, -MAX, MAX); 1 }
            Algorithm::Mtdf => s.mtdf(root, f).probes,
            Algorithm::Mtdf2 => s.mtdf2(root, f).probes,
            Algorithm::Srb => s.srb(root, f - spread, f + spread).probes,
        };
        let score = root
            .check(self.baseline)
            .map_err(|source| BenchError::Divergence { algorithm: step.algorithm, source })?;
        let result = AlgoResult { algorithm: step.algorithm, score, nodes_visited: s.nodes(), probes, reset: step.reset };
        debug!("{result}");
        Ok(result)
    }

    /// Run the whole plan in order; stops at the first divergence.
    pub fn run_plan(&mut self) -> Result<Report, BenchError> {
        let plan = self.params.plan.clone();
        let results = plan.into_iter().map(|step| self.run_step(step)).collect::<Result<Vec<_>, _>>()?;
        Ok(Report {
            seed: self.params.seed,
            depth: self.params.depth,
            branching: self.params.branching,
            tree_nodes: self.root.size() as u64,
            baseline: self.baseline,
            baseline_nodes: self.baseline_nodes,
            results,
        })
    }
}

pub fn run(params: &BenchParams) -> Result<Report, BenchError> {
    Bench::new(params.clone())?.run_plan()
}

/// Run `runs` consecutive seeds starting at `params.seed`. Each tree lives on
/// one worker thread; `on_report` is called as each finishes.
pub fn sweep<F>(params: &BenchParams, runs: u64, on_report: F) -> Result<Vec<Report>, BenchError>
where
    F: Fn(&Report) + Sync + Send,
{
    (0..runs)
        .into_par_iter()
        .map(|i| {
            let mut p = params.clone();
            p.seed = params.seed.wrapping_add(i);
            let report = run(&p)?;
            on_report(&report);
            Ok(report)
        })
        .collect()
}
