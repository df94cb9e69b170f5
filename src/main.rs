use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use negabench::bench::{self, Bench, BenchParams};

#[derive(Parser, Debug)]
#[command(name = "negabench", version, about = "Run exact game-tree search algorithms on a synthetic tree and cross-check them against minimax")]
struct Args {
    /// Random seed (drawn and printed when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Tree depth
    #[arg(long, default_value_t = 6)]
    depth: u32,

    /// Children per internal node
    #[arg(long, default_value_t = 6)]
    branching: usize,

    /// Half-width of the MTD guess offset and the srb seed window
    #[arg(long, default_value_t = 20)]
    spread: i32,

    /// Do not reset scores/bounds before each algorithm
    #[arg(long, default_value_t = false)]
    carry_over: bool,

    /// Emit the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Dump the tree after the minimax baseline
    #[arg(long, default_value_t = false)]
    print_tree: bool,

    /// Sweep this many consecutive seeds starting at --seed
    #[arg(long, default_value_t = 1)]
    runs: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut params = BenchParams { seed, depth: args.depth, branching: args.branching, spread: args.spread, ..BenchParams::default() };
    if args.carry_over { params = params.carried_over(); }

    if args.runs > 1 {
        let pb = ProgressBar::new(args.runs);
        pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} trees ({eta})")?);
        let reports = bench::sweep(&params, args.runs, |_| pb.inc(1)).context("sweep failed")?;
        pb.finish_and_clear();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for r in &reports { print!("{r}"); }
            println!("all {} seeds agree with minimax", reports.len());
        }
        return Ok(());
    }

    let mut b = Bench::new(params).context("failed to build benchmark tree")?;
    if args.print_tree { print!("{}", b.tree()); }
    let report = b.run_plan().with_context(|| format!("seed={seed}"))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
