//! Bench command - engine timing from the empty board

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Args;

use hexpath_core::{Board, Engine};

#[derive(Args)]
pub struct BenchArgs {
    /// Board side length
    #[arg(long, default_value = "11")]
    pub size: usize,

    /// Wall-clock budget per search, in milliseconds
    #[arg(long, default_value = "5000")]
    pub budget_ms: u64,

    /// Number of searches to time
    #[arg(long, default_value = "3")]
    pub runs: usize,
}

pub fn run(args: BenchArgs) -> Result<()> {
    if args.size < 2 {
        bail!("board size must be at least 2");
    }
    let board = Board::new(args.size);
    let budget = Duration::from_millis(args.budget_ms);

    println!(
        "Benchmarking {}x{} board, {} ms budget, {} runs",
        args.size, args.size, args.budget_ms, args.runs
    );
    for run in 1..=args.runs {
        // Fresh engine per run so the cache starts cold every time
        let mut engine = Engine::new(args.size);
        let started = Instant::now();
        let result = engine
            .choose_move(&board, budget)
            .context("empty board must have a legal move")?;
        let elapsed = started.elapsed();
        let nodes_per_sec = result.nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
        println!(
            "run {run}: move {:?}, depth {}, {} nodes in {:.2?} ({:.0} nodes/s)",
            result.pos, result.depth, result.nodes, elapsed, nodes_per_sec
        );
    }
    Ok(())
}
