//! HEXPATH CLI - Command-line interface
//!
//! Commands:
//! - play: Play a game between the engine and a random mover
//! - bench: Time the engine from the empty board

use clap::{Parser, Subcommand};

mod bench;
mod play;

#[derive(Parser)]
#[command(name = "hexpath")]
#[command(about = "HEXPATH connection-game engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game against a random mover
    Play(play::PlayArgs),
    /// Benchmark the engine from the empty board
    Bench(bench::BenchArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Bench(args) => bench::run(args),
    }
}
