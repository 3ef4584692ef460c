//! Play command - engine versus a random mover
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_game(), report_result()
//! - Level 3: engine_turn(), random_turn(), render_board()

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use hexpath_core::{Board, Cell, Engine, EvalWeights, Player, SearchConfig};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board side length
    #[arg(long, default_value = "7")]
    pub size: usize,

    /// Wall-clock budget per engine move, in milliseconds
    #[arg(long, default_value = "1000")]
    pub budget_ms: u64,

    /// Evaluation weights JSON file (defaults built in)
    #[arg(long, value_name = "FILE")]
    pub weights: Option<PathBuf>,

    /// Color the engine plays
    #[arg(long, default_value = "white")]
    pub engine_color: String,

    /// RNG seed for the random opponent
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Print the board after every move
    #[arg(long)]
    pub show_board: bool,
}

// ============================================================================
// ORCHESTRATION (Level 1)
// ============================================================================

pub fn run(args: PlayArgs) -> Result<()> {
    if args.size < 2 {
        bail!("board size must be at least 2");
    }
    let engine_color = match args.engine_color.as_str() {
        "white" => Player::White,
        "black" => Player::Black,
        other => bail!("unknown color '{other}' (expected 'white' or 'black')"),
    };
    let weights = match &args.weights {
        Some(path) => EvalWeights::load(path)
            .with_context(|| format!("loading weights from {}", path.display()))?,
        None => EvalWeights::default(),
    };

    let mut engine = Engine::with_settings(args.size, weights, SearchConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let budget = Duration::from_millis(args.budget_ms);

    let (winner, moves) = play_game(&mut engine, &mut rng, &args, engine_color, budget)?;
    report_result(winner, engine_color, moves);
    Ok(())
}

// ============================================================================
// GAME LOOP (Level 2)
// ============================================================================

fn play_game(
    engine: &mut Engine,
    rng: &mut ChaCha8Rng,
    args: &PlayArgs,
    engine_color: Player,
    budget: Duration,
) -> Result<(Player, u32)> {
    let mut board = Board::new(args.size);
    let mut moves = 0u32;

    loop {
        let pos = if board.to_move() == engine_color {
            engine_turn(engine, &board, budget)?
        } else {
            random_turn(&board, rng)?
        };
        board
            .place_stone(pos)
            .context("player produced an illegal move")?;
        moves += 1;

        if args.show_board {
            println!("{}", render_board(&board));
        }
        if let Some(winner) = board.winner() {
            return Ok((winner, moves));
        }
    }
}

fn report_result(winner: Player, engine_color: Player, moves: u32) {
    let tag = if winner == engine_color { "engine" } else { "random" };
    println!("{winner:?} ({tag}) wins after {moves} moves");
}

// ============================================================================
// PLAYERS AND RENDERING (Level 3)
// ============================================================================

fn engine_turn(engine: &mut Engine, board: &Board, budget: Duration) -> Result<hexpath_core::Pos> {
    let result = engine
        .choose_move(board, budget)
        .context("engine found no legal move")?;
    info!(
        pos = ?result.pos,
        value = result.value,
        depth = result.depth,
        nodes = result.nodes,
        "engine move"
    );
    Ok(result.pos)
}

fn random_turn(board: &Board, rng: &mut ChaCha8Rng) -> Result<hexpath_core::Pos> {
    let empties = board.empty_cells();
    match empties.choose(rng) {
        Some(&pos) => Ok(pos),
        None => bail!("random mover found no legal move"),
    }
}

/// ASCII rendering with each row shifted right to suggest the rhombus
fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..board.size() {
        for _ in 0..row {
            out.push(' ');
        }
        for col in 0..board.size() {
            let pos = hexpath_core::Pos::new(row as u8, col as u8);
            let glyph = match board.cell(pos) {
                Cell::Empty => '.',
                Cell::Stone(Player::White) => 'W',
                Cell::Stone(Player::Black) => 'B',
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
