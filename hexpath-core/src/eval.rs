//! Position evaluation from connection distances

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::path::{self, PathResult};

/// Certain win sentinel: the evaluated side has a completed connection.
/// Reserved for proven outcomes; the linear combination below never
/// produces it.
pub const WIN_SCORE: i32 = i32::MAX;

/// Certain loss sentinel: the opponent has a completed connection
pub const LOSS_SCORE: i32 = i32::MIN;

/// Weights for the connection heuristic. Shortening the own path is
/// weighted more heavily than lengthening the opponent's; the asymmetry
/// is a tuning choice, so the whole vector is configuration rather than
/// inline constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Reward per cell of own-path progress
    pub own_distance: i32,
    /// Reward per viable own far-border cell
    pub own_paths: i32,
    /// Penalty per cell of enemy-path progress
    pub enemy_distance: i32,
    /// Penalty per viable enemy far-border cell
    pub enemy_paths: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            own_distance: 10,
            own_paths: 3,
            enemy_distance: 7,
            enemy_paths: 3,
        }
    }
}

impl EvalWeights {
    /// Load a weight vector from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let weights = serde_json::from_str(&content)?;
        Ok(weights)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Evaluate a position from `player`'s perspective
pub fn evaluate(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    score_paths(board.size(), &path::measure(board, player), weights)
}

/// Combine a `PathResult` into a score. Distance 0 short-circuits to the
/// win/loss sentinels before any arithmetic; unreachable distances are
/// clamped to the board size so a fully blocked side scores as zero
/// progress instead of overflowing.
pub fn score_paths(size: usize, paths: &PathResult, weights: &EvalWeights) -> i32 {
    if paths.own_distance == 0 {
        return WIN_SCORE;
    }
    if paths.enemy_distance == 0 {
        return LOSS_SCORE;
    }

    let n = size as i64;
    let own = n - (paths.own_distance as i64).min(n);
    let enemy = n - (paths.enemy_distance as i64).min(n);
    let score = weights.own_distance as i64 * own
        + weights.own_paths as i64 * paths.own_viable as i64
        - weights.enemy_distance as i64 * enemy
        - weights.enemy_paths as i64 * paths.enemy_viable as i64;
    score.clamp(LOSS_SCORE as i64 + 1, WIN_SCORE as i64 - 1) as i32
}
