//! HEXPATH Core - Hex board and move-selection engine
//!
//! This crate provides the core logic for HEXPATH:
//! - Board state on an N x N hex grid with win detection
//! - Shortest-path connection metric with bridge patterns
//! - Position evaluation from both players' path metrics
//! - Zobrist hashing and a transposition cache
//! - Deadline-bounded iterative-deepening alpha-beta search

pub mod board;
pub mod path;
pub mod eval;
pub mod zobrist;
pub mod tt;
pub mod order;
pub mod search;

// Re-exports for convenient access
pub use board::{Board, BoardError, Cell, Player, Pos};
pub use eval::{evaluate, EvalWeights, LOSS_SCORE, WIN_SCORE};
pub use path::{measure, PathResult, UNREACHABLE};
pub use search::{Engine, EngineError, SearchConfig, SearchHandle, SearchResult};
pub use tt::{Bound, TranspositionTable, TtEntry};
pub use zobrist::ZobristTable;
