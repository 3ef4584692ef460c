//! Iterative-deepening alpha-beta search under a wall-clock budget

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Cell, Player, Pos};
use crate::eval::{evaluate, EvalWeights, LOSS_SCORE, WIN_SCORE};
use crate::order;
use crate::tt::{Bound, TranspositionTable, TtEntry};
use crate::zobrist::ZobristTable;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Search policy knobs. Every trade-off the search makes against the
/// clock is named here rather than buried as a constant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Expand at most `breadth_numerator / iteration_depth` ordered moves
    /// per node. Deliberately incomplete: depth reach is bought with
    /// breadth at deeper iterations.
    pub breadth_numerator: usize,
    /// Game moves ordered with the cheap heuristic at the root before
    /// switching to the full path-based ordering
    pub fast_order_moves: u32,
    /// Stop deepening once the same root move has won this many
    /// consecutive completed depths; 0 disables the early stop
    pub stability_stop: u32,
    /// Consult and fill the transposition cache
    pub use_cache: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            breadth_numerator: 200,
            fast_order_moves: 3,
            stability_stop: 2,
            use_cache: true,
        }
    }
}

// ============================================================================
// PUBLIC TYPES
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no legal moves available")]
    NoLegalMoves,
}

/// Outcome of one `choose_move` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub pos: Pos,
    pub value: i32,
    /// Deepest fully completed iteration
    pub depth: u32,
    pub nodes: u64,
}

/// Cancellation handle for an in-flight search. An external scheduler
/// may call `notify_timeout` from another thread to force the engine to
/// unwind before its own deadline.
#[derive(Clone)]
pub struct SearchHandle {
    cancel: Arc<AtomicBool>,
}

impl SearchHandle {
    pub fn notify_timeout(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

// ============================================================================
// INTERNAL CONTROL FLOW
// ============================================================================

/// Timeout signal propagated up the recursion instead of a panic or a
/// misleading partial value
struct DeadlineExceeded;

/// Polling deadline: wall clock plus the external cancel flag, checked
/// at every node entry
struct Deadline {
    at: Option<Instant>,
    cancel: Arc<AtomicBool>,
}

impl Deadline {
    fn expired(&self) -> bool {
        if self.cancel.load(Ordering::Relaxed) {
            return true;
        }
        match self.at {
            Some(at) => Instant::now() >= at,
            None => false,
        }
    }
}

/// Apply a cache entry to a node's window per its bound kind. Returns
/// the value to cut off with, if the entry alone decides the node.
fn probe_cache(
    entry: &TtEntry,
    depth: u32,
    alpha: &mut i32,
    beta: &mut i32,
) -> Option<i32> {
    if entry.depth < depth {
        return None;
    }
    match entry.bound {
        Bound::Exact => return Some(entry.value),
        Bound::Lower => *alpha = (*alpha).max(entry.value),
        Bound::Upper => *beta = (*beta).min(entry.value),
    }
    if *alpha >= *beta {
        Some(entry.value)
    } else {
        None
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Move-selection engine: iterative-deepening MAX/MIN alpha-beta with a
/// transposition cache, incremental Zobrist hashing, and heuristic move
/// ordering. One instance serves one game at a time; a fresh game on the
/// same board size is detected and resets the cache.
pub struct Engine {
    weights: EvalWeights,
    config: SearchConfig,
    zobrist: ZobristTable,
    tt: TranspositionTable,
    empty_hash: u64,
    moves_played: u32,
    cancel: Arc<AtomicBool>,
    board_size: usize,
}

impl Engine {
    pub fn new(board_size: usize) -> Self {
        Self::with_settings(board_size, EvalWeights::default(), SearchConfig::default())
    }

    pub fn with_settings(board_size: usize, weights: EvalWeights, config: SearchConfig) -> Self {
        let zobrist = ZobristTable::new(board_size);
        let empty_hash = zobrist.hash(&Board::new(board_size));
        Self {
            weights,
            config,
            zobrist,
            tt: TranspositionTable::new(),
            empty_hash,
            moves_played: 0,
            cancel: Arc::new(AtomicBool::new(false)),
            board_size,
        }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Handle for external cancellation of the current or next search
    pub fn handle(&self) -> SearchHandle {
        SearchHandle {
            cancel: Arc::clone(&self.cancel),
        }
    }

    /// Pick a move within the wall-clock budget. Runs complete
    /// fixed-depth searches at depth 1, 2, 3, ... and keeps the best move
    /// of the last depth that finished; an iteration interrupted by the
    /// deadline is discarded whole.
    pub fn choose_move(
        &mut self,
        board: &Board,
        budget: Duration,
    ) -> Result<SearchResult, EngineError> {
        let deadline = Some(Instant::now() + budget);
        self.run(board, deadline)
    }

    /// Deterministic fixed-depth search without a deadline, with the
    /// cheap ordering at the root. Also drives the benchmarks and the
    /// pruning-equivalence tests.
    pub fn best_move_at_depth(
        &mut self,
        board: &Board,
        depth: u32,
    ) -> Result<SearchResult, EngineError> {
        self.prepare(board);
        self.cancel.store(false, Ordering::Relaxed);
        let hash = self.zobrist.hash(board);
        if board.is_terminal() || board.empty_cells().is_empty() {
            return Err(EngineError::NoLegalMoves);
        }
        let deadline = Deadline {
            at: None,
            cancel: Arc::clone(&self.cancel),
        };
        let mut ctx = SearchCtx {
            zobrist: &self.zobrist,
            tt: &mut self.tt,
            weights: &self.weights,
            config: &self.config,
            root_player: board.to_move(),
            iteration_depth: depth,
            deadline: &deadline,
            nodes: 0,
        };
        let mut work = board.clone();
        match ctx.search_root(&mut work, hash, false) {
            Ok((pos, value)) => Ok(SearchResult {
                pos,
                value,
                depth,
                nodes: ctx.nodes,
            }),
            // No deadline is armed, so the signal cannot fire unless the
            // external handle was triggered; treat that as no result
            Err(DeadlineExceeded) => Err(EngineError::NoLegalMoves),
        }
    }

    fn run(
        &mut self,
        board: &Board,
        deadline_at: Option<Instant>,
    ) -> Result<SearchResult, EngineError> {
        self.prepare(board);
        self.cancel.store(false, Ordering::Relaxed);
        self.moves_played += 1;

        let hash = self.zobrist.hash(board);
        if hash == self.empty_hash && self.moves_played != 1 {
            debug!("empty board mid-session: starting a fresh game");
            self.tt.clear();
            self.moves_played = 1;
        }

        let empties = board.empty_cells();
        if board.is_terminal() || empties.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let deadline = Deadline {
            at: deadline_at,
            cancel: Arc::clone(&self.cancel),
        };
        let fast_root = self.moves_played <= self.config.fast_order_moves;
        let mut work = board.clone();
        let mut best: Option<(Pos, i32)> = None;
        let mut completed_depth = 0u32;
        let mut total_nodes = 0u64;
        let mut repeats = 0u32;

        for depth in 1..=(empties.len() as u32) {
            let mut ctx = SearchCtx {
                zobrist: &self.zobrist,
                tt: &mut self.tt,
                weights: &self.weights,
                config: &self.config,
                root_player: board.to_move(),
                iteration_depth: depth,
                deadline: &deadline,
                nodes: 0,
            };
            match ctx.search_root(&mut work, hash, fast_root) {
                Ok((pos, value)) => {
                    total_nodes += ctx.nodes;
                    if best.map(|(p, _)| p) == Some(pos) {
                        repeats += 1;
                    } else {
                        repeats = 0;
                    }
                    best = Some((pos, value));
                    completed_depth = depth;
                    debug!(depth, value, nodes = ctx.nodes, "iteration complete");
                    if value == WIN_SCORE {
                        break;
                    }
                    if self.config.stability_stop > 0 && repeats >= self.config.stability_stop {
                        debug!(depth, "root move stable, stopping early");
                        break;
                    }
                }
                Err(DeadlineExceeded) => {
                    total_nodes += ctx.nodes;
                    break;
                }
            }
        }

        let (pos, value) = match best {
            Some(found) => found,
            // Depth 1 itself timed out; fall back to the cheap ordering so
            // the caller still receives a legal move
            None => (order::cheap_order(board)[0], 0),
        };
        Ok(SearchResult {
            pos,
            value,
            depth: completed_depth,
            nodes: total_nodes,
        })
    }

    /// Regenerate size-dependent state when the board size changes; a
    /// stale Zobrist table must never outlive its size.
    fn prepare(&mut self, board: &Board) {
        if board.size() != self.board_size {
            debug!(
                old = self.board_size,
                new = board.size(),
                "board size changed, regenerating tables"
            );
            self.board_size = board.size();
            self.zobrist = ZobristTable::new(self.board_size);
            self.empty_hash = self.zobrist.hash(&Board::new(self.board_size));
            self.tt.clear();
            self.moves_played = 0;
        }
    }
}

// ============================================================================
// SEARCH CONTEXT (one iteration)
// ============================================================================

struct SearchCtx<'a> {
    zobrist: &'a ZobristTable,
    tt: &'a mut TranspositionTable,
    weights: &'a EvalWeights,
    config: &'a SearchConfig,
    root_player: Player,
    iteration_depth: u32,
    deadline: &'a Deadline,
    nodes: u64,
}

impl SearchCtx<'_> {
    fn check_deadline(&self) -> Result<(), DeadlineExceeded> {
        if self.deadline.expired() {
            Err(DeadlineExceeded)
        } else {
            Ok(())
        }
    }

    fn move_cap(&self, available: usize) -> usize {
        let cap = self.config.breadth_numerator / self.iteration_depth.max(1) as usize;
        cap.max(1).min(available)
    }

    /// Root node: always the root player to move, full window per child.
    /// A child that wins outright is returned without deeper search.
    fn search_root(
        &mut self,
        board: &mut Board,
        hash: u64,
        fast_order: bool,
    ) -> Result<(Pos, i32), DeadlineExceeded> {
        let moves = if fast_order {
            order::cheap_order(board)
        } else {
            order::full_order(board, self.root_player, self.weights)
        };
        let cap = self.move_cap(moves.len());

        let mut best_pos = moves[0];
        let mut best_value = LOSS_SCORE;
        let mut alpha = LOSS_SCORE;

        for &pos in moves.iter().take(cap) {
            self.check_deadline()?;
            self.nodes += 1;

            let mover = board.to_move();
            board
                .place_stone(pos)
                .expect("move ordering proposed an illegal move");
            let child_hash =
                self.zobrist
                    .update(hash, pos, Cell::Empty, Cell::Stone(mover));

            // An outright win skips the deeper search entirely
            let searched = if board.winner() == Some(self.root_player) {
                Ok(WIN_SCORE)
            } else {
                self.min_node(board, child_hash, self.iteration_depth - 1, alpha, WIN_SCORE)
            };
            board.undo_stone(pos);
            let value = searched?;

            if value > best_value {
                best_value = value;
                best_pos = pos;
            }
            alpha = alpha.max(best_value);
            if best_value == WIN_SCORE {
                break;
            }
        }

        Ok((best_pos, best_value))
    }

    /// MIN node: the opponent to move, minimizing the root player's value
    fn min_node(
        &mut self,
        board: &mut Board,
        hash: u64,
        depth: u32,
        alpha: i32,
        beta: i32,
    ) -> Result<i32, DeadlineExceeded> {
        self.check_deadline()?;
        self.nodes += 1;

        if let Some(winner) = board.winner() {
            return Ok(if winner == self.root_player {
                WIN_SCORE
            } else {
                LOSS_SCORE
            });
        }

        let mut alpha = alpha;
        let mut beta = beta;
        let mut cached_move = None;
        if self.config.use_cache {
            if let Some(entry) = self.tt.lookup(hash) {
                cached_move = entry.best_move;
                if let Some(value) = probe_cache(entry, depth, &mut alpha, &mut beta) {
                    return Ok(value);
                }
            }
        }

        if depth == 0 {
            return Ok(evaluate(board, self.root_player, self.weights));
        }

        let moves = self.ordered_moves(board, cached_move);
        if moves.is_empty() {
            return Ok(evaluate(board, self.root_player, self.weights));
        }
        let cap = self.move_cap(moves.len());
        let beta_in = beta;
        let mut best = WIN_SCORE;
        let mut best_move = None;

        for &pos in moves.iter().take(cap) {
            let mover = board.to_move();
            board
                .place_stone(pos)
                .expect("move ordering proposed an illegal move");
            let child_hash =
                self.zobrist
                    .update(hash, pos, Cell::Empty, Cell::Stone(mover));
            let searched = self.max_node(board, child_hash, depth - 1, alpha, beta);
            board.undo_stone(pos);
            let value = searched?;

            if value < best {
                best = value;
                best_move = Some(pos);
            }
            beta = beta.min(best);
            if beta <= alpha {
                // Fail low: the true value can only be this or smaller
                self.store(hash, best, depth, Bound::Upper, best_move);
                return Ok(best);
            }
        }

        let bound = if best >= beta_in { Bound::Lower } else { Bound::Exact };
        self.store(hash, best, depth, bound, best_move);
        Ok(best)
    }

    /// MAX node: the root player to move, maximizing its own value
    fn max_node(
        &mut self,
        board: &mut Board,
        hash: u64,
        depth: u32,
        alpha: i32,
        beta: i32,
    ) -> Result<i32, DeadlineExceeded> {
        self.check_deadline()?;
        self.nodes += 1;

        if let Some(winner) = board.winner() {
            return Ok(if winner == self.root_player {
                WIN_SCORE
            } else {
                LOSS_SCORE
            });
        }

        let mut alpha = alpha;
        let mut beta = beta;
        let mut cached_move = None;
        if self.config.use_cache {
            if let Some(entry) = self.tt.lookup(hash) {
                cached_move = entry.best_move;
                if let Some(value) = probe_cache(entry, depth, &mut alpha, &mut beta) {
                    return Ok(value);
                }
            }
        }

        if depth == 0 {
            return Ok(evaluate(board, self.root_player, self.weights));
        }

        let moves = self.ordered_moves(board, cached_move);
        if moves.is_empty() {
            return Ok(evaluate(board, self.root_player, self.weights));
        }
        let cap = self.move_cap(moves.len());
        let alpha_in = alpha;
        let mut best = LOSS_SCORE;
        let mut best_move = None;

        for &pos in moves.iter().take(cap) {
            let mover = board.to_move();
            board
                .place_stone(pos)
                .expect("move ordering proposed an illegal move");
            let child_hash =
                self.zobrist
                    .update(hash, pos, Cell::Empty, Cell::Stone(mover));
            let searched = self.min_node(board, child_hash, depth - 1, alpha, beta);
            board.undo_stone(pos);
            let value = searched?;

            if value > best {
                best = value;
                best_move = Some(pos);
            }
            alpha = alpha.max(best);
            if alpha >= beta {
                // Fail high: the true value can only be this or larger
                self.store(hash, best, depth, Bound::Lower, best_move);
                return Ok(best);
            }
        }

        let bound = if best <= alpha_in { Bound::Upper } else { Bound::Exact };
        self.store(hash, best, depth, bound, best_move);
        Ok(best)
    }

    /// Interior ordering: cheap heuristic, with a cached best move from a
    /// previous visit promoted to the front
    fn ordered_moves(&self, board: &Board, cached_move: Option<Pos>) -> Vec<Pos> {
        let mut moves = order::cheap_order(board);
        if let Some(first) = cached_move {
            if let Some(i) = moves.iter().position(|&p| p == first) {
                moves[..=i].rotate_right(1);
            }
        }
        moves
    }

    fn store(&mut self, hash: u64, value: i32, depth: u32, bound: Bound, best_move: Option<Pos>) {
        if self.config.use_cache {
            self.tt.store(
                hash,
                TtEntry {
                    value,
                    depth,
                    bound,
                    best_move,
                },
            );
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn no_cache_config() -> SearchConfig {
        SearchConfig {
            breadth_numerator: usize::MAX,
            fast_order_moves: u32::MAX,
            stability_stop: 0,
            use_cache: false,
        }
    }

    /// Brute-force minimax with no pruning, no cache, no breadth cap,
    /// same move ordering and tie-breaking as the engine
    fn minimax(board: &mut Board, root: Player, depth: u32, weights: &EvalWeights) -> i32 {
        if let Some(winner) = board.winner() {
            return if winner == root { WIN_SCORE } else { LOSS_SCORE };
        }
        if depth == 0 {
            return evaluate(board, root, weights);
        }
        let moves = order::cheap_order(board);
        if moves.is_empty() {
            return evaluate(board, root, weights);
        }
        let maximizing = board.to_move() == root;
        let mut best = if maximizing { LOSS_SCORE } else { WIN_SCORE };
        for pos in moves {
            board.place_stone(pos).unwrap();
            let value = minimax(board, root, depth - 1, weights);
            board.undo_stone(pos);
            if maximizing {
                best = best.max(value);
            } else {
                best = best.min(value);
            }
        }
        best
    }

    fn brute_force_best(board: &Board, depth: u32, weights: &EvalWeights) -> (Pos, i32) {
        let root = board.to_move();
        let mut work = board.clone();
        // Same root ordering as the engine so tie-breaking agrees
        let moves = order::full_order(board, root, weights);
        let mut best_pos = moves[0];
        let mut best_value = LOSS_SCORE;
        for pos in moves {
            work.place_stone(pos).unwrap();
            let value = if work.winner() == Some(root) {
                WIN_SCORE
            } else {
                minimax(&mut work, root, depth - 1, weights)
            };
            work.undo_stone(pos);
            if value > best_value {
                best_value = value;
                best_pos = pos;
            }
        }
        (best_pos, best_value)
    }

    #[test]
    fn test_pruning_matches_brute_force() {
        let board = Board::with_stones(
            4,
            &[
                (Pos::new(1, 1), Player::White),
                (Pos::new(2, 2), Player::Black),
                (Pos::new(0, 2), Player::White),
                (Pos::new(3, 1), Player::Black),
            ],
            Player::White,
        )
        .unwrap();
        let weights = EvalWeights::default();

        for depth in 1..=3 {
            let mut engine = Engine::with_settings(4, weights.clone(), no_cache_config());
            let result = engine.best_move_at_depth(&board, depth).unwrap();
            let (expected_pos, expected_value) = brute_force_best(&board, depth, &weights);
            assert_eq!(result.pos, expected_pos, "move differs at depth {depth}");
            assert_eq!(result.value, expected_value, "value differs at depth {depth}");
        }
    }

    #[test]
    fn test_finds_immediate_win() {
        // White completes a chain at (4, 1)
        let stones: Vec<(Pos, Player)> = (0..4)
            .map(|r| (Pos::new(r, 1), Player::White))
            .chain((0..4).map(|r| (Pos::new(r, 3), Player::Black)))
            .collect();
        let board = Board::with_stones(5, &stones, Player::White).unwrap();

        let mut engine = Engine::new(5);
        let result = engine
            .choose_move(&board, Duration::from_secs(5))
            .unwrap();
        assert_eq!(result.pos, Pos::new(4, 1));
        assert_eq!(result.value, WIN_SCORE);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // Black threatens to finish at (2, 4); White to move at depth 2
        // must see the refutation and claim that cell
        let stones: Vec<(Pos, Player)> = (0..4)
            .map(|c| (Pos::new(2, c), Player::Black))
            .chain([(Pos::new(0, 0), Player::White), (Pos::new(4, 4), Player::White)])
            .collect();
        let board = Board::with_stones(5, &stones, Player::White).unwrap();

        let mut engine = Engine::new(5);
        let result = engine.best_move_at_depth(&board, 2).unwrap();
        assert_eq!(result.pos, Pos::new(2, 4));
    }

    #[test]
    fn test_no_legal_moves_on_finished_game() {
        let stones: Vec<(Pos, Player)> =
            (0..5).map(|r| (Pos::new(r, 2), Player::White)).collect();
        let board = Board::with_stones(5, &stones, Player::Black).unwrap();
        let mut engine = Engine::new(5);
        assert_eq!(
            engine.choose_move(&board, Duration::from_millis(50)),
            Err(EngineError::NoLegalMoves)
        );
    }

    #[test]
    fn test_deadline_returns_legal_move() {
        let board = Board::new(9);
        let mut engine = Engine::new(9);
        let started = Instant::now();
        let result = engine
            .choose_move(&board, Duration::from_millis(20))
            .unwrap();
        // Bounded overshoot: one node evaluation past the deadline, with
        // generous slack for slow CI machines
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(board.cell(result.pos), Cell::Empty);
    }

    #[test]
    fn test_notify_timeout_interrupts() {
        let board = Board::new(11);
        let mut engine = Engine::new(11);
        let handle = engine.handle();

        let worker = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            handle.notify_timeout();
        });
        let started = Instant::now();
        let result = engine.choose_move(&board, Duration::from_secs(60)).unwrap();
        worker.join().unwrap();

        assert!(started.elapsed() < Duration::from_secs(10));
        assert_eq!(board.cell(result.pos), Cell::Empty);
    }

    #[test]
    fn test_probe_cache_exact_returns_value() {
        let entry = TtEntry {
            value: 42,
            depth: 5,
            bound: Bound::Exact,
            best_move: None,
        };
        let (mut alpha, mut beta) = (LOSS_SCORE, WIN_SCORE);
        assert_eq!(probe_cache(&entry, 5, &mut alpha, &mut beta), Some(42));
        assert_eq!(probe_cache(&entry, 3, &mut alpha, &mut beta), Some(42));
    }

    #[test]
    fn test_probe_cache_ignores_shallow_entry() {
        let entry = TtEntry {
            value: 42,
            depth: 2,
            bound: Bound::Exact,
            best_move: None,
        };
        let (mut alpha, mut beta) = (LOSS_SCORE, WIN_SCORE);
        assert_eq!(probe_cache(&entry, 3, &mut alpha, &mut beta), None);
        assert_eq!(alpha, LOSS_SCORE);
        assert_eq!(beta, WIN_SCORE);
    }

    #[test]
    fn test_probe_cache_bounds_tighten_window() {
        let lower = TtEntry {
            value: 10,
            depth: 4,
            bound: Bound::Lower,
            best_move: None,
        };
        let (mut alpha, mut beta) = (0, 100);
        assert_eq!(probe_cache(&lower, 4, &mut alpha, &mut beta), None);
        assert_eq!(alpha, 10);

        let upper = TtEntry {
            value: 60,
            depth: 4,
            bound: Bound::Upper,
            best_move: None,
        };
        assert_eq!(probe_cache(&upper, 4, &mut alpha, &mut beta), None);
        assert_eq!(beta, 60);

        // Tightening to an empty window cuts off with the entry's value
        let closing = TtEntry {
            value: 70,
            depth: 4,
            bound: Bound::Lower,
            best_move: None,
        };
        assert_eq!(probe_cache(&closing, 4, &mut alpha, &mut beta), Some(70));
    }

    #[test]
    fn test_iterative_deepening_reports_depth() {
        let board = Board::new(4);
        let mut engine = Engine::new(4);
        let result = engine
            .choose_move(&board, Duration::from_secs(2))
            .unwrap();
        assert!(result.depth >= 1);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_new_game_resets_cache() {
        let mut engine = Engine::new(4);
        let board = Board::new(4);
        engine.choose_move(&board, Duration::from_millis(200)).unwrap();
        assert!(!engine.tt.is_empty());

        // Mid-game position, then an empty board again: a new game
        let mid = Board::with_stones(4, &[(Pos::new(1, 1), Player::White)], Player::Black)
            .unwrap();
        engine.choose_move(&mid, Duration::from_millis(100)).unwrap();
        engine.choose_move(&board, Duration::from_millis(50)).unwrap();
        assert_eq!(engine.moves_played, 1);
    }

    #[test]
    fn test_board_resize_regenerates_tables() {
        let mut engine = Engine::new(5);
        let small = Board::new(5);
        engine.choose_move(&small, Duration::from_millis(100)).unwrap();

        let large = Board::new(7);
        let result = engine.choose_move(&large, Duration::from_millis(100)).unwrap();
        assert!(large.contains(result.pos));
        assert_eq!(engine.board_size, 7);
        assert_eq!(
            engine.empty_hash,
            ZobristTable::new(7).hash(&Board::new(7))
        );
    }
}
