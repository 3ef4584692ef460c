//! Zobrist position hashing with O(1) incremental updates

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Cell, Player, Pos};

/// Default seed for table generation. A fixed seed keeps searches
/// reproducible run to run; use `with_seed` to vary it.
pub const DEFAULT_SEED: u64 = 42;

/// Random key table for one board size: one `u64` per cell per state
/// (empty, White stone, Black stone). Owned by the engine rather than
/// stored in process-wide statics, so changing board size is an explicit
/// new-table construction.
pub struct ZobristTable {
    size: usize,
    keys: Vec<[u64; 3]>,
}

impl ZobristTable {
    pub fn new(size: usize) -> Self {
        Self::with_seed(size, DEFAULT_SEED)
    }

    pub fn with_seed(size: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let keys = (0..size * size)
            .map(|_| [rng.gen(), rng.gen(), rng.gen()])
            .collect();
        Self { size, keys }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn slot(cell: Cell) -> usize {
        match cell {
            Cell::Empty => 0,
            Cell::Stone(Player::White) => 1,
            Cell::Stone(Player::Black) => 2,
        }
    }

    /// Full O(N^2) hash of a position. Used once per game and to
    /// cross-check incremental updates; the search itself only calls
    /// `update`.
    pub fn hash(&self, board: &Board) -> u64 {
        debug_assert_eq!(board.size(), self.size);
        let mut h = 0u64;
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Pos::new(row as u8, col as u8);
                let idx = row * self.size + col;
                h ^= self.keys[idx][Self::slot(board.cell(pos))];
            }
        }
        h
    }

    /// O(1) hash delta for one cell changing state. XOR is self-inverse,
    /// so applying the same update again reverts it.
    #[inline]
    pub fn update(&self, hash: u64, pos: Pos, from: Cell, to: Cell) -> u64 {
        let idx = pos.row as usize * self.size + pos.col as usize;
        hash ^ self.keys[idx][Self::slot(from)] ^ self.keys[idx][Self::slot(to)]
    }
}
