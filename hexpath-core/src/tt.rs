//! Transposition cache keyed by Zobrist hash

use rustc_hash::FxHashMap;

use crate::board::Pos;

/// How a cached value bounds the true minimax value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Fully resolved value
    Exact,
    /// Search failed high: true value >= stored value
    Lower,
    /// Search failed low: true value <= stored value
    Upper,
}

/// Best known search result for one position
#[derive(Clone, Copy, Debug)]
pub struct TtEntry {
    pub value: i32,
    pub depth: u32,
    pub bound: Bound,
    pub best_move: Option<Pos>,
}

/// Hash-keyed cache of search results. Storage is last-write-wins; the
/// depth gate and bound semantics are the consumer's contract (the engine
/// only trusts an entry whose depth covers the depth it needs). Entries
/// are never evicted within a game; `clear` resets between games.
///
/// Two distinct positions can in principle collide on the same hash.
/// That approximation is accepted, as in any Zobrist-keyed table.
#[derive(Default)]
pub struct TranspositionTable {
    entries: FxHashMap<u64, TtEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, hash: u64, entry: TtEntry) {
        self.entries.insert(hash, entry);
    }

    pub fn lookup(&self, hash: u64) -> Option<&TtEntry> {
        self.entries.get(&hash)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
