//! Rhombic N x N Hex board with make/undo stone placement

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hex adjacency offsets (row delta, column delta)
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

/// Cell coordinate: row 0 is White's starting border, column 0 is Black's
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Player color. White connects top to bottom, Black connects left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

/// Cell occupancy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Stone(Player),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("position ({0}, {1}) is outside a {2}x{2} board")]
    OutOfBounds(u8, u8, usize),
    #[error("cell ({0}, {1}) is already occupied")]
    Occupied(u8, u8),
    #[error("the game is already over")]
    GameOver,
}

/// Board state. Placement mutates in place; `undo_stone` is the exact
/// inverse, so the search can walk the game tree without cloning.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    to_move: Player,
    winner: Option<Player>,
}

impl Board {
    /// Empty board, White to move
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            to_move: Player::White,
            winner: None,
        }
    }

    /// Build a board from an arbitrary stone list, for test fixtures and
    /// position setup. The winner is recomputed from the final occupancy.
    pub fn with_stones(
        size: usize,
        stones: &[(Pos, Player)],
        to_move: Player,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(size);
        for &(pos, player) in stones {
            if !board.contains(pos) {
                return Err(BoardError::OutOfBounds(pos.row, pos.col, size));
            }
            let idx = board.index(pos);
            if board.cells[idx] != Cell::Empty {
                return Err(BoardError::Occupied(pos.row, pos.col));
            }
            board.cells[idx] = Cell::Stone(player);
        }
        board.to_move = to_move;
        board.winner = [Player::White, Player::Black]
            .into_iter()
            .find(|&p| board.connects_borders(p));
        Ok(board)
    }

    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// All empty cells, row-major. The search re-sorts these, so the
    /// order here only fixes tie-breaking.
    pub fn empty_cells(&self) -> Vec<Pos> {
        let mut out = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Pos::new(row as u8, col as u8);
                if self.cell(pos) == Cell::Empty {
                    out.push(pos);
                }
            }
        }
        out
    }

    /// The up-to-six in-bounds hex neighbors of a cell
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row as i32 + dr;
            let col = pos.col as i32 + dc;
            if row >= 0 && (row as usize) < self.size && col >= 0 && (col as usize) < self.size {
                Some(Pos::new(row as u8, col as u8))
            } else {
                None
            }
        })
    }

    /// Place a stone for the side to move, advance the turn, and detect a
    /// completed connection. Fails fast on occupied or out-of-bounds cells.
    pub fn place_stone(&mut self, pos: Pos) -> Result<(), BoardError> {
        if self.winner.is_some() {
            return Err(BoardError::GameOver);
        }
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds(pos.row, pos.col, self.size));
        }
        let idx = self.index(pos);
        if self.cells[idx] != Cell::Empty {
            return Err(BoardError::Occupied(pos.row, pos.col));
        }

        let player = self.to_move;
        self.cells[idx] = Cell::Stone(player);
        self.to_move = player.opponent();
        if self.connects_borders(player) {
            self.winner = Some(player);
        }
        Ok(())
    }

    /// Inverse of `place_stone` for the same cell. Only the last placement
    /// may be undone, which is all the search's backtracking needs.
    pub fn undo_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        debug_assert!(matches!(self.cells[idx], Cell::Stone(_)));
        self.cells[idx] = Cell::Empty;
        self.to_move = self.to_move.opponent();
        self.winner = None;
    }

    /// BFS over own stones from the starting border to the far border
    fn connects_borders(&self, player: Player) -> bool {
        let mut visited = vec![false; self.size * self.size];
        let mut queue = Vec::new();

        for i in 0..self.size {
            let pos = match player {
                Player::White => Pos::new(0, i as u8),
                Player::Black => Pos::new(i as u8, 0),
            };
            if self.cell(pos) == Cell::Stone(player) {
                visited[self.index(pos)] = true;
                queue.push(pos);
            }
        }

        while let Some(pos) = queue.pop() {
            let at_far_border = match player {
                Player::White => pos.row as usize == self.size - 1,
                Player::Black => pos.col as usize == self.size - 1,
            };
            if at_far_border {
                return true;
            }
            for next in self.neighbors(pos) {
                let idx = self.index(next);
                if !visited[idx] && self.cells[idx] == Cell::Stone(player) {
                    visited[idx] = true;
                    queue.push(next);
                }
            }
        }

        false
    }
}
