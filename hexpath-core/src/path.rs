//! Connection distance metric: Dijkstra over the board graph with
//! virtual border sources and Hex bridge edges

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::board::{Board, Cell, Player, Pos};

/// Distance assigned to a border a side can no longer reach
pub const UNREACHABLE: u32 = u32::MAX;

/// Bridge patterns as (via1, via2, far) offsets. Two cells a knight-ish
/// step apart are effectively connected when both shared neighbors are
/// empty: the opponent cannot block both. The far cell is treated as a
/// direct neighbor when it holds the evaluated side's stone.
const BRIDGE_PATTERNS: [[(i32, i32); 3]; 6] = [
    [(0, -1), (1, -1), (1, -2)],
    [(-1, 0), (0, -1), (-1, -1)],
    [(-1, 1), (-1, 0), (-2, 1)],
    [(0, 1), (-1, 1), (-1, 2)],
    [(1, 0), (0, 1), (1, 1)],
    [(1, -1), (1, 0), (2, -1)],
];

/// Connection metrics for one position, both sides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Empty cells the evaluated side still needs to connect its borders;
    /// 0 means it has already won
    pub own_distance: u32,
    /// Far-border cells reachable at the shortest distance
    pub own_viable: u32,
    pub enemy_distance: u32,
    pub enemy_viable: u32,
}

/// Measure both sides' connection distances on one position. The two
/// Dijkstra runs are independent; nothing is cached between calls.
pub fn measure(board: &Board, player: Player) -> PathResult {
    let (own_distance, own_viable) = side_distances(board, player);
    let (enemy_distance, enemy_viable) = side_distances(board, player.opponent());
    PathResult {
        own_distance,
        own_viable,
        enemy_distance,
        enemy_viable,
    }
}

/// Dijkstra for one side. Edge cost into a cell is 0 for an own stone,
/// 1 for an empty cell; enemy cells have no edge. The starting border
/// acts as a virtual source: its non-enemy cells are seeded at cost 0/1.
fn side_distances(board: &Board, side: Player) -> (u32, u32) {
    let n = board.size();
    let mut dist = vec![UNREACHABLE; n * n];
    let mut done = vec![false; n * n];
    let mut heap: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();

    for i in 0..n {
        let pos = start_border(side, i as u8);
        let idx = cell_index(n, pos);
        match board.cell(pos) {
            Cell::Stone(p) if p != side => continue,
            Cell::Stone(_) => dist[idx] = 0,
            Cell::Empty => dist[idx] = 1,
        }
        heap.push(Reverse((dist[idx], idx)));
    }

    while let Some(Reverse((d, idx))) = heap.pop() {
        if done[idx] {
            continue;
        }
        done[idx] = true;
        let pos = Pos::new((idx / n) as u8, (idx % n) as u8);

        for next in reachable_from(board, side, pos) {
            if let Cell::Stone(p) = board.cell(next) {
                if p != side {
                    continue;
                }
            }
            let step = match board.cell(next) {
                Cell::Stone(_) => 0,
                Cell::Empty => 1,
            };
            let next_idx = cell_index(n, next);
            let candidate = d + step;
            if candidate < dist[next_idx] {
                dist[next_idx] = candidate;
                heap.push(Reverse((candidate, next_idx)));
            }
        }
    }

    // Shortest distance and viable-path count read off the far border
    let mut shortest = UNREACHABLE;
    for i in 0..n {
        shortest = shortest.min(dist[cell_index(n, far_border(side, i as u8, n))]);
    }
    let viable = if shortest == UNREACHABLE {
        0
    } else {
        (0..n)
            .filter(|&i| dist[cell_index(n, far_border(side, i as u8, n))] <= shortest)
            .count() as u32
    };
    (shortest, viable)
}

/// Direct hex neighbors plus bridge endpoints for the evaluated side
fn reachable_from(board: &Board, side: Player, pos: Pos) -> Vec<Pos> {
    let mut out: Vec<Pos> = board.neighbors(pos).collect();
    for pattern in &BRIDGE_PATTERNS {
        let cells: Vec<Option<Pos>> = pattern
            .iter()
            .map(|&(dr, dc)| offset(board, pos, dr, dc))
            .collect();
        if let (Some(via1), Some(via2), Some(far)) = (cells[0], cells[1], cells[2]) {
            if board.cell(via1) == Cell::Empty
                && board.cell(via2) == Cell::Empty
                && board.cell(far) == Cell::Stone(side)
            {
                out.push(far);
            }
        }
    }
    out
}

fn offset(board: &Board, pos: Pos, dr: i32, dc: i32) -> Option<Pos> {
    let row = pos.row as i32 + dr;
    let col = pos.col as i32 + dc;
    if row >= 0 && (row as usize) < board.size() && col >= 0 && (col as usize) < board.size() {
        Some(Pos::new(row as u8, col as u8))
    } else {
        None
    }
}

fn cell_index(n: usize, pos: Pos) -> usize {
    pos.row as usize * n + pos.col as usize
}

fn start_border(side: Player, i: u8) -> Pos {
    match side {
        Player::White => Pos::new(0, i),
        Player::Black => Pos::new(i, 0),
    }
}

fn far_border(side: Player, i: u8, n: usize) -> Pos {
    match side {
        Player::White => Pos::new((n - 1) as u8, i),
        Player::Black => Pos::new(i, (n - 1) as u8),
    }
}
