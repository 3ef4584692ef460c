//! Move ordering heuristics for alpha-beta efficiency

use crate::board::{Board, Cell, Player, Pos};
use crate::eval::{evaluate, EvalWeights};

/// Cheap desirability score for a single empty cell: center proximity
/// plus neighbor support, no path computation. Scored for the side to
/// move.
pub(crate) fn cheap_score(board: &Board, pos: Pos) -> i32 {
    let half = (board.size() / 2) as i32;
    let center_distance = (pos.row as i32 - half).abs() + (pos.col as i32 - half).abs();

    let mut neighbor_score = 0;
    for neighbor in board.neighbors(pos) {
        match board.cell(neighbor) {
            Cell::Empty => neighbor_score += 1,
            Cell::Stone(p) if p == board.to_move() => neighbor_score += 2,
            Cell::Stone(_) => neighbor_score -= 1,
        }
    }

    -center_distance + neighbor_score
}

/// All empty cells ordered by the cheap heuristic, best first. The sort
/// is stable, so equal scores keep the board's row-major order and the
/// search stays reproducible.
pub fn cheap_order(board: &Board) -> Vec<Pos> {
    let mut moves = board.empty_cells();
    moves.sort_by_key(|&pos| std::cmp::Reverse(cheap_score(board, pos)));
    moves
}

/// All empty cells ordered by the full path heuristic: each candidate is
/// placed on a scratch board and the resulting position scored for
/// `player`. Far costlier than `cheap_order`; used at the root once a
/// game is past its opening moves.
pub fn full_order(board: &Board, player: Player, weights: &EvalWeights) -> Vec<Pos> {
    let mut scratch = board.clone();
    let mut scored: Vec<(i32, Pos)> = board
        .empty_cells()
        .into_iter()
        .map(|pos| {
            scratch
                .place_stone(pos)
                .expect("empty cell must be playable");
            let score = evaluate(&scratch, player, weights);
            scratch.undo_stone(pos);
            (score, pos)
        })
        .collect();
    scored.sort_by_key(|&(score, _)| std::cmp::Reverse(score));
    scored.into_iter().map(|(_, pos)| pos).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cheap_order_scores_non_increasing() {
        let board = Board::with_stones(
            5,
            &[
                (Pos::new(2, 2), Player::White),
                (Pos::new(1, 3), Player::Black),
            ],
            Player::White,
        )
        .unwrap();
        let ordered = cheap_order(&board);
        for pair in ordered.windows(2) {
            assert!(
                cheap_score(&board, pair[0]) >= cheap_score(&board, pair[1]),
                "ordering not monotone at {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_cheap_order_is_permutation_of_empty_cells() {
        let board = Board::with_stones(
            5,
            &[
                (Pos::new(0, 0), Player::White),
                (Pos::new(4, 4), Player::Black),
            ],
            Player::White,
        )
        .unwrap();
        let mut ordered = cheap_order(&board);
        let mut empty = board.empty_cells();
        ordered.sort_by_key(|p| (p.row, p.col));
        empty.sort_by_key(|p| (p.row, p.col));
        assert_eq!(ordered, empty);
    }

    #[test]
    fn test_cheap_order_prefers_center_on_empty_board() {
        let board = Board::new(5);
        let ordered = cheap_order(&board);
        assert_eq!(ordered[0], Pos::new(2, 2));
    }

    #[test]
    fn test_cheap_score_rewards_own_neighbors() {
        let board =
            Board::with_stones(5, &[(Pos::new(2, 2), Player::White)], Player::White).unwrap();
        // (2, 3) touches the White stone, (2, 0) does not; both are one
        // ring from center-adjacent columns but support differs
        let supported = cheap_score(&board, Pos::new(2, 3));
        let lonely = cheap_score(&board, Pos::new(2, 0));
        assert!(supported > lonely);
    }

    #[test]
    fn test_full_order_finds_winning_placement_first() {
        // White needs exactly (4, 1) to complete a chain
        let stones: Vec<(Pos, Player)> = (0..4)
            .map(|r| (Pos::new(r, 1), Player::White))
            .chain([(Pos::new(2, 3), Player::Black), (Pos::new(3, 3), Player::Black)])
            .collect();
        let board = Board::with_stones(5, &stones, Player::White).unwrap();
        let ordered = full_order(&board, Player::White, &EvalWeights::default());
        assert_eq!(ordered[0], Pos::new(4, 1));
    }

    #[test]
    fn test_full_order_leaves_board_untouched() {
        let board = Board::new(4);
        let empties_before = board.empty_cells();
        let _ = full_order(&board, Player::White, &EvalWeights::default());
        assert_eq!(board.empty_cells(), empties_before);
    }
}
