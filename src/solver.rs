//! Exhaustive minimax search for the engine side
//!
//! The engine plays O and every terminal outcome is scored from O's point of
//! view. The full game tree from any 3x3 position is at most a few thousand
//! nodes, so the search enumerates it completely without pruning.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Outcome, Player};

/// Value of a position from O's point of view.
///
/// The derived ordering is `Loss < Draw < Win`, which is everything the
/// search needs: scores are only ever compared, never added, and there is no
/// depth discount, so a win in one move and a win in five are the same
/// `Win`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Score {
    Loss,
    Draw,
    Win,
}

/// Score a position by exhaustive search.
///
/// `maximizing` selects whose hypothetical turn it is: O when true, X when
/// false. Terminal positions are scored directly (the only place scores are
/// assigned); everything else recurses over every empty cell in row-major
/// order, placing the side to move on a copy of the board, and folds the
/// candidate scores with max (maximizing) or min (minimizing).
pub fn evaluate(board: &Board, maximizing: bool) -> Score {
    match board.classify() {
        Outcome::Win(Player::O) => return Score::Win,
        Outcome::Win(Player::X) => return Score::Loss,
        Outcome::Draw => return Score::Draw,
        Outcome::Ongoing => {}
    }

    let side = if maximizing { Player::O } else { Player::X };
    let mut best = if maximizing { Score::Loss } else { Score::Win };
    for (row, col) in board.empty_cells() {
        let child = board
            .place(row, col, side)
            .expect("empty-cell enumeration only yields legal placements");
        let value = evaluate(&child, !maximizing);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Choose O's best move without touching the board.
///
/// Every empty cell is tried in row-major order with the opponent replying
/// optimally (`maximizing = false` in the recursion). Only a strictly
/// greater score displaces the candidate, so the first cell reaching the
/// maximum wins ties and the result is deterministic for a given board.
///
/// Returns `None` iff the board has no empty cell. Calling this on a decided
/// board is wasted work but safe; callers should check [`Board::classify`]
/// first.
pub fn select_move(board: &Board) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), Score)> = None;
    for (row, col) in board.empty_cells() {
        let child = board
            .place(row, col, Player::O)
            .expect("empty-cell enumeration only yields legal placements");
        let value = evaluate(&child, false);
        if best.is_none_or(|(_, seen)| value > seen) {
            best = Some(((row, col), value));
        }
    }
    best.map(|(cell, _)| cell)
}

/// Choose O's best move and commit it to the live board.
///
/// Returns the committed coordinate, or `None` when no move exists.
pub fn best_move(board: &mut Board) -> Option<(usize, usize)> {
    let (row, col) = select_move(board)?;
    *board = board
        .place(row, col, Player::O)
        .expect("selected move targets an empty cell");
    debug!(row, col, "engine move committed");
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        let o_win = Board::from_string("OOO/XX./X..").unwrap();
        assert_eq!(evaluate(&o_win, true), Score::Win);
        assert_eq!(evaluate(&o_win, false), Score::Win);

        let x_win = Board::from_string("XXX/OO./...").unwrap();
        assert_eq!(evaluate(&x_win, true), Score::Loss);

        let draw = Board::from_string("XOX/XXO/OXO").unwrap();
        assert_eq!(evaluate(&draw, true), Score::Draw);
    }

    #[test]
    fn test_score_ordering() {
        assert!(Score::Loss < Score::Draw);
        assert!(Score::Draw < Score::Win);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_string("OO./XX./...").unwrap();
        assert_eq!(select_move(&board), Some((0, 2)));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let board = Board::from_string("XX./.O./...").unwrap();
        assert_eq!(select_move(&board), Some((0, 2)));
    }

    #[test]
    fn test_no_depth_discount() {
        // O can win immediately or stall; the position value is Win either way
        let board = Board::from_string("OO./XX./...").unwrap();
        assert_eq!(evaluate(&board, true), Score::Win);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert_eq!(select_move(&board), None);

        let mut live = board;
        assert_eq!(best_move(&mut live), None);
        assert_eq!(live, board);
    }

    #[test]
    fn test_best_move_commits_to_live_board() {
        let mut board = Board::from_string("OO./XX./...").unwrap();
        let committed = best_move(&mut board);
        assert_eq!(committed, Some((0, 2)));
        assert_eq!(board.get(0, 2), crate::board::Cell::O);
        assert_eq!(board.classify(), Outcome::Win(Player::O));
    }

    #[test]
    fn test_select_move_leaves_board_unchanged() {
        let board = Board::from_string("X.O/.X./...").unwrap();
        let snapshot = board;
        let _ = select_move(&board);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_searches_even_on_decided_boards() {
        // X already won; selection still scans the remaining empty cells
        let board = Board::from_string("XXX/OO./...").unwrap();
        assert!(select_move(&board).is_some());
    }
}
