//! Winning-line analysis for the 3x3 board

use crate::board::{Board, Cell, Player};

/// The 8 winning lines as row-major cell positions (0-8)
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player holds three in a row anywhere on the board
pub fn has_line(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.cells[pos] == target))
}

/// Cells that would complete a line for `player` in one move,
/// in row-major order
pub fn winning_cells(board: &Board, player: Player) -> Vec<(usize, usize)> {
    let mut positions: Vec<usize> = WINNING_LINES
        .iter()
        .filter_map(|line| winning_cell_in_line(board, player, line))
        .collect();
    positions.sort_unstable();
    positions.dedup();
    positions.into_iter().map(|pos| (pos / 3, pos % 3)).collect()
}

/// Find the completing cell in a specific line, if one exists
/// (two own marks and exactly one empty cell)
fn winning_cell_in_line(board: &Board, player: Player, line: &[usize; 3]) -> Option<usize> {
    let target = player.to_cell();
    let mut own = 0;
    let mut empty_pos = None;

    for &pos in line {
        match board.cells[pos] {
            Cell::Empty => {
                if empty_pos.is_some() {
                    return None;
                }
                empty_pos = Some(pos);
            }
            c if c == target => own += 1,
            _ => return None, // Opponent mark in line
        }
    }

    if own == 2 { empty_pos } else { None }
}
