//! Board representation and terminal-state classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
///
/// `X` is the human side and moves first in a standard game; `O` is the
/// engine side the solver maximizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Result of classifying a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

impl Outcome {
    /// Whether the game has ended (win or draw)
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// The 3x3 grid, addressed by `(row, col)` with both indices in `0..3`.
///
/// Only 9 bytes, so it implements `Copy`. The solver simulates on copies;
/// a live board changes only when a move is committed through
/// [`Board::place`], so exploration can never leave it in an intermediate
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(crate) cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Parse a board from 9 cell characters (`.`/`X`/`O`, case-insensitive).
    ///
    /// Whitespace and `/` row separators are ignored, so `"XX./.O./..."` and
    /// a three-line literal both parse.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cell characters remain after filtering
    /// or any character is not a valid cell representation.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|&c| !c.is_whitespace() && c != '/')
            .collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if either index is 3 or more.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < 3 && col < 3, "cell ({row}, {col}) out of range");
        self.cells[row * 3 + col]
    }

    /// Check if the cell at `(row, col)` is empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Place `player`'s mark at `(row, col)` and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns error if the coordinate is out of bounds or the cell is
    /// already occupied.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, row: usize, col: usize, player: Player) -> crate::Result<Board> {
        if row >= 3 || col >= 3 {
            return Err(crate::Error::OutOfBounds { row, col });
        }
        if self.cells[row * 3 + col] != Cell::Empty {
            return Err(crate::Error::CellOccupied { row, col });
        }

        let mut next = *self;
        next.cells[row * 3 + col] = player.to_cell();
        Ok(next)
    }

    /// All empty coordinates in row-major order (row ascending, then column).
    ///
    /// The order is part of the contract: the solver's tie-break keeps the
    /// first optimal cell this enumeration yields.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| (i / 3, i % 3))
            .collect()
    }

    /// Check if no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Whether `player` holds a complete row, column, or diagonal
    pub fn has_line(&self, player: Player) -> bool {
        lines::has_line(self, player)
    }

    /// Classify the position.
    ///
    /// O's win is checked before X's. Legal alternating play can never
    /// produce both at once, so the precedence is a default, not something
    /// correctness depends on.
    pub fn classify(&self) -> Outcome {
        if self.has_line(Player::O) {
            Outcome::Win(Player::O)
        } else if self.has_line(Player::X) {
            Outcome::Win(Player::X)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Nine-character string key for the position
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.get(row, col).to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
