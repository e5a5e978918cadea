//! Thin game controller: alternates turns and consults the solver for O

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    board::{Board, Outcome, Player},
    solver,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// A live game: the only owner of a mutable board.
///
/// X (the human side) moves first; [`Game::play_engine`] consults the solver
/// when it is O's turn. The controller contains no search logic of its own —
/// it alternates turns, records history, and caches the terminal status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Outcome,
}

impl Game {
    /// Create a new game with an empty board and X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            moves: Vec::new(),
            outcome: Outcome::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Play the current player's mark at `(row, col)`.
    ///
    /// Reclassifies the board, records the move, and alternates the turn.
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over or the cell is occupied or
    /// out of bounds.
    pub fn play(&mut self, row: usize, col: usize) -> crate::Result<Outcome> {
        if self.outcome.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let next = self.board.place(row, col, self.to_move)?;
        self.moves.push(Move {
            row,
            col,
            player: self.to_move,
        });
        self.board = next;
        self.outcome = self.board.classify();
        if self.outcome.is_terminal() {
            debug!(outcome = ?self.outcome, plies = self.moves.len(), "game over");
        }
        self.to_move = self.to_move.opponent();
        Ok(self.outcome)
    }

    /// Let the engine take its turn.
    ///
    /// Returns the coordinate the engine committed, or `Ok(None)` when no
    /// empty cell remains.
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over or it is not O's turn —
    /// the solver always searches assuming O is about to move, so the
    /// controller refuses to consult it out of turn.
    pub fn play_engine(&mut self) -> crate::Result<Option<(usize, usize)>> {
        if self.outcome.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if self.to_move != Player::O {
            return Err(crate::Error::OutOfTurn);
        }

        let Some((row, col)) = solver::select_move(&self.board) else {
            return Ok(None);
        };
        self.play(row, col)?;
        Ok(Some((row, col)))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_player_alternation() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);

        game.play(0, 0).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(0, 0), Cell::X);

        game.play(1, 1).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.board().get(1, 1), Cell::O);

        assert_eq!(game.moves().len(), 2);
        assert_eq!(
            game.moves()[0],
            Move {
                row: 0,
                col: 0,
                player: Player::X
            }
        );
    }

    #[test]
    fn test_play_rejects_occupied_cell() {
        let mut game = Game::new();
        game.play(0, 0).unwrap();
        assert!(game.play(0, 0).is_err());
        // Failed move neither advances the turn nor records history
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_play_after_game_over_fails() {
        let mut game = Game::new();
        game.play(0, 0).unwrap(); // X
        game.play(1, 0).unwrap(); // O
        game.play(0, 1).unwrap(); // X
        game.play(1, 1).unwrap(); // O
        let outcome = game.play(0, 2).unwrap(); // X wins top row
        assert_eq!(outcome, Outcome::Win(Player::X));
        assert!(game.is_over());

        assert!(matches!(game.play(2, 2), Err(crate::Error::GameOver)));
        assert!(matches!(game.play_engine(), Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_play_engine_rejects_x_turn() {
        let mut game = Game::new();
        assert!(matches!(game.play_engine(), Err(crate::Error::OutOfTurn)));
    }

    #[test]
    fn test_engine_blocks_in_live_game() {
        let mut game = Game::new();
        game.play(0, 0).unwrap(); // X
        game.play(1, 1).unwrap(); // O takes center
        game.play(0, 1).unwrap(); // X threatens the top row
        let committed = game.play_engine().unwrap();
        assert_eq!(committed, Some((0, 2)));
        assert_eq!(game.board().get(0, 2), Cell::O);
    }

    #[test]
    fn test_greedy_human_never_beats_engine() {
        // X always grabs the first empty cell; the engine must not lose
        let mut game = Game::new();
        while !game.is_over() {
            match game.to_move() {
                Player::X => {
                    let (row, col) = game.board().empty_cells()[0];
                    game.play(row, col).unwrap();
                }
                Player::O => {
                    game.play_engine().unwrap();
                }
            }
        }
        assert_ne!(game.outcome(), Outcome::Win(Player::X));
    }
}
