//! Perfect-play tic-tac-toe engine
//!
//! This crate provides:
//! - Board representation with terminal-state classification
//! - Exhaustive minimax search that forces at least a draw for the engine side
//! - A thin game controller alternating human and engine turns
//! - D4 symmetry transforms for board-level invariance analysis
//!
//! The engine plays O; X is the human side and moves first in a standard
//! game. Boards are plain `Copy` values, so search explores copies and a
//! live board only changes when a move is committed.

pub mod board;
pub mod error;
pub mod game;
pub mod lines;
pub mod solver;
pub mod symmetry;

pub use board::{Board, Cell, Outcome, Player};
pub use error::{Error, Result};
pub use game::{Game, Move};
pub use solver::{Score, best_move, evaluate, select_move};
pub use symmetry::D4Transform;
