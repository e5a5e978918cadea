//! Exhaustive adversarial playout: the engine must never lose
//!
//! At every X turn all replies are explored; at every O turn the engine's
//! committed choice is followed. Covering every X line of play subsumes any
//! single adversarial opponent, including one maximizing X's score.

use noughts::{Board, Outcome, Player, solver};

fn assert_never_loses(board: Board, to_move: Player) {
    match board.classify() {
        Outcome::Win(Player::X) => panic!("engine lost the position:\n{board}"),
        Outcome::Win(Player::O) | Outcome::Draw => return,
        Outcome::Ongoing => {}
    }

    match to_move {
        Player::O => {
            let mut next = board;
            solver::best_move(&mut next).expect("ongoing position has a move");
            assert_never_loses(next, Player::X);
        }
        Player::X => {
            for (row, col) in board.empty_cells() {
                let next = board
                    .place(row, col, Player::X)
                    .expect("empty cell is a legal placement");
                assert_never_loses(next, Player::O);
            }
        }
    }
}

#[test]
fn engine_never_loses_when_opponent_opens() {
    assert_never_loses(Board::new(), Player::X);
}

#[test]
fn engine_never_loses_when_engine_opens() {
    assert_never_loses(Board::new(), Player::O);
}
