use crate::board::Board;
use crate::error::EngineError;
use crate::log;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, GameStatus, Mark};

const WIN_SCORE: i32 = 10;

/// Minimax result for one node: the best score reachable and the move that
/// reaches it. Leaves carry no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub index: Option<usize>,
    pub score: i32,
}

pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    mark: Mark,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    let available_moves = board.legal_moves();
    if available_moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    let index = match difficulty {
        Difficulty::Easy => random_move(&available_moves, rng),
        Difficulty::Medium => calculate_medium_move(board, mark, &available_moves, rng),
        Difficulty::Hard => best_move(board, mark),
    }
    .ok_or(EngineError::NoLegalMoves)?;

    log!("{} ({}) picked cell {}", mark, difficulty, index);
    Ok(index)
}

pub fn random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.pick(available_moves)
}

fn calculate_medium_move(
    board: &Board,
    mark: Mark,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    find_winning_move(board, mark)
        .or_else(|| find_winning_move(board, mark.opponent()))
        .or_else(|| random_move(available_moves, rng))
}

/// First empty cell, in ascending order, that completes a line for `mark`.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board.legal_moves().into_iter().find(|&index| {
        board
            .apply_move(index, mark)
            .is_ok_and(|next| next.is_win(mark))
    })
}

/// Index of the move chosen by a full-depth minimax search for `to_move`.
pub fn best_move(board: &Board, to_move: Mark) -> Option<usize> {
    minimax(board, to_move).index
}

/// Exhaustive search to terminal boards. O maximizes, X minimizes.
///
/// Ties keep the first move found, so equal scores resolve to the lowest index.
pub fn minimax(board: &Board, to_move: Mark) -> ScoredMove {
    match board.status() {
        GameStatus::Won(Mark::X) => return leaf(-WIN_SCORE),
        GameStatus::Won(Mark::O) => return leaf(WIN_SCORE),
        GameStatus::Draw => return leaf(0),
        GameStatus::InProgress => {}
    }

    let maximizing = to_move == Mark::O;
    let mut best = ScoredMove {
        index: None,
        score: if maximizing { i32::MIN } else { i32::MAX },
    };

    for index in board.legal_moves() {
        let Ok(next) = board.apply_move(index, to_move) else {
            continue;
        };
        let score = minimax(&next, to_move.opponent()).score;

        let improves = if maximizing {
            score > best.score
        } else {
            score < best.score
        };

        if improves {
            best = ScoredMove {
                index: Some(index),
                score,
            };
        }
    }

    best
}

fn leaf(score: i32) -> ScoredMove {
    ScoredMove { index: None, score }
}
