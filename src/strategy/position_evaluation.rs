//! Static position scoring.
//!
//! The weight table favours sub-board centres (8-10) and corners (5) over edges
//! (1-3). It drives the UCT position bonus, the weighted rollout plies and the
//! static evaluator below.

use crate::game::board::Board;
use crate::game::cell::Player;
use crate::game::game_move::{Move, SubBoardIndex, BOARD_SIZE};
use crate::game::game_state::GameState;

/// Positional weight of every cell, indexed `[x][y]`.
pub const POSITION_WEIGHTS: [[u32; BOARD_SIZE]; BOARD_SIZE] = [
    [5, 1, 5, 1, 8, 1, 5, 1, 5],
    [1, 3, 1, 3, 8, 3, 1, 3, 1],
    [5, 1, 5, 1, 8, 1, 5, 1, 5],
    [1, 3, 1, 3, 8, 3, 1, 3, 1],
    [8, 8, 8, 8, 10, 8, 8, 8, 8],
    [1, 3, 1, 3, 8, 3, 1, 3, 1],
    [5, 1, 5, 1, 8, 1, 5, 1, 5],
    [1, 3, 1, 3, 8, 3, 1, 3, 1],
    [5, 1, 5, 1, 8, 1, 5, 1, 5],
];

pub const CENTER_SUB_BOARD_BONUS: i32 = 500;
pub const CORNER_SUB_BOARD_BONUS: i32 = 300;
pub const WON_SUB_BOARD_SCORE: i32 = 100_000;
pub const NEEDS_BLOCKING_SCORE: i32 = 2_000;

pub fn position_weight(mv: Move) -> u32 {
    POSITION_WEIGHTS[mv.x()][mv.y()]
}

/// Whether `opponent` holds exactly two cells of some line in the sub-board.
pub fn needs_blocking(board: &Board, idx: SubBoardIndex, opponent: Player) -> bool {
    idx.lines().iter().any(|line| {
        line.iter()
            .filter(|&&mv| board.get(mv).is_owned_by(opponent))
            .count()
            == 2
    })
}

/// Heuristic score of `state` from `player`'s point of view. Higher is better.
pub fn evaluate_position(state: &GameState, player: Player) -> i32 {
    let opponent = player.opponent();
    let macro_board = state.macro_board();
    let board = state.board();
    let mut score = 0;

    if macro_board.get(SubBoardIndex::CENTER).winner() == Some(player) {
        score += CENTER_SUB_BOARD_BONUS;
    }
    if SubBoardIndex::CORNERS
        .iter()
        .any(|&idx| macro_board.get(idx).winner() == Some(player))
    {
        score += CORNER_SUB_BOARD_BONUS;
    }

    for idx in SubBoardIndex::all() {
        if macro_board.get(idx).winner() == Some(player) {
            score += WON_SUB_BOARD_SCORE;
        }
        if needs_blocking(board, idx, opponent) {
            score += NEEDS_BLOCKING_SCORE;
        }
    }

    for idx in SubBoardIndex::all() {
        score += idx
            .cells()
            .filter(|&mv| board.get(mv).is_owned_by(player))
            .map(|mv| position_weight(mv) as i32)
            .sum::<i32>();
    }

    score
}
