//! Opening book and early-game preferences.

use crate::game::cell::Player;
use crate::game::game_move::{Move, SUB_SIZE};
use crate::game::game_state::GameState;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Centre of the centre sub-board.
pub const CENTER_CELL: (usize, usize) = (4, 4);

/// Centres of the eight outer sub-boards, tried when the absolute centre is gone.
pub const SUB_BOARD_CENTERS: [(usize, usize); 8] = [
    (1, 1),
    (4, 1),
    (7, 1),
    (1, 4),
    (7, 4),
    (1, 7),
    (4, 7),
    (7, 7),
];

/// The four corners of every sub-board, sub-board by sub-board.
#[rustfmt::skip]
pub const CORNER_CELLS: [(usize, usize); 36] = [
    (0, 0), (2, 0), (0, 2), (2, 2),
    (3, 0), (5, 0), (3, 2), (5, 2),
    (6, 0), (8, 0), (6, 2), (8, 2),
    (0, 3), (2, 3), (0, 5), (2, 5),
    (3, 3), (5, 3), (3, 5), (5, 5),
    (6, 3), (8, 3), (6, 5), (8, 5),
    (0, 6), (2, 6), (0, 8), (2, 8),
    (3, 6), (5, 6), (3, 8), (5, 8),
    (6, 6), (8, 6), (6, 8), (8, 8),
];

/// Local positions of the edge midpoints of a sub-board.
pub const MIDDLE_EDGES: [(usize, usize); 4] = [(1, 0), (0, 1), (2, 1), (1, 2)];

/// First preferred cell that is currently legal, otherwise a random legal move.
fn preferred_or_random<R: Rng + ?Sized>(
    moves: &[Move],
    preferences: &[(usize, usize)],
    rng: &mut R,
) -> Option<Move> {
    preferences
        .iter()
        .map(|&(x, y)| Move::new(x, y))
        .find(|mv| moves.contains(mv))
        .or_else(|| moves.choose(rng).copied())
}

/// Opening choice at move 0: the absolute centre, then a sub-board centre.
pub fn opening_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    let (cx, cy) = CENTER_CELL;
    let center = Move::new(cx, cy);
    if moves.contains(&center) {
        return Some(center);
    }
    preferred_or_random(moves, &SUB_BOARD_CENTERS, rng)
}

pub fn corner_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    preferred_or_random(moves, &CORNER_CELLS, rng)
}

pub fn is_middle_edge(mv: Move) -> bool {
    MIDDLE_EDGES.contains(&(mv.x() % SUB_SIZE, mv.y() % SUB_SIZE))
}

/// First move that is not an edge midpoint, or the first move at all.
pub fn avoid_middle_edges(moves: &[Move]) -> Option<Move> {
    moves
        .iter()
        .copied()
        .find(|&mv| !is_middle_edge(mv))
        .or_else(|| moves.first().copied())
}

/// Early-game reply: grab a corner when `opponent` took the centre cell,
/// otherwise stay off the edge midpoints.
pub fn early_game_move<R: Rng + ?Sized>(
    state: &GameState,
    opponent: Player,
    rng: &mut R,
) -> Option<Move> {
    let moves = state.legal_moves();
    let (cx, cy) = CENTER_CELL;
    if state.board().get(Move::new(cx, cy)).is_owned_by(opponent) {
        if let Some(mv) = corner_move(&moves, rng) {
            return Some(mv);
        }
    }
    avoid_middle_edges(&moves)
}
