use crate::game::game_move::{Move, BOARD_SIZE};
use crate::game::game_state::GameState;

/// Returns every legal move in the board's natural order: `x` outer, `y` inner.
/// Expansion and all first-match heuristics depend on this order.
pub fn get_legal_moves(state: &GameState) -> Vec<Move> {
    (0..BOARD_SIZE)
        .flat_map(|x| (0..BOARD_SIZE).map(move |y| Move::new(x, y)))
        .filter(|&mv| state.is_legal(mv))
        .collect()
}
