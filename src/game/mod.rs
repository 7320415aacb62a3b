pub mod board;
pub mod cell;
pub mod game_move;
pub mod game_state;
pub mod get_legal_moves;
pub mod macro_board;
pub mod notation;
pub mod simulate_game;
