//! One-ply look-ahead tactics: simulated wins, blocks and forks.

use crate::game::cell::Player;
use crate::game::game_move::Move;
use crate::game::game_state::GameState;

/// Whether `player` claiming `mv` wins the sub-board the move lands in.
/// The check plays the move on a scratch copy and inspects the resulting cells,
/// so any completed line counts, not only the ones through a "two plus empty" scan.
pub fn is_winning_move(state: &GameState, mv: Move, player: Player) -> bool {
    let mut scratch = state.clone();
    scratch.apply_move_as(mv, player);
    scratch.board().has_line(mv.sub_board(), player)
}

/// Number of legal moves in `state` that would immediately win a sub-board
/// for `player`.
pub fn count_winning_threats(state: &GameState, player: Player) -> usize {
    state
        .legal_moves()
        .into_iter()
        .filter(|&mv| is_winning_move(state, mv, player))
        .count()
}

/// First legal move after which `player` would hold at least two
/// sub-board-winning follow-ups among the resulting legal moves.
pub fn find_fork_move(state: &GameState, player: Player) -> Option<Move> {
    state.legal_moves().into_iter().find(|&mv| {
        let mut scratch = state.clone();
        scratch.apply_move_as(mv, player);
        count_winning_threats(&scratch, player) >= 2
    })
}

/// Which tactic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacticKind {
    Win,
    Block,
    Fork,
}

/// Simulated win for `me`, then a simulated win for `opponent` to block, then a fork.
pub fn find_tactical_move(
    state: &GameState,
    me: Player,
    opponent: Player,
) -> Option<(Move, TacticKind)> {
    let moves = state.legal_moves();

    if let Some(&mv) = moves.iter().find(|&&mv| is_winning_move(state, mv, me)) {
        return Some((mv, TacticKind::Win));
    }
    if let Some(&mv) = moves
        .iter()
        .find(|&&mv| is_winning_move(state, mv, opponent))
    {
        return Some((mv, TacticKind::Block));
    }
    find_fork_move(state, me).map(|mv| (mv, TacticKind::Fork))
}
