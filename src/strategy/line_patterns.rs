//! Static two-in-a-row detection.
//!
//! These checks only read the board. The simulated variant lives in
//! [`crate::strategy::tactics`]; both are kept on purpose since they answer
//! slightly different questions.

use crate::game::board::Board;
use crate::game::cell::{Cell, Player};
use crate::game::game_move::{Move, SubBoardIndex};
use crate::game::game_state::GameState;

/// Whether claiming `mv` would give `player` three in a row inside its sub-board:
/// the two other cells of the move's row, column, or (when the move sits on one)
/// diagonal already belong to `player`.
pub fn completes_line(board: &Board, mv: Move, player: Player) -> bool {
    let idx = mv.sub_board();
    let (lx, ly) = mv.local();
    let owned = |x: usize, y: usize| board.get(idx.cell(x, y)).is_owned_by(player);

    let row = (0..3).filter(|&i| i != lx && owned(i, ly)).count();
    if row == 2 {
        return true;
    }

    let col = (0..3).filter(|&i| i != ly && owned(lx, i)).count();
    if col == 2 {
        return true;
    }

    if lx == ly {
        let diag = (0..3).filter(|&i| i != lx && owned(i, i)).count();
        if diag == 2 {
            return true;
        }
    }

    if lx + ly == 2 {
        let anti = (0..3).filter(|&i| i != lx && owned(i, 2 - i)).count();
        if anti == 2 {
            return true;
        }
    }

    false
}

/// First legal move in an active sub-board that completes a line for `player`.
/// Called for the mover to find a win, and for the opponent to find a block.
pub fn find_immediate_win_or_block(state: &GameState, player: Player) -> Option<Move> {
    state
        .legal_moves()
        .into_iter()
        .filter(|&mv| state.macro_board().is_active(mv.sub_board()))
        .find(|&mv| completes_line(state.board(), mv, player))
}

/// The empty cell of a line holding two of `player`'s marks and one empty cell.
fn two_plus_empty(board: &Board, line: &[Move; 3], player: Player) -> Option<Move> {
    let mut mine = 0;
    let mut empty = None;
    let mut empties = 0;
    for &mv in line {
        match board.get(mv) {
            Cell::Taken(p) if p == player => mine += 1,
            Cell::Empty => {
                empties += 1;
                empty = Some(mv);
            }
            Cell::Taken(_) => {}
        }
    }
    if mine == 2 && empties == 1 {
        empty
    } else {
        None
    }
}

/// Scans the sub-boards (`x` outer, `y` inner; rows, columns, then diagonals
/// inside each) for a "two plus empty" line of `player` whose empty cell is
/// currently legal. With `active_only` the scan is limited to active sub-boards.
pub fn find_two_in_line_pattern(
    state: &GameState,
    player: Player,
    active_only: bool,
) -> Option<Move> {
    let board = state.board();
    SubBoardIndex::all()
        .filter(|&idx| !active_only || state.macro_board().is_active(idx))
        .find_map(|idx| {
            idx.lines()
                .iter()
                .filter_map(|line| two_plus_empty(board, line, player))
                .find(|&mv| state.is_legal(mv))
        })
}

/// Which pass of the pattern scan produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Win,
    Block,
    Setup,
}

/// Pattern moves in priority order: our line in an active sub-board, then the
/// opponent's, then our line anywhere.
pub fn find_pattern_move(
    state: &GameState,
    me: Player,
    opponent: Player,
) -> Option<(Move, PatternKind)> {
    if let Some(mv) = find_two_in_line_pattern(state, me, true) {
        return Some((mv, PatternKind::Win));
    }
    if let Some(mv) = find_two_in_line_pattern(state, opponent, true) {
        return Some((mv, PatternKind::Block));
    }
    find_two_in_line_pattern(state, me, false).map(|mv| (mv, PatternKind::Setup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn parse(rows: &str, directives: &str) -> GameState {
        format!("{rows}\n{directives}").parse().unwrap()
    }

    const TOP_LEFT_ROW: &str = "
        X X . | . . . | . . .
        . . . | . . . | . . .
        . . . | . . . | . . .
        . . . | . . . | . . .
        . . . | . O . | . . .
        . . . | . . . | . . .
        . . . | . . . | . . .
        . . . | . . . | . . .
        . . . | . . . | . . O
    ";

    #[test]
    fn test_completes_line_row_column_and_diagonals() {
        let state = parse(TOP_LEFT_ROW, "active 0 0");
        let board = state.board();
        assert!(completes_line(board, Move::new(2, 0), Player::X));
        assert!(!completes_line(board, Move::new(2, 0), Player::O));
        assert!(!completes_line(board, Move::new(1, 1), Player::X));

        let diag = parse(
            "X . . . . . . . .\n. . . . . . . . .\n. . X . . . . . .\n.........\n.........\n.........\n.........\n.........\n.........",
            "active 0 0",
        );
        assert!(completes_line(diag.board(), Move::new(1, 1), Player::X));

        let anti = parse(
            ". . O . . . . . .\n. O . . . . . . .\n.........\n.........\n.........\n.........\n.........\n.........\n.........",
            "active 0 0",
        );
        assert!(completes_line(anti.board(), Move::new(0, 2), Player::O));
        // (1, 0) is not on a diagonal, so the anti-diagonal does not count for it.
        assert!(!completes_line(anti.board(), Move::new(1, 0), Player::O));
    }

    #[test]
    fn test_immediate_win_and_block() {
        let state = parse(TOP_LEFT_ROW, "active 0 0");
        assert_eq!(
            find_immediate_win_or_block(&state, Player::X),
            Some(Move::new(2, 0))
        );
        assert_eq!(find_immediate_win_or_block(&state, Player::O), None);
    }

    #[test]
    fn test_immediate_ignores_inactive_sub_boards() {
        let state = parse(TOP_LEFT_ROW, "active 2 2");
        assert_eq!(find_immediate_win_or_block(&state, Player::X), None);
    }

    #[test]
    fn test_pattern_scan_respects_activity() {
        let state = parse(TOP_LEFT_ROW, "active 0 0");
        assert_eq!(
            find_two_in_line_pattern(&state, Player::X, true),
            Some(Move::new(2, 0))
        );
        assert_matches!(
            find_pattern_move(&state, Player::X, Player::O),
            Some((mv, PatternKind::Win)) if mv == Move::new(2, 0)
        );

        let elsewhere = parse(TOP_LEFT_ROW, "active 1 1");
        assert_eq!(find_two_in_line_pattern(&elsewhere, Player::X, true), None);
        // The completing cell is not legal, so even the unrestricted scan skips it.
        assert_eq!(find_two_in_line_pattern(&elsewhere, Player::X, false), None);
        assert_eq!(find_pattern_move(&elsewhere, Player::X, Player::O), None);
    }

    #[test]
    fn test_pattern_block_for_opponent_line() {
        let state = parse(TOP_LEFT_ROW, "active 0 0");
        assert_matches!(
            find_pattern_move(&state, Player::O, Player::X),
            Some((mv, PatternKind::Block)) if mv == Move::new(2, 0)
        );
    }

    #[test]
    fn test_blocked_line_is_not_a_pattern() {
        let state = parse(
            "X X O . . . . . .\n.........\n.........\n.........\n.........\n.........\n.........\n.........\n.........",
            "active 0 0",
        );
        assert_eq!(find_two_in_line_pattern(&state, Player::X, true), None);
    }
}
