//! Game state and move application.
//!
//! The state supplied by the match runner is treated as read-only by the engine:
//! every exploratory move is played on a clone.

use crate::game::board::Board;
use crate::game::cell::Player;
use crate::game::game_move::Move;
use crate::game::get_legal_moves::get_legal_moves;
use crate::game::macro_board::{MacroBoard, SubBoardStatus};

/// Time budget assumed when the runner does not provide one.
pub const DEFAULT_TIME_PER_MOVE: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    macro_board: MacroBoard,
    move_number: u32,
    round_number: u32,
    time_per_move: u32,
}

impl GameState {
    /// A fresh game: empty board, every sub-board open, X to move.
    pub fn new(time_per_move: u32) -> Self {
        Self {
            board: Board::empty(),
            macro_board: MacroBoard::all_active(),
            move_number: 0,
            round_number: 0,
            time_per_move,
        }
    }

    /// Assembles a state handed over by the match runner.
    pub fn from_parts(
        board: Board,
        macro_board: MacroBoard,
        move_number: u32,
        round_number: u32,
        time_per_move: u32,
    ) -> Self {
        Self {
            board,
            macro_board,
            move_number,
            round_number,
            time_per_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn macro_board(&self) -> &MacroBoard {
        &self.macro_board
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn time_per_move(&self) -> u32 {
        self.time_per_move
    }

    pub fn set_time_per_move(&mut self, time_per_move: u32) {
        self.time_per_move = time_per_move;
    }

    /// Player to move, derived from the move number parity.
    pub fn current_player(&self) -> Player {
        Player::to_move(self.move_number)
    }

    /// A move is legal when its cell is empty and its sub-board is active.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.board.is_empty_at(mv) && self.macro_board.is_active(mv.sub_board())
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        get_legal_moves(self)
    }

    /// Plays `mv` for the player to move.
    ///
    /// # Panics
    /// Panics if the move is not legal.
    pub fn apply_move(&mut self, mv: Move) {
        assert!(self.is_legal(mv), "illegal move {mv} at move {}", self.move_number);
        let player = self.current_player();
        self.play(mv, player);
    }

    /// Places `player`'s mark at `mv` and runs the usual bookkeeping, whoever is
    /// to move. Used for "what if they played here" probes.
    pub(crate) fn apply_move_as(&mut self, mv: Move, player: Player) {
        assert!(self.is_legal(mv), "illegal move {mv} at move {}", self.move_number);
        self.play(mv, player);
    }

    fn play(&mut self, mv: Move, player: Player) {
        self.board.place(mv, player);

        let idx = mv.sub_board();
        if let Some(status) = self.board.sub_board_resolution(idx) {
            self.macro_board.resolve(idx, status);
        }
        self.macro_board.activate_target(mv.target_sub_board());

        self.move_number += 1;
    }

    /// Winner of the overall game, judged on the meta-board.
    pub fn winner(&self) -> Option<Player> {
        self.macro_board.winner()
    }

    pub fn has_won(&self, player: Player) -> bool {
        self.macro_board.has_won(player)
    }

    /// No legal moves left, or somebody has won the game.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.legal_moves().is_empty()
    }

    /// Every sub-board is either won or drawn.
    pub fn is_fully_resolved(&self) -> bool {
        self.macro_board.all_resolved()
    }

    pub fn sub_board_status(&self, mv: Move) -> SubBoardStatus {
        self.macro_board.get(mv.sub_board())
    }

    /// Same position mirrored along the main diagonal.
    pub fn transposed(&self) -> Self {
        Self {
            board: self.board.transposed(),
            macro_board: self.macro_board.transposed(),
            ..self.clone()
        }
    }

    /// Same position mirrored along the anti-diagonal.
    pub fn anti_transposed(&self) -> Self {
        Self {
            board: self.board.anti_transposed(),
            macro_board: self.macro_board.anti_transposed(),
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_PER_MOVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cell::Cell;
    use crate::game::game_move::SubBoardIndex;

    #[test]
    fn test_new_game_has_81_legal_moves() {
        let state = GameState::default();
        assert_eq!(state.legal_moves().len(), 81);
        assert_eq!(state.current_player(), Player::X);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_apply_move_places_mark_and_sends_opponent() {
        let mut state = GameState::default();
        state.apply_move(Move::new(4, 4));

        assert_eq!(state.board().get(Move::new(4, 4)), Cell::Taken(Player::X));
        assert_eq!(state.move_number(), 1);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(
            state.macro_board().active_sub_boards(),
            vec![SubBoardIndex::CENTER]
        );
        assert_eq!(state.legal_moves().len(), 8);
    }

    fn only_active(idx: SubBoardIndex) -> MacroBoard {
        let mut grid = MacroBoard::all_active();
        grid.activate_target(idx);
        grid
    }

    #[test]
    fn test_winning_a_sub_board_resolves_it() {
        let mut board = Board::empty();
        board.place(Move::new(0, 0), Player::X);
        board.place(Move::new(1, 0), Player::X);
        board.place(Move::new(4, 4), Player::O);
        board.place(Move::new(8, 8), Player::O);
        let mut state =
            GameState::from_parts(board, only_active(SubBoardIndex::new(0, 0)), 4, 2, 1000);

        state.apply_move(Move::new(2, 0));

        assert_eq!(
            state.macro_board().get(SubBoardIndex::new(0, 0)),
            SubBoardStatus::Won(Player::X)
        );
        assert_eq!(
            state.macro_board().active_sub_boards(),
            vec![SubBoardIndex::new(2, 0)]
        );
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_target_resolved_opens_all_unresolved() {
        let mut board = Board::empty();
        board.place(Move::new(1, 0), Player::X);
        board.place(Move::new(2, 0), Player::X);
        board.place(Move::new(4, 4), Player::O);
        board.place(Move::new(8, 8), Player::O);
        let mut state =
            GameState::from_parts(board, only_active(SubBoardIndex::new(0, 0)), 4, 2, 1000);

        // (0, 0) points back at its own sub-board, which it has just won.
        state.apply_move(Move::new(0, 0));

        let active = state.macro_board().active_sub_boards();
        assert_eq!(active.len(), 8);
        assert!(!active.contains(&SubBoardIndex::new(0, 0)));
        assert_eq!(state.round_number(), 2);
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn test_apply_illegal_move_panics() {
        let mut state = GameState::default();
        state.apply_move(Move::new(4, 4));
        state.apply_move(Move::new(0, 0));
    }

    #[test]
    fn test_apply_move_as_ignores_turn_order() {
        let mut state = GameState::default();
        state.apply_move_as(Move::new(2, 2), Player::O);
        assert_eq!(state.board().get(Move::new(2, 2)), Cell::Taken(Player::O));
        assert_eq!(state.move_number(), 1);
    }

    #[test]
    fn test_transposed_state_keeps_counters() {
        let mut state = GameState::new(300);
        state.apply_move(Move::new(1, 5));
        let t = state.transposed();
        assert_eq!(t.board().get(Move::new(5, 1)), Cell::Taken(Player::X));
        assert_eq!(t.move_number(), 1);
        assert_eq!(t.time_per_move(), 300);
        assert_eq!(
            t.macro_board().active_sub_boards(),
            vec![SubBoardIndex::new(2, 1)]
        );
    }

    #[test]
    fn test_anti_transposed_state_keeps_counters() {
        let mut state = GameState::new(300);
        state.apply_move(Move::new(1, 5));
        let t = state.anti_transposed();
        assert_eq!(t.board().get(Move::new(3, 7)), Cell::Taken(Player::X));
        assert_eq!(t.move_number(), 1);
        assert_eq!(t.time_per_move(), 300);
        // (1, 5) sends O to [1, 2]; the mirror of [1, 2] is [0, 1].
        assert_eq!(
            t.macro_board().active_sub_boards(),
            vec![SubBoardIndex::new(0, 1)]
        );
    }
}
