//! End-to-end decisions through `UtttBot`.

use uttt_bot::{DecisionStage, GameState, MCTSHyperparameters, Move, UtttBot};

const DEFAULT_BUDGET_TIME: u32 = 1000;

fn parse(text: &str) -> GameState {
    text.parse().unwrap()
}

/// X holds two cells of the top row of the top-left sub-board, which is active.
fn two_in_a_row(move_number: u32) -> GameState {
    parse(&format!(
        "
        X X . | . . . | . . .
        . . . | . . . | . . .
        . . . | . . . | . . .
        ------+-------+------
        . . . | . . . | . . .
        . . . | . O . | . . .
        . . . | . . . | . . .
        ------+-------+------
        . . . | . . . | . . .
        . . . | . . . | . . .
        . . . | . . . | . . O
        active 0 0
        move {move_number}
        "
    ))
}

/// X to move in the empty top-left sub-board. Sending O to the bottom-right
/// sub-board with (2, 2) leaves X two threats there; (1, 0) leaves only one.
fn fork_position() -> GameState {
    parse(
        "
        . . . | X X . | . . O
        . . . | . . . | . . .
        . . . | . . . | . . .
        ------+-------+------
        . . . | O . . | . . .
        O . . | . . O | . . .
        . . . | . . . | . . .
        ------+-------+------
        . . . | . . . | X X .
        . . . | . . . | X . .
        . . . | . O . | . . .
        active 0 0
        move 10
        ",
    )
}

fn quiet_position(time_per_move: u32) -> GameState {
    let mut state = GameState::new(time_per_move);
    state.apply_move(Move::new(4, 4));
    state.apply_move(Move::new(3, 3));
    state
}

#[test]
fn test_opening_takes_the_absolute_center() {
    let state = GameState::default();
    let mut bot = UtttBot::from_seed(&state, 0);
    assert_eq!(bot.select_move(&state), Some(Move::new(4, 4)));
}

#[test]
fn test_immediate_win() {
    let state = two_in_a_row(4);
    let mut bot = UtttBot::from_seed(&state, 0);
    let decision = bot.decide(&state).unwrap();
    assert_eq!(decision.chosen, Move::new(2, 0));
    assert_eq!(decision.stage, DecisionStage::ImmediateWin);
}

#[test]
fn test_block() {
    let state = two_in_a_row(5);
    let mut bot = UtttBot::from_seed(&state, 0);
    let decision = bot.decide(&state).unwrap();
    assert_eq!(decision.chosen, Move::new(2, 0));
    assert_eq!(decision.stage, DecisionStage::ImmediateBlock);
}

#[test]
fn test_fork_beats_single_threat() {
    let state = fork_position();
    let mut bot = UtttBot::from_seed(&state, 0);
    let decision = bot.decide(&state).unwrap();
    assert_eq!(decision.chosen, Move::new(2, 2));
    assert_eq!(decision.stage, DecisionStage::Fork);
}

#[test]
fn test_input_state_is_never_mutated() {
    for state in [
        GameState::default(),
        two_in_a_row(4),
        fork_position(),
        quiet_position(60),
    ] {
        let before = state.clone();
        let mut bot = UtttBot::from_seed(&state, 5);
        bot.select_move(&state);
        assert_eq!(state, before);
    }
}

#[test]
fn test_selecting_twice_is_idempotent_for_heuristics() {
    for state in [GameState::default(), two_in_a_row(4), two_in_a_row(5), fork_position()] {
        let mut bot = UtttBot::from_seed(&state, 8);
        let first = bot.select_move(&state);
        let second = bot.select_move(&state);
        assert_eq!(first, second);
    }
}

#[test]
fn test_search_is_reproducible_with_a_seed() {
    let state = quiet_position(DEFAULT_BUDGET_TIME);
    let params = MCTSHyperparameters {
        base_simulation_count: 200,
        ..MCTSHyperparameters::default()
    };

    let mut first = UtttBot::from_seed(&state, 1234).with_hyperparameters(params.clone());
    let mut second = UtttBot::from_seed(&state, 1234).with_hyperparameters(params);

    let a = first.decide(&state).unwrap();
    let b = second.decide(&state).unwrap();
    assert_eq!(a.stage, DecisionStage::Search);
    assert_eq!(a.chosen, b.chosen);
    assert_eq!(a.search, b.search);
}

#[test]
fn test_search_result_is_legal() {
    let state = quiet_position(100);
    let mut bot = UtttBot::from_seed(&state, 77);
    let decision = bot.decide(&state).unwrap();
    assert_eq!(decision.stage, DecisionStage::Search);
    assert!(state.is_legal(decision.chosen));
    let search = decision.search.unwrap();
    assert_eq!(search.simulations_run, 50);
    assert!(!search.used_fallback);
}

#[test]
fn test_tiny_budget_still_returns_a_legal_move() {
    let state = quiet_position(1);
    let mut bot = UtttBot::from_seed(&state, 3);
    let decision = bot.decide(&state).unwrap();
    assert!(state.is_legal(decision.chosen));
    assert!(decision.search.unwrap().used_fallback);
}

#[test]
fn test_no_move_on_a_full_board() {
    // Every sub-board is filled without a line, so nothing is left to play.
    let state = parse(&format!(
        "{}active all",
        "XOXOXOXOX\nXOXOXOXOX\nOXOXOXOXO\n".repeat(3)
    ));
    assert!(state.legal_moves().is_empty());
    assert!(state.winner().is_none());
    let mut bot = UtttBot::from_seed(&state, 0);
    assert_eq!(bot.decide(&state), None);
    assert_eq!(bot.select_move(&state), None);
}
