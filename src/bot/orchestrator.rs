//! Per-match decision engine.
//!
//! A [`UtttBot`] is created once per game from the first state it is asked about;
//! that state's move parity fixes which player the bot is. Every call then walks
//! the same fixed precedence:
//!
//! 1. opening book (move 0)
//! 2. immediate win, then immediate block, in active sub-boards
//! 3. early-game preferences (move < 2)
//! 4. two-in-a-row patterns
//! 5. simulated win, block and fork
//! 6. MCTS

use crate::bot::decision::{Decision, DecisionStage};
use crate::game::cell::Player;
use crate::game::game_move::Move;
use crate::game::game_state::GameState;
use crate::mcts::algorithm::MctsEngine;
use crate::mcts::hyperparameters::MCTSHyperparameters;
use crate::strategy::line_patterns::{find_immediate_win_or_block, find_pattern_move};
use crate::strategy::opening::{early_game_move, opening_move};
use crate::strategy::position_evaluation::evaluate_position;
use crate::strategy::tactics::find_tactical_move;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Which side the bot plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub me: Player,
    pub opponent: Player,
}

impl Identity {
    pub fn new(me: Player) -> Self {
        Self {
            me,
            opponent: me.opponent(),
        }
    }

    /// The bot is whoever is to move in the first state it sees.
    pub fn from_first_state(state: &GameState) -> Self {
        Self::new(Player::to_move(state.move_number()))
    }
}

pub struct UtttBot<R: Rng = StdRng> {
    identity: Identity,
    engine: MctsEngine,
    rng: R,
}

impl UtttBot<StdRng> {
    /// Bot with a seeded generator: the same seed and inputs give the same moves.
    pub fn from_seed(first_state: &GameState, seed: u64) -> Self {
        Self::new(first_state, StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng(first_state: &GameState) -> Self {
        Self::new(first_state, StdRng::from_os_rng())
    }
}

impl<R: Rng> UtttBot<R> {
    pub fn new(first_state: &GameState, rng: R) -> Self {
        Self::with_identity(Identity::from_first_state(first_state), rng)
    }

    pub fn with_identity(identity: Identity, rng: R) -> Self {
        Self {
            identity,
            engine: MctsEngine::default(),
            rng,
        }
    }

    pub fn with_hyperparameters(mut self, params: MCTSHyperparameters) -> Self {
        self.engine = MctsEngine::new(params);
        self
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn hyperparameters(&self) -> &MCTSHyperparameters {
        self.engine.hyperparameters()
    }

    /// The move to play in `state`, or `None` when there is no legal move.
    pub fn select_move(&mut self, state: &GameState) -> Option<Move> {
        self.decide(state).map(|decision| decision.chosen)
    }

    /// Like [`select_move`](Self::select_move), also reporting the stage that
    /// produced the move. `state` is never modified.
    pub fn decide(&mut self, state: &GameState) -> Option<Decision> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            log::debug!("move {}: no legal move", state.move_number());
            return None;
        }

        let decision = self.run_stages(state, &moves)?;
        log::debug!(
            "move {} ({}): {} via {}, eval {}",
            state.move_number(),
            self.identity.me,
            decision.chosen,
            decision.stage,
            evaluate_position(state, self.identity.me)
        );
        Some(decision)
    }

    fn run_stages(&mut self, state: &GameState, moves: &[Move]) -> Option<Decision> {
        let Identity { me, opponent } = self.identity;

        if state.move_number() == 0 {
            if let Some(mv) = opening_move(moves, &mut self.rng) {
                return Some(Decision::heuristic(mv, DecisionStage::Opening));
            }
        }

        if let Some(mv) = find_immediate_win_or_block(state, me) {
            return Some(Decision::heuristic(mv, DecisionStage::ImmediateWin));
        }
        if let Some(mv) = find_immediate_win_or_block(state, opponent) {
            return Some(Decision::heuristic(mv, DecisionStage::ImmediateBlock));
        }

        if state.move_number() < 2 {
            if let Some(mv) = early_game_move(state, opponent, &mut self.rng) {
                return Some(Decision::heuristic(mv, DecisionStage::EarlyGame));
            }
        }

        if let Some((mv, kind)) = find_pattern_move(state, me, opponent) {
            return Some(Decision::heuristic(mv, kind.into()));
        }

        // Win and block here repeat the immediate stage by simulation; only forks are new.
        if let Some((mv, kind)) = find_tactical_move(state, me, opponent) {
            return Some(Decision::heuristic(mv, kind.into()));
        }

        let result = self.engine.search(state, me, &mut self.rng);
        let chosen = result.best_move?;
        Some(Decision {
            chosen,
            stage: DecisionStage::Search,
            search: Some(result),
        })
    }
}
