use crate::game::cell::Player;
use crate::game::game_move::Move;
use crate::game::game_state::GameState;
use crate::strategy::position_evaluation::position_weight;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

/// How a rollout ended, from a fixed player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RolloutOutcome {
    Win,
    Loss,
    /// Every sub-board resolved without a game winner.
    Draw,
    /// Depth limit reached (or no moves left) with the game still open.
    Cutoff,
}

/// Shape of a rollout: how deep to play and how many opening plies follow the
/// weight table instead of uniform sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloutPolicy {
    pub depth_limit: usize,
    pub weighted_plies: usize,
}

/// Plays pseudo-random moves on `state` until it is terminal or the depth limit
/// is hit, then classifies the result for `perspective`. Mutates `state`.
pub fn simulate_game<R: Rng + ?Sized>(
    state: &mut GameState,
    perspective: Player,
    policy: RolloutPolicy,
    rng: &mut R,
) -> RolloutOutcome {
    let mut depth = 0;
    while depth < policy.depth_limit && !state.is_terminal() {
        let legal_moves = state.legal_moves();
        let chosen = if depth < policy.weighted_plies {
            weighted_random_move(&legal_moves, rng)
        } else {
            legal_moves.choose(rng).copied()
        };
        let Some(mv) = chosen else {
            break;
        };
        state.apply_move(mv);
        depth += 1;
    }

    classify_outcome(state, perspective)
}

/// Samples a move with probability proportional to its position weight. Same
/// distribution as drawing from a pool holding each move `weight` times.
pub fn weighted_random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    let total: u32 = moves.iter().map(|&mv| position_weight(mv)).sum();
    if total == 0 {
        return None;
    }

    let mut ticket = rng.random_range(0..total);
    for &mv in moves {
        let weight = position_weight(mv);
        if ticket < weight {
            return Some(mv);
        }
        ticket -= weight;
    }
    None
}

pub fn classify_outcome(state: &GameState, perspective: Player) -> RolloutOutcome {
    if state.has_won(perspective) {
        RolloutOutcome::Win
    } else if state.has_won(perspective.opponent()) {
        RolloutOutcome::Loss
    } else if state.is_fully_resolved() {
        RolloutOutcome::Draw
    } else {
        RolloutOutcome::Cutoff
    }
}
