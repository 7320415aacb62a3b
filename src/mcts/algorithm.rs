//! UCT Monte Carlo Tree Search.
//!
//! Each simulation clones the input state, descends the tree with UCT while the
//! node is fully expanded, expands the first untried legal move, plays a rollout
//! and backpropagates its score. Scores are always taken from the searching
//! player's point of view, on every level of the tree.

use crate::game::cell::Player;
use crate::game::game_move::Move;
use crate::game::game_state::GameState;
use crate::game::simulate_game::simulate_game;
use crate::mcts::hyperparameters::MCTSHyperparameters;
use crate::mcts::mcts_result::{MctsResult, MoveStatistics};
use crate::mcts::node::{NodeId, SearchTree};
use crate::mcts::selection::{backpropagate, select_child};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::time::{Duration, Instant};

const TRACE_INTERVAL: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct MctsEngine {
    params: MCTSHyperparameters,
}

impl MctsEngine {
    pub fn new(params: MCTSHyperparameters) -> Self {
        Self { params }
    }

    pub fn hyperparameters(&self) -> &MCTSHyperparameters {
        &self.params
    }

    /// Searches `state` for `perspective` and returns the most visited root move.
    ///
    /// The simulation count is fixed up front from the state's time per move.
    /// `state` itself is never modified.
    pub fn search<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        perspective: Player,
        rng: &mut R,
    ) -> MctsResult {
        let budget = self.params.simulation_count(state.time_per_move());
        let deadline = self
            .params
            .max_search_millis
            .map(|ms| Instant::now() + Duration::from_millis(ms));
        let policy = self.params.rollout_policy();

        let mut tree = SearchTree::new();
        let mut simulations_run = 0;

        for sim in 0..budget {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                log::debug!("search deadline reached after {} simulations", sim);
                break;
            }

            let mut scratch = state.clone();
            let leaf = self.select_and_expand(&mut tree, &mut scratch);
            let outcome = simulate_game(&mut scratch, perspective, policy, rng);
            backpropagate(&mut tree, leaf, self.params.outcome_score(outcome));
            simulations_run += 1;

            if log::log_enabled!(log::Level::Trace) && simulations_run % TRACE_INTERVAL == 0 {
                log::trace!(
                    "sim {}/{}: tree={} root_avg={:.3}",
                    simulations_run,
                    budget,
                    tree.len(),
                    tree.root().average_score()
                );
            }
        }

        let children: Vec<MoveStatistics> = tree
            .root()
            .children
            .iter()
            .filter_map(|&id| {
                let node = tree.get(id);
                node.mv.map(|mv| MoveStatistics {
                    mv,
                    visits: node.visits,
                    average_score: node.average_score(),
                })
            })
            .collect();

        let mut best_move = most_visited(&children);
        let used_fallback = best_move.is_none();
        if used_fallback {
            best_move = state.legal_moves().choose(rng).copied();
            log::warn!(
                "search produced no root children after {} simulations, random fallback {:?}",
                simulations_run,
                best_move
            );
        }

        let result = MctsResult {
            best_move,
            simulations_run,
            tree_size: tree.len(),
            root_visits: tree.root().visits,
            children,
            used_fallback,
        };
        log::debug!(
            "mcts [{}] sims={} tree={} best={:?} visits={:?}",
            self.params.to_config_string(),
            result.simulations_run,
            result.tree_size,
            result.best_move,
            result.best_statistics().map(|s| s.visits)
        );
        result
    }

    /// Walks down from the root applying moves to `scratch` and returns the node
    /// to roll out from: a freshly expanded child, or a terminal node.
    fn select_and_expand(&self, tree: &mut SearchTree, scratch: &mut GameState) -> NodeId {
        let mut current = NodeId::ROOT;
        loop {
            if scratch.is_terminal() {
                return current;
            }
            let legal_moves = scratch.legal_moves();
            if legal_moves.is_empty() {
                return current;
            }

            if let Some(mv) = tree.first_untried(current, &legal_moves) {
                let child = tree.add_child(current, mv);
                scratch.apply_move(mv);
                return child;
            }

            let Some(next) = select_child(tree, current, &self.params) else {
                return current;
            };
            if let Some(mv) = tree.get(next).mv {
                scratch.apply_move(mv);
            }
            current = next;
        }
    }
}

/// Move with the most visits; the earliest expanded one wins ties.
fn most_visited(children: &[MoveStatistics]) -> Option<Move> {
    let mut best: Option<&MoveStatistics> = None;
    for stats in children {
        match best {
            Some(b) if stats.visits <= b.visits => {}
            _ => best = Some(stats),
        }
    }
    best.map(|stats| stats.mv)
}
