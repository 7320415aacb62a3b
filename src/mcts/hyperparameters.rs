//! MCTS Hyperparameters Configuration
//!
//! All tunable constants of the search live here so they can be loaded from a
//! JSON file and logged as a single line.

use crate::game::simulate_game::{RolloutOutcome, RolloutPolicy};
use crate::{Result, UtttError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// MCTS hyperparameters configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MCTSHyperparameters {
    // ========== UCT ==========
    /// Exploration constant C in `C * sqrt(ln(N_parent) / N_child)`
    /// Default: 1.414
    pub exploration_constant: f64,

    /// Divisor applied to the position weight before it is added to the UCT score
    /// Default: 10.0
    pub position_bonus_divisor: f64,

    // ========== Budget ==========
    /// Upper bound on simulations per decision
    /// Default: 500
    pub base_simulation_count: usize,

    /// The runner's time per move is divided by this to get a simulation count
    /// Default: 2
    pub time_budget_divisor: u32,

    /// Optional wall-clock deadline for the simulation loop, in milliseconds.
    /// `None` keeps the search a pure fixed-count loop.
    pub max_search_millis: Option<u64>,

    // ========== Rollouts ==========
    /// Maximum number of plies played by a rollout
    /// Default: 15
    pub rollout_depth_limit: usize,

    /// Number of opening rollout plies sampled from the position weight table
    /// Default: 3
    pub weighted_rollout_plies: usize,

    // ========== Outcome scores ==========
    /// Default: 1.0
    pub win_score: f64,
    /// Default: 0.5
    pub draw_score: f64,
    /// Default: 0.0
    pub loss_score: f64,
    /// Score of a rollout stopped by the depth limit with the game still open.
    /// Default: 0.5 (counted as a draw)
    pub cutoff_score: f64,
}

impl Default for MCTSHyperparameters {
    fn default() -> Self {
        Self {
            exploration_constant: 1.414,
            position_bonus_divisor: 10.0,

            base_simulation_count: 500,
            time_budget_divisor: 2,
            max_search_millis: None,

            rollout_depth_limit: 15,
            weighted_rollout_plies: 3,

            win_score: 1.0,
            draw_score: 0.5,
            loss_score: 0.0,
            cutoff_score: 0.5,
        }
    }
}

impl MCTSHyperparameters {
    /// Number of simulations for a given time per move:
    /// `min(base_simulation_count, time_per_move / time_budget_divisor)`.
    pub fn simulation_count(&self, time_per_move: u32) -> usize {
        let from_time = (time_per_move / self.time_budget_divisor.max(1)) as usize;
        self.base_simulation_count.min(from_time)
    }

    pub fn rollout_policy(&self) -> RolloutPolicy {
        RolloutPolicy {
            depth_limit: self.rollout_depth_limit,
            weighted_plies: self.weighted_rollout_plies,
        }
    }

    /// Value backpropagated for a rollout outcome.
    pub fn outcome_score(&self, outcome: RolloutOutcome) -> f64 {
        match outcome {
            RolloutOutcome::Win => self.win_score,
            RolloutOutcome::Draw => self.draw_score,
            RolloutOutcome::Loss => self.loss_score,
            RolloutOutcome::Cutoff => self.cutoff_score,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.exploration_constant.is_finite() && self.exploration_constant > 0.0) {
            return Err(UtttError::Config(format!(
                "exploration_constant must be positive, got {}",
                self.exploration_constant
            )));
        }
        if !(self.position_bonus_divisor.is_finite() && self.position_bonus_divisor > 0.0) {
            return Err(UtttError::Config(format!(
                "position_bonus_divisor must be positive, got {}",
                self.position_bonus_divisor
            )));
        }
        if self.time_budget_divisor == 0 {
            return Err(UtttError::Config(
                "time_budget_divisor must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("win_score", self.win_score),
            ("draw_score", self.draw_score),
            ("loss_score", self.loss_score),
            ("cutoff_score", self.cutoff_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(UtttError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Loads a (possibly partial) configuration from JSON and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        format!(
            "c[{:.3}]_bonus_div[{:.1}]_sims[{},/{}]_rollout[{},{}]_scores[{:.2},{:.2},{:.2},{:.2}]",
            self.exploration_constant,
            self.position_bonus_divisor,
            self.base_simulation_count,
            self.time_budget_divisor,
            self.rollout_depth_limit,
            self.weighted_rollout_plies,
            self.win_score,
            self.draw_score,
            self.loss_score,
            self.cutoff_score
        )
    }
}
