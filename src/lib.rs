//! # Ultimate Tic-Tac-Toe Bot Library
//!
//! A move-selection engine for Ultimate Tic-Tac-Toe: nine 3x3 sub-boards nested in a
//! 3x3 meta-board, where each move decides which sub-board the opponent must play in.
//!
//! ## Features
//!
//! - **Game Model**: Board, sub-board statuses, legal-move restriction and rollouts
//! - **Heuristics**: Opening book, immediate and pattern wins/blocks, forks
//! - **AI Engine**: Monte Carlo Tree Search with UCT and weighted rollouts
//! - **Bot**: Per-match decision pipeline chaining the above
//!
//! ## Usage
//!
//! ```rust
//! use uttt_bot::{GameState, UtttBot};
//!
//! let state = GameState::default();
//! let mut bot = UtttBot::from_seed(&state, 42);
//! let mv = bot.select_move(&state);
//! assert!(mv.is_some());
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Board model and game rules
pub mod game;

/// Heuristic move finders and static evaluation
pub mod strategy;

/// Monte Carlo Tree Search engine
pub mod mcts;

/// Decision orchestrator
pub mod bot;

/// Logger setup for the binary
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use bot::decision::{Decision, DecisionStage};
pub use bot::orchestrator::{Identity, UtttBot};
pub use game::cell::{Cell, Player};
pub use game::game_move::{Move, SubBoardIndex};
pub use game::game_state::GameState;
pub use game::macro_board::SubBoardStatus;
pub use game::notation::NotationError;
pub use mcts::algorithm::MctsEngine;
pub use mcts::hyperparameters::MCTSHyperparameters;
pub use mcts::mcts_result::{MctsResult, MoveStatistics};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the bot library
#[derive(Debug, thiserror::Error)]
pub enum UtttError {
    #[error("Position error: {0}")]
    Notation(#[from] NotationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UtttError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
