use crate::game::game_move::Move;
use serde::Serialize;

/// Statistics of one root child after a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveStatistics {
    #[serde(rename = "move")]
    pub mv: Move,
    pub visits: u32,
    pub average_score: f64,
}

/// Outcome of one search call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MctsResult {
    /// `None` only when the position has no legal move
    pub best_move: Option<Move>,
    pub simulations_run: usize,
    pub tree_size: usize,
    pub root_visits: u32,
    /// Root children in expansion order
    pub children: Vec<MoveStatistics>,
    /// The best move was drawn at random because the root had no children
    pub used_fallback: bool,
}

impl MctsResult {
    /// Statistics of the chosen root child, if the search picked one.
    pub fn best_statistics(&self) -> Option<&MoveStatistics> {
        let best = self.best_move?;
        self.children.iter().find(|stats| stats.mv == best)
    }
}
