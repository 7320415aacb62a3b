use crate::game::game_move::Move;
use crate::mcts::mcts_result::MctsResult;
use crate::strategy::line_patterns::PatternKind;
use crate::strategy::tactics::TacticKind;
use serde::Serialize;
use std::fmt;

/// Stage of the decision pipeline that produced a move, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DecisionStage {
    Opening,
    ImmediateWin,
    ImmediateBlock,
    EarlyGame,
    PatternWin,
    PatternBlock,
    PatternSetup,
    TacticalWin,
    TacticalBlock,
    Fork,
    Search,
}

impl DecisionStage {
    pub const ALL: [DecisionStage; 11] = [
        DecisionStage::Opening,
        DecisionStage::ImmediateWin,
        DecisionStage::ImmediateBlock,
        DecisionStage::EarlyGame,
        DecisionStage::PatternWin,
        DecisionStage::PatternBlock,
        DecisionStage::PatternSetup,
        DecisionStage::TacticalWin,
        DecisionStage::TacticalBlock,
        DecisionStage::Fork,
        DecisionStage::Search,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DecisionStage::Opening => "opening",
            DecisionStage::ImmediateWin => "immediate-win",
            DecisionStage::ImmediateBlock => "immediate-block",
            DecisionStage::EarlyGame => "early-game",
            DecisionStage::PatternWin => "pattern-win",
            DecisionStage::PatternBlock => "pattern-block",
            DecisionStage::PatternSetup => "pattern-setup",
            DecisionStage::TacticalWin => "tactical-win",
            DecisionStage::TacticalBlock => "tactical-block",
            DecisionStage::Fork => "fork",
            DecisionStage::Search => "search",
        }
    }

    /// Whether the move came from the search rather than a heuristic.
    pub fn is_search(self) -> bool {
        self == DecisionStage::Search
    }
}

impl fmt::Display for DecisionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<PatternKind> for DecisionStage {
    fn from(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Win => DecisionStage::PatternWin,
            PatternKind::Block => DecisionStage::PatternBlock,
            PatternKind::Setup => DecisionStage::PatternSetup,
        }
    }
}

impl From<TacticKind> for DecisionStage {
    fn from(kind: TacticKind) -> Self {
        match kind {
            TacticKind::Win => DecisionStage::TacticalWin,
            TacticKind::Block => DecisionStage::TacticalBlock,
            TacticKind::Fork => DecisionStage::Fork,
        }
    }
}

/// A chosen move and how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    #[serde(rename = "move")]
    pub chosen: Move,
    pub stage: DecisionStage,
    /// Search summary, present only for [`DecisionStage::Search`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<MctsResult>,
}

impl Decision {
    pub fn heuristic(chosen: Move, stage: DecisionStage) -> Self {
        Self {
            chosen,
            stage,
            search: None,
        }
    }
}
