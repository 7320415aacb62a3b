use crate::game::cell::Player;
use crate::game::game_move::{SubBoardIndex, LOCAL_LINES, SUB_SIZE};
use serde::Serialize;

/// Status of one sub-board on the meta-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubBoardStatus {
    /// Unresolved, but not a legal target for the next move.
    Inactive,
    /// Unresolved and open for the next move.
    Active,
    Won(Player),
    Drawn,
}

impl SubBoardStatus {
    pub fn is_resolved(self) -> bool {
        matches!(self, SubBoardStatus::Won(_) | SubBoardStatus::Drawn)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            SubBoardStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// The 3x3 grid of sub-board statuses, indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroBoard {
    statuses: [[SubBoardStatus; SUB_SIZE]; SUB_SIZE],
}

impl MacroBoard {
    /// Start of a game: every sub-board is open.
    pub fn all_active() -> Self {
        Self {
            statuses: [[SubBoardStatus::Active; SUB_SIZE]; SUB_SIZE],
        }
    }

    pub fn get(&self, idx: SubBoardIndex) -> SubBoardStatus {
        self.statuses[idx.x()][idx.y()]
    }

    pub fn set(&mut self, idx: SubBoardIndex, status: SubBoardStatus) {
        self.statuses[idx.x()][idx.y()] = status;
    }

    pub fn is_active(&self, idx: SubBoardIndex) -> bool {
        self.get(idx) == SubBoardStatus::Active
    }

    pub fn active_sub_boards(&self) -> Vec<SubBoardIndex> {
        SubBoardIndex::all().filter(|&idx| self.is_active(idx)).collect()
    }

    pub fn unresolved_sub_boards(&self) -> Vec<SubBoardIndex> {
        SubBoardIndex::all()
            .filter(|&idx| !self.get(idx).is_resolved())
            .collect()
    }

    pub fn all_resolved(&self) -> bool {
        SubBoardIndex::all().all(|idx| self.get(idx).is_resolved())
    }

    /// Records a resolution. A resolved sub-board is never reopened.
    pub fn resolve(&mut self, idx: SubBoardIndex, status: SubBoardStatus) {
        debug_assert!(status.is_resolved());
        if !self.get(idx).is_resolved() {
            self.set(idx, status);
        }
    }

    /// Points the next move at `target`: only it becomes active when it is still
    /// unresolved, otherwise every unresolved sub-board does.
    pub fn activate_target(&mut self, target: SubBoardIndex) {
        for idx in SubBoardIndex::all() {
            if self.get(idx) == SubBoardStatus::Active {
                self.set(idx, SubBoardStatus::Inactive);
            }
        }

        if self.get(target) == SubBoardStatus::Inactive {
            self.set(target, SubBoardStatus::Active);
        } else {
            for idx in SubBoardIndex::all() {
                if self.get(idx) == SubBoardStatus::Inactive {
                    self.set(idx, SubBoardStatus::Active);
                }
            }
        }
    }

    /// Winner of the whole game: three won sub-boards in a row, column or diagonal.
    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.has_won(player))
    }

    pub fn has_won(&self, player: Player) -> bool {
        LOCAL_LINES.iter().any(|line| {
            line.iter().all(|&(x, y)| {
                self.get(SubBoardIndex::new(x, y)) == SubBoardStatus::Won(player)
            })
        })
    }

    pub fn transposed(&self) -> Self {
        let mut out = self.clone();
        for idx in SubBoardIndex::all() {
            out.set(idx.transposed(), self.get(idx));
        }
        out
    }

    pub fn anti_transposed(&self) -> Self {
        let mut out = self.clone();
        for idx in SubBoardIndex::all() {
            out.set(idx.anti_transposed(), self.get(idx));
        }
        out
    }
}
