use crate::game::cell::{Cell, Player};
use crate::game::game_move::{Move, SubBoardIndex, BOARD_SIZE};
use crate::game::macro_board::SubBoardStatus;

/// The 9x9 grid of cells, indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.x()][mv.y()]
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    /// Claims a cell for `player`.
    ///
    /// # Panics
    /// Panics if the cell is already taken: cells are append-only.
    pub fn place(&mut self, mv: Move, player: Player) {
        assert!(
            self.is_empty_at(mv),
            "cell {mv} is already taken by {:?}",
            self.get(mv)
        );
        self.cells[mv.x()][mv.y()] = Cell::Taken(player);
    }

    /// Number of non-empty cells on the whole board.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Whether `player` holds all three cells of some line of the sub-board.
    pub fn has_line(&self, idx: SubBoardIndex, player: Player) -> bool {
        idx.lines()
            .iter()
            .any(|line| line.iter().all(|&mv| self.get(mv).is_owned_by(player)))
    }

    /// Winner of a sub-board judged from its cells alone.
    pub fn sub_board_winner(&self, idx: SubBoardIndex) -> Option<Player> {
        idx.lines().iter().find_map(|line| {
            let first = self.get(line[0]).owner()?;
            line[1..]
                .iter()
                .all(|&mv| self.get(mv).is_owned_by(first))
                .then_some(first)
        })
    }

    /// Resolution of a sub-board: `Won`, `Drawn` when full without a winner,
    /// `None` while it is still being played.
    pub fn sub_board_resolution(&self, idx: SubBoardIndex) -> Option<SubBoardStatus> {
        if let Some(winner) = self.sub_board_winner(idx) {
            return Some(SubBoardStatus::Won(winner));
        }
        if idx.cells().all(|mv| !self.is_empty_at(mv)) {
            return Some(SubBoardStatus::Drawn);
        }
        None
    }

    /// Same position mirrored along the main diagonal.
    pub fn transposed(&self) -> Self {
        let mut out = Self::empty();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                out.cells[y][x] = self.cells[x][y];
            }
        }
        out
    }

    /// Same position mirrored along the anti-diagonal.
    pub fn anti_transposed(&self) -> Self {
        let mut out = Self::empty();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                out.cells[BOARD_SIZE - 1 - y][BOARD_SIZE - 1 - x] = self.cells[x][y];
            }
        }
        out
    }
}
