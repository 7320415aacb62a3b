use serde::Serialize;
use std::fmt;

/// Width of the full board in cells.
pub const BOARD_SIZE: usize = 9;
/// Width of a sub-board (and of the meta-board) in cells.
pub const SUB_SIZE: usize = 3;

/// A cell to claim, addressed by absolute board coordinates in `[0, 8] x [0, 8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    x: usize,
    y: usize,
}

impl Move {
    /// # Panics
    /// Panics if either coordinate is outside the 9x9 board.
    pub fn new(x: usize, y: usize) -> Self {
        assert!(
            x < BOARD_SIZE && y < BOARD_SIZE,
            "move ({x}, {y}) is outside the 9x9 board"
        );
        Self { x, y }
    }

    pub fn x(self) -> usize {
        self.x
    }

    pub fn y(self) -> usize {
        self.y
    }

    /// Sub-board containing this cell.
    pub fn sub_board(self) -> SubBoardIndex {
        SubBoardIndex::new(self.x / SUB_SIZE, self.y / SUB_SIZE)
    }

    /// Position of the cell inside its own sub-board.
    pub fn local(self) -> (usize, usize) {
        (self.x % SUB_SIZE, self.y % SUB_SIZE)
    }

    /// Sub-board the opponent is sent to after this move.
    pub fn target_sub_board(self) -> SubBoardIndex {
        let (lx, ly) = self.local();
        SubBoardIndex::new(lx, ly)
    }

    /// Same cell with the board mirrored along the main diagonal.
    pub fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// Same cell with the board mirrored along the anti-diagonal.
    pub fn anti_transposed(self) -> Self {
        Self {
            x: BOARD_SIZE - 1 - self.y,
            y: BOARD_SIZE - 1 - self.x,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Index of one of the nine sub-boards, `(micro_x, micro_y)` in `[0, 2] x [0, 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubBoardIndex {
    x: usize,
    y: usize,
}

impl SubBoardIndex {
    pub const CENTER: SubBoardIndex = SubBoardIndex { x: 1, y: 1 };

    pub const CORNERS: [SubBoardIndex; 4] = [
        SubBoardIndex { x: 0, y: 0 },
        SubBoardIndex { x: 2, y: 0 },
        SubBoardIndex { x: 0, y: 2 },
        SubBoardIndex { x: 2, y: 2 },
    ];

    /// # Panics
    /// Panics if either coordinate is outside the 3x3 meta-board.
    pub fn new(x: usize, y: usize) -> Self {
        assert!(
            x < SUB_SIZE && y < SUB_SIZE,
            "sub-board ({x}, {y}) is outside the 3x3 meta-board"
        );
        Self { x, y }
    }

    pub fn x(self) -> usize {
        self.x
    }

    pub fn y(self) -> usize {
        self.y
    }

    /// All nine sub-boards, `x` outer and `y` inner.
    pub fn all() -> impl Iterator<Item = SubBoardIndex> {
        (0..SUB_SIZE).flat_map(|x| (0..SUB_SIZE).map(move |y| SubBoardIndex { x, y }))
    }

    /// Absolute coordinates of a cell given its local position in this sub-board.
    pub fn cell(self, local_x: usize, local_y: usize) -> Move {
        Move::new(self.x * SUB_SIZE + local_x, self.y * SUB_SIZE + local_y)
    }

    /// The nine cells of this sub-board.
    pub fn cells(self) -> impl Iterator<Item = Move> {
        (0..SUB_SIZE).flat_map(move |ly| (0..SUB_SIZE).map(move |lx| self.cell(lx, ly)))
    }

    /// The eight winning lines of this sub-board, as absolute cells.
    pub fn lines(self) -> [[Move; 3]; 8] {
        LOCAL_LINES.map(|line| line.map(|(lx, ly)| self.cell(lx, ly)))
    }

    pub fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    pub fn anti_transposed(self) -> Self {
        Self {
            x: SUB_SIZE - 1 - self.y,
            y: SUB_SIZE - 1 - self.x,
        }
    }
}

impl fmt::Display for SubBoardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Local `(x, y)` coordinates of every 3-in-a-row line in a 3x3 grid:
/// rows, then columns, then the main diagonal and the anti-diagonal.
pub const LOCAL_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_decomposition() {
        let mv = Move::new(7, 3);
        assert_eq!(mv.sub_board(), SubBoardIndex::new(2, 1));
        assert_eq!(mv.local(), (1, 0));
        assert_eq!(mv.target_sub_board(), SubBoardIndex::new(1, 0));
    }

    #[test]
    #[should_panic(expected = "outside the 9x9 board")]
    fn test_move_out_of_range_panics() {
        let _ = Move::new(9, 0);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 meta-board")]
    fn test_sub_board_out_of_range_panics() {
        let _ = SubBoardIndex::new(0, 3);
    }

    #[test]
    fn test_sub_board_cells_and_lines() {
        let idx = SubBoardIndex::new(2, 0);
        let cells: Vec<Move> = idx.cells().collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|c| c.sub_board() == idx));

        let lines = idx.lines();
        assert_eq!(lines[0], [Move::new(6, 0), Move::new(7, 0), Move::new(8, 0)]);
        assert_eq!(lines[7], [Move::new(8, 0), Move::new(7, 1), Move::new(6, 2)]);
    }

    #[test]
    fn test_all_sub_boards_in_x_major_order() {
        let all: Vec<SubBoardIndex> = SubBoardIndex::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], SubBoardIndex::new(0, 0));
        assert_eq!(all[1], SubBoardIndex::new(0, 1));
        assert_eq!(all[3], SubBoardIndex::new(1, 0));
    }

    #[test]
    fn test_transpose_swaps_coordinates() {
        assert_eq!(Move::new(1, 7).transposed(), Move::new(7, 1));
        assert_eq!(SubBoardIndex::new(0, 2).transposed(), SubBoardIndex::new(2, 0));
    }

    #[test]
    fn test_anti_transpose_mirrors_cells_and_targets() {
        let mv = Move::new(1, 7);
        let mirrored = mv.anti_transposed();
        assert_eq!(mirrored, Move::new(1, 7));
        assert_eq!(Move::new(0, 0).anti_transposed(), Move::new(8, 8));
        assert_eq!(Move::new(7, 3).anti_transposed(), Move::new(5, 1));
        assert_eq!(
            SubBoardIndex::new(0, 1).anti_transposed(),
            SubBoardIndex::new(1, 2)
        );

        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let mv = Move::new(x, y);
                assert_eq!(mv.anti_transposed().anti_transposed(), mv);
                assert_eq!(
                    mv.anti_transposed().sub_board(),
                    mv.sub_board().anti_transposed()
                );
                assert_eq!(
                    mv.anti_transposed().target_sub_board(),
                    mv.target_sub_board().anti_transposed()
                );
            }
        }
    }
}
