//! Plain-text positions.
//!
//! ```text
//! X . . | . . . | . . .
//! . O . | . . . | . . .
//! . . . | . . . | . . .
//! ------+-------+------
//! ...six more rows...
//! active 1 0
//! move 2
//! time 1000
//! ```
//!
//! Spaces and `|` are ignored, separator lines made of `-`/`+` are skipped.
//! Directives: `active all` or `active <mx> <my>`, `move <n>` (defaults to the
//! number of occupied cells), `round <n>` (defaults to 0) and `time <n>`
//! (defaults to 1000). Sub-board statuses are derived from the cells.

use crate::game::board::Board;
use crate::game::cell::{Cell, Player};
use crate::game::game_move::{Move, SubBoardIndex, BOARD_SIZE, SUB_SIZE};
use crate::game::game_state::{GameState, DEFAULT_TIME_PER_MOVE};
use crate::game::macro_board::{MacroBoard, SubBoardStatus};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 9 board rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {width} cells, expected 9")]
    RowWidth { row: usize, width: usize },

    #[error("unknown cell symbol {symbol:?} in row {row}")]
    UnknownSymbol { row: usize, symbol: char },

    #[error("malformed directive {0:?}")]
    Directive(String),

    #[error("active sub-board ({0}, {1}) is outside the meta-board")]
    ActiveOutOfRange(usize, usize),

    #[error("active sub-board ({0}, {1}) is already resolved")]
    ActiveResolved(usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveSpec {
    All,
    Single(usize, usize),
}

fn parse_cell(symbol: char, row: usize) -> Result<Cell, NotationError> {
    match symbol {
        '.' | '_' => Ok(Cell::Empty),
        'X' | 'x' => Ok(Cell::Taken(Player::X)),
        'O' | 'o' => Ok(Cell::Taken(Player::O)),
        _ => Err(NotationError::UnknownSymbol { row, symbol }),
    }
}

fn parse_number(line: &str, value: Option<&str>) -> Result<u32, NotationError> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| NotationError::Directive(line.to_string()))
}

fn parse_active(line: &str, args: &[&str]) -> Result<ActiveSpec, NotationError> {
    match args {
        ["all"] => Ok(ActiveSpec::All),
        [mx, my] => {
            let mx: usize = mx
                .parse()
                .map_err(|_| NotationError::Directive(line.to_string()))?;
            let my: usize = my
                .parse()
                .map_err(|_| NotationError::Directive(line.to_string()))?;
            if mx >= SUB_SIZE || my >= SUB_SIZE {
                return Err(NotationError::ActiveOutOfRange(mx, my));
            }
            Ok(ActiveSpec::Single(mx, my))
        }
        _ => Err(NotationError::Directive(line.to_string())),
    }
}

impl FromStr for GameState {
    type Err = NotationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        let mut active = ActiveSpec::All;
        let mut move_number = None;
        let mut round_number = 0;
        let mut time_per_move = DEFAULT_TIME_PER_MOVE;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() || line.chars().all(|c| c == '-' || c == '+') {
                continue;
            }

            let words: Vec<&str> = line.split_whitespace().collect();
            match words[0] {
                "active" => active = parse_active(line, &words[1..])?,
                "move" => move_number = Some(parse_number(line, words.get(1).copied())?),
                "round" => round_number = parse_number(line, words.get(1).copied())?,
                "time" => time_per_move = parse_number(line, words.get(1).copied())?,
                _ => {
                    let row = rows.len();
                    let cells = line
                        .chars()
                        .filter(|c| !c.is_whitespace() && *c != '|')
                        .map(|c| parse_cell(c, row))
                        .collect::<Result<Vec<_>, _>>()?;
                    if cells.len() != BOARD_SIZE {
                        return Err(NotationError::RowWidth {
                            row,
                            width: cells.len(),
                        });
                    }
                    rows.push(cells);
                }
            }
        }

        if rows.len() != BOARD_SIZE {
            return Err(NotationError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(player) = cell.owner() {
                    board.place(Move::new(x, y), player);
                }
            }
        }

        let mut macro_board = MacroBoard::all_active();
        for idx in SubBoardIndex::all() {
            match board.sub_board_resolution(idx) {
                Some(status) => macro_board.set(idx, status),
                None => macro_board.set(idx, SubBoardStatus::Inactive),
            }
        }
        match active {
            ActiveSpec::All => {
                for idx in macro_board.unresolved_sub_boards() {
                    macro_board.set(idx, SubBoardStatus::Active);
                }
            }
            ActiveSpec::Single(mx, my) => {
                let idx = SubBoardIndex::new(mx, my);
                if macro_board.get(idx).is_resolved() {
                    return Err(NotationError::ActiveResolved(mx, my));
                }
                macro_board.set(idx, SubBoardStatus::Active);
            }
        }

        let move_number = move_number.unwrap_or(board.occupied() as u32);
        Ok(GameState::from_parts(
            board,
            macro_board,
            move_number,
            round_number,
            time_per_move,
        ))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            if y > 0 && y % SUB_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            let mut line = String::new();
            for x in 0..BOARD_SIZE {
                if x > 0 && x % SUB_SIZE == 0 {
                    line.push_str("| ");
                }
                line.push(self.board().get(Move::new(x, y)).symbol());
                line.push(' ');
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        let active = self.macro_board().active_sub_boards();
        if active.len() == 1 {
            writeln!(f, "active {} {}", active[0].x(), active[0].y())?;
        } else {
            writeln!(f, "active all")?;
        }
        writeln!(f, "move {}", self.move_number())?;
        writeln!(f, "round {}", self.round_number())?;
        write!(f, "time {}", self.time_per_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const POSITION: &str = "
        X X . | . . . | . . .
        . . . | . O . | . . .
        . . . | . . . | . . .
        ------+-------+------
        . . . | . . . | . . .
        . . . | . O . | . . .
        . . . | . . . | . . .
        ------+-------+------
        . . . | . . . | . . .
        . . . | . . . | . . .
        . . . | . . . | . . .
        active 0 0
        time 250
    ";

    #[test]
    fn test_parse_position() {
        let state: GameState = POSITION.parse().unwrap();
        assert_eq!(state.board().get(Move::new(1, 0)), Cell::Taken(Player::X));
        assert_eq!(state.board().get(Move::new(4, 1)), Cell::Taken(Player::O));
        assert_eq!(state.move_number(), 4);
        assert_eq!(state.time_per_move(), 250);
        assert_eq!(
            state.macro_board().active_sub_boards(),
            vec![SubBoardIndex::new(0, 0)]
        );
    }

    #[test]
    fn test_display_round_trips() {
        let state: GameState = POSITION.parse().unwrap();
        let reparsed: GameState = state.to_string().parse().unwrap();
        assert_eq!(reparsed, state);
    }

    #[test]
    fn test_resolved_sub_boards_are_derived() {
        let text = "XXX......\n.........\n.........\n.........\n.........\n.........\n.........\n.........\n.........\nactive all\nmove 5";
        let state: GameState = text.parse().unwrap();
        assert_eq!(
            state.macro_board().get(SubBoardIndex::new(0, 0)),
            SubBoardStatus::Won(Player::X)
        );
        assert_eq!(state.macro_board().active_sub_boards().len(), 8);
        assert_eq!(state.move_number(), 5);
    }

    #[test]
    fn test_parse_errors() {
        assert_matches!(
            "X........".parse::<GameState>(),
            Err(NotationError::RowCount(1))
        );
        assert_matches!(
            "X.......\n".repeat(9).parse::<GameState>(),
            Err(NotationError::RowWidth { row: 0, width: 8 })
        );
        assert_matches!(
            ".........\n.........\n........Z".parse::<GameState>(),
            Err(NotationError::UnknownSymbol { row: 2, symbol: 'Z' })
        );

        let empty = ".........\n".repeat(9);
        assert_matches!(
            format!("{empty}active 3 0").parse::<GameState>(),
            Err(NotationError::ActiveOutOfRange(3, 0))
        );
        assert_matches!(
            format!("{empty}move lots").parse::<GameState>(),
            Err(NotationError::Directive(_))
        );

        let won = format!("XXX......\n{}active 0 0", ".........\n".repeat(8));
        assert_matches!(
            won.parse::<GameState>(),
            Err(NotationError::ActiveResolved(0, 0))
        );
    }
}
