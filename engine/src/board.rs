use std::fmt;
use std::str::FromStr;

use crate::defaults::{BOARD_SIZE, CELL_COUNT};
use crate::error::MoveError;
use crate::types::{Cell, GameStatus, Mark};

/// The eight index triples that end the game: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 grid stored row-major, indices 0..=8.
///
/// `Board` is a plain value: every operation that changes cells returns a
/// new board and leaves `self` untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn apply_move(&self, index: usize, mark: Mark) -> Result<Board, MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::InvalidIndex(index));
        }

        if self.status().is_terminal() {
            return Err(MoveError::GameTerminal);
        }

        if !self.cells[index].is_empty() {
            return Err(MoveError::CellOccupied(index));
        }

        let mut next = *self;
        next.cells[index] = Cell::Marked(mark);
        Ok(next)
    }

    pub fn is_win(&self, mark: Mark) -> bool {
        self.line_of(mark).is_some()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// X is checked before O. Only a board that was not reached by alternating
    /// legal moves can hold a line for both.
    pub fn status(&self) -> GameStatus {
        if self.is_win(Mark::X) {
            GameStatus::Won(Mark::X)
        } else if self.is_win(Mark::O) {
            GameStatus::Won(Mark::O)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        [Mark::X, Mark::O]
            .into_iter()
            .find_map(|mark| self.line_of(mark).map(|line| (mark, line)))
    }

    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    fn line_of(&self, mark: Mark) -> Option<[usize; 3]> {
        WIN_LINES
            .iter()
            .find(|line| line.iter().all(|&i| self.cells[i] == Cell::Marked(mark)))
            .copied()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Marked(mark) => mark.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cells from `X`, `O` and `.`, ignoring whitespace and `|`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(format!(
                "Board needs {} cells, got {}",
                CELL_COUNT,
                symbols.len()
            ));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                other => return Err(format!("Unknown cell symbol '{}'", other)),
            };
        }

        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_has_all_moves() {
        let board = Board::empty();
        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.status(), GameStatus::InProgress);
        assert!(!board.is_full());
    }

    #[test]
    fn test_apply_move_sets_exactly_one_cell() {
        let before = Board::empty();
        let after = before.apply_move(4, Mark::X).unwrap();

        assert_eq!(before, Board::empty());
        assert_eq!(after.cell(4), Some(Cell::Marked(Mark::X)));
        let changed = (0..9).filter(|&i| before.cell(i) != after.cell(i)).count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let board = Board::empty();
        assert_eq!(board.apply_move(9, Mark::X), Err(MoveError::InvalidIndex(9)));
        assert_eq!(
            board.apply_move(usize::MAX, Mark::O),
            Err(MoveError::InvalidIndex(usize::MAX))
        );
    }

    #[test]
    fn test_apply_move_rejects_every_occupied_cell() {
        let board = board("XOX OXO ...");
        for index in 0..6 {
            assert_eq!(
                board.apply_move(index, Mark::X),
                Err(MoveError::CellOccupied(index))
            );
            assert_eq!(
                board.apply_move(index, Mark::O),
                Err(MoveError::CellOccupied(index))
            );
        }
    }

    #[test]
    fn test_apply_move_rejects_after_win() {
        let board = board("XXX OO. ...");
        assert_eq!(board.apply_move(5, Mark::O), Err(MoveError::GameTerminal));
    }

    #[test]
    fn test_is_win_matches_win_lines() {
        for line in WIN_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut cells = [Cell::Empty; 9];
                for i in line {
                    cells[i] = Cell::Marked(mark);
                }
                let board = Board::from_cells(cells);
                assert!(board.is_win(mark), "line {:?}", line);
                assert!(!board.is_win(mark.opponent()));
                assert_eq!(board.winning_line(), Some((mark, line)));
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board("XX. OO. ...");
        assert!(!board.is_win(Mark::X));
        assert!(!board.is_win(Mark::O));
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board("XOX XOO OXX");
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.status(), GameStatus::Draw);
    }

    #[test]
    fn test_move_on_drawn_board_is_terminal_not_occupied() {
        let board = board("XOX XOO OXX");
        for index in 0..9 {
            assert_eq!(board.apply_move(index, Mark::O), Err(MoveError::GameTerminal));
        }
        assert_eq!(board.apply_move(9, Mark::O), Err(MoveError::InvalidIndex(9)));
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board = board("XOX OXO OXX");
        assert!(board.is_full());
        assert_eq!(board.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_both_lines_reports_x_first() {
        let board = board("XXX OOO ...");
        assert!(board.is_win(Mark::X));
        assert!(board.is_win(Mark::O));
        assert_eq!(board.status(), GameStatus::Won(Mark::X));
        assert_eq!(board.winning_line(), Some((Mark::X, [0, 1, 2])));
    }

    #[test]
    fn test_status_is_idempotent() {
        for s in ["... ... ...", "XOX XOO OXX", "O.. .O. ..O", "XO. .X. ..."] {
            let board = board(s);
            assert_eq!(board.status(), board.status());
        }
    }

    #[test]
    fn test_legal_moves_ascending() {
        let board = board("X.O .X. O..");
        assert_eq!(board.legal_moves(), vec![1, 3, 5, 7, 8]);
        assert_eq!(board.marks_placed(), 4);
    }

    #[test]
    fn test_display_and_parse_agree() {
        let board = board("X.O|.X.|O..");
        assert_eq!(board.to_string(), "X.O\n.X.\nO..");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXOZ".parse::<Board>().is_err());
    }
}
