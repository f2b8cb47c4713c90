//! Win condition checking
//!
//! A player wins with three of their marks on one of the eight lines:
//! three rows, three columns and the two diagonals.

use crate::board::{Board, Pos, Symbol, BOARD_SIZE};

/// The eight winning lines
pub const LINES: [[Pos; 3]; 8] = [
    // Rows
    [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)],
    [Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)],
    [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)],
    // Columns
    [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)],
    [Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)],
    [Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)],
    // Diagonals
    [Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)],
    [Pos::new(2, 0), Pos::new(1, 1), Pos::new(0, 2)],
];

const MAIN_DIAGONAL: usize = 6;
const ANTI_DIAGONAL: usize = 7;

#[inline]
fn is_line_of(board: &Board, line: &[Pos; 3], symbol: Symbol) -> bool {
    line.iter().all(|&p| board.get(p) == symbol)
}

/// Find a completed line of `symbol` that could involve `pos`.
///
/// Checks the row of `pos`, its column, then both diagonals. The diagonals
/// are checked even when `pos` is not on them. Returns `None` for `Empty`
/// or an off-board position.
pub fn find_line_through(board: &Board, pos: Pos, symbol: Symbol) -> Option<[Pos; 3]> {
    if symbol == Symbol::Empty || !pos.in_bounds() {
        return None;
    }

    let row = pos.row as usize;
    let col = pos.col as usize;
    [
        LINES[row],
        LINES[BOARD_SIZE + col],
        LINES[MAIN_DIAGONAL],
        LINES[ANTI_DIAGONAL],
    ]
    .into_iter()
    .find(|line| is_line_of(board, line, symbol))
}

/// Scan every line for a winner
pub fn check_winner(board: &Board) -> Option<(Symbol, [Pos; 3])> {
    LINES.iter().find_map(|line| {
        let first = board.get(line[0]);
        (first != Symbol::Empty && is_line_of(board, line, first)).then_some((first, *line))
    })
}

/// Board full with no winner
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cover_every_cell() {
        let mut seen = [0u8; 9];
        for line in &LINES {
            for pos in line {
                seen[pos.to_index()] += 1;
            }
        }
        // Centre sits on four lines, corners on three, edges on two
        assert_eq!(seen, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_row_win_through_pos() {
        let board: Board = "xxx/oo-/---".parse().unwrap();
        let line = find_line_through(&board, Pos::new(0, 1), Symbol::Cross);
        assert_eq!(line, Some(LINES[0]));
        assert_eq!(find_line_through(&board, Pos::new(0, 1), Symbol::Nought), None);
    }

    #[test]
    fn test_column_win_through_pos() {
        let board: Board = "xo-/xo-/-o-".parse().unwrap();
        assert_eq!(
            find_line_through(&board, Pos::new(2, 1), Symbol::Nought),
            Some(LINES[4])
        );
    }

    #[test]
    fn test_diagonals_checked_from_any_pos() {
        let board: Board = "--x/ox-/xo-".parse().unwrap();
        // (1, 0) is on neither diagonal
        assert_eq!(
            find_line_through(&board, Pos::new(1, 0), Symbol::Cross),
            Some(LINES[ANTI_DIAGONAL])
        );
    }

    #[test]
    fn test_row_elsewhere_not_found_through_pos() {
        // Bottom row is complete but not through row 0 / column 0
        let board: Board = "o--/---/xxx".parse().unwrap();
        assert_eq!(find_line_through(&board, Pos::new(0, 0), Symbol::Cross), None);
        assert_eq!(check_winner(&board), Some((Symbol::Cross, LINES[2])));
    }

    #[test]
    fn test_empty_symbol_never_wins() {
        let board = Board::new();
        assert_eq!(find_line_through(&board, Pos::new(0, 0), Symbol::Empty), None);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_draw_detection() {
        let board: Board = "xox/xoo/oxx".parse().unwrap();
        assert!(is_draw(&board));

        let won: Board = "xxx/ooo/xox".parse().unwrap();
        assert!(!is_draw(&won));

        let open: Board = "xo-/---/---".parse().unwrap();
        assert!(!is_draw(&open));
    }
}
