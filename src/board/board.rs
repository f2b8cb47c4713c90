//! Board structure with last-move tracking

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Pos, Symbol, BOARD_SIZE, TOTAL_CELLS};
use crate::rules::{check_winner, find_line_through};

/// Game board.
///
/// Besides the cells it remembers the most recent placement, which is
/// what `completed_line` checks by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Symbol; TOTAL_CELLS],
    /// Position and mark of the most recent successful `place`
    last_move: Option<(Pos, Symbol)>,
}

/// Failure to read a board from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected {expected} cells, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Symbol::Empty; TOTAL_CELLS],
            last_move: None,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get the symbol at a position. Off-board positions read as `Empty`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Symbol {
        if !pos.in_bounds() {
            return Symbol::Empty;
        }
        self.cells[pos.to_index()]
    }

    /// Check if position is an empty cell on the board
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.in_bounds() && self.get(pos) == Symbol::Empty
    }

    /// Number of empty cells left
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.count(Symbol::Empty)
    }

    /// Number of cells holding `symbol`
    #[inline]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|&&c| c == symbol).count()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        (0..TOTAL_CELLS)
            .filter(|&idx| self.cells[idx] == Symbol::Empty)
            .map(Pos::from_index)
            .collect()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Symbol::Empty)
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == Symbol::Empty)
    }

    /// Place a mark. Returns `false`, leaving the board untouched, when the
    /// position is off the board, already occupied, or `symbol` is `Empty`.
    pub fn place(&mut self, pos: Pos, symbol: Symbol) -> bool {
        if !pos.in_bounds() || symbol == Symbol::Empty || !self.is_empty(pos) {
            return false;
        }
        self.cells[pos.to_index()] = symbol;
        self.last_move = Some((pos, symbol));
        true
    }

    /// Reset a cell to empty. Only used to take back trial placements;
    /// the last-move record is left alone.
    #[inline]
    pub fn unplace(&mut self, pos: Pos) {
        if pos.in_bounds() {
            self.cells[pos.to_index()] = Symbol::Empty;
        }
    }

    /// Most recent placement
    #[inline]
    pub fn last_move(&self) -> Option<(Pos, Symbol)> {
        self.last_move
    }

    /// Put back a saved last-move record after undoing a trial placement
    #[inline]
    pub(crate) fn restore_last_move(&mut self, last_move: Option<(Pos, Symbol)>) {
        self.last_move = last_move;
    }

    /// Line completed by the most recent placement, if any
    pub fn completed_line(&self) -> Option<[Pos; 3]> {
        let (pos, symbol) = self.last_move?;
        self.completed_line_at(pos, symbol)
    }

    /// Line of `symbol` through the row or column of `pos`, or along either
    /// diagonal
    pub fn completed_line_at(&self, pos: Pos, symbol: Symbol) -> Option<[Pos; 3]> {
        find_line_through(self, pos, symbol)
    }

    /// Remove every mark and forget the last move
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[row * BOARD_SIZE + col])?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Reads nine cells in row-major order: `o`, `x`, and `-`, `.` or a space
/// for empty. `/` and line breaks between rows are skipped.
/// If the text already holds a completed line, the last move is set to a
/// cell of that line so `completed_line` reports it; otherwise there is
/// no last move.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut idx = 0;
        for c in s.chars().filter(|c| !matches!(c, '/' | '\n' | '\r' | '\t')) {
            let symbol = Symbol::from_char(c).ok_or(BoardParseError::InvalidCharacter {
                character: c,
                position: idx,
            })?;
            if idx < TOTAL_CELLS {
                board.cells[idx] = symbol;
            }
            idx += 1;
        }
        if idx != TOTAL_CELLS {
            return Err(BoardParseError::WrongLength {
                expected: TOTAL_CELLS,
                got: idx,
            });
        }
        if let Some((winner, line)) = check_winner(&board) {
            board.last_move = Some((line[2], winner));
        }
        Ok(board)
    }
}
