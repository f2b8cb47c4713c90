//! Board representation for tic-tac-toe

pub mod board;


// Re-exports
pub use board::{Board, BoardParseError};

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Empty,
    Nought,
    Cross,
}

impl Symbol {
    /// Get the other mark
    #[inline]
    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::Nought => Symbol::Cross,
            Symbol::Cross => Symbol::Nought,
            Symbol::Empty => Symbol::Empty,
        }
    }

    /// Single-character form used by `Display` and board parsing
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Symbol::Empty => '-',
            Symbol::Nought => 'o',
            Symbol::Cross => 'x',
        }
    }

    #[inline]
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '-' | '.' | ' ' => Some(Symbol::Empty),
            'o' | 'O' => Some(Symbol::Nought),
            'x' | 'X' => Some(Symbol::Cross),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Whether this position lies on the board. `Pos` fields are public,
    /// so a struct literal can name a cell that does not exist.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
