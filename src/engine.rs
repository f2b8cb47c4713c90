//! Computer player's move selection
//!
//! The engine wraps the two searches behind one call. Alpha-beta with the
//! graduated evaluator is the default; plain minimax with the discrete
//! evaluator can be selected instead. Both are deterministic: the same
//! board and symbol always produce the same move.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Pos, Symbol};
//!
//! let engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place(Pos::new(1, 1), Symbol::Nought);
//!
//! let result = engine.choose_move_with_stats(&mut board, Symbol::Cross);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::fmt;
use std::time::Instant;

use tracing::{debug, warn};

use crate::board::{Board, Pos, Symbol, TOTAL_CELLS};
use crate::search::{MinimaxSearcher, SearchResult, Searcher};

/// Search depth that exhausts the board from any position
pub const DEFAULT_DEPTH: u8 = TOTAL_CELLS as u8;

/// Which search produces the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchType {
    /// Alpha-beta pruned minimax with graduated evaluation
    #[default]
    AlphaBeta,
    /// Plain minimax with discrete evaluation
    Minimax,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::AlphaBeta => write!(f, "alpha-beta"),
            SearchType::Minimax => write!(f, "minimax"),
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` if the position is already decided
    pub best_move: Option<Pos>,
    /// Score of the position for the engine's side
    pub score: i32,
    /// Search that produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of positions visited
    pub nodes: u64,
    /// Sibling moves skipped by pruning
    pub cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
            cutoffs: result.cutoffs,
        }
    }

    #[inline]
    fn no_move(search_type: SearchType) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type,
            time_ms: 0,
            nodes: 0,
            cutoffs: 0,
        }
    }
}

/// Move-selection engine.
///
/// Holds configuration only; every call searches from scratch, so one
/// engine can serve both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIEngine {
    search_type: SearchType,
    max_depth: u8,
}

impl AIEngine {
    /// Alpha-beta search at full depth.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_type: SearchType::AlphaBeta,
            max_depth: DEFAULT_DEPTH,
        }
    }

    /// Engine with an explicit search and depth in plies.
    ///
    /// # Example
    ///
    /// ```
    /// use tictactoe::{AIEngine, SearchType};
    ///
    /// let engine = AIEngine::with_config(SearchType::Minimax, 9);
    /// assert_eq!(engine.search_type(), SearchType::Minimax);
    /// ```
    #[must_use]
    pub fn with_config(search_type: SearchType, max_depth: u8) -> Self {
        Self {
            search_type,
            max_depth,
        }
    }

    /// Best move for `me`, or `None` when the game is already over.
    ///
    /// The board is explored in place and left exactly as it was found;
    /// applying the move is up to the caller.
    #[must_use]
    pub fn choose_move(&self, board: &mut Board, me: Symbol) -> Option<Pos> {
        self.choose_move_with_stats(board, me).best_move
    }

    /// Best move with score, node count and timing.
    #[must_use]
    pub fn choose_move_with_stats(&self, board: &mut Board, me: Symbol) -> MoveResult {
        if me == Symbol::Empty {
            warn!("move requested for the empty symbol");
            return MoveResult::no_move(self.search_type);
        }

        let start = Instant::now();
        let result = match self.search_type {
            SearchType::AlphaBeta => Searcher::new(me).search(board, self.max_depth),
            SearchType::Minimax => MinimaxSearcher::new(me).search(board, self.max_depth),
        };
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            search = %self.search_type,
            symbol = %me,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            cutoffs = result.cutoffs,
            time_ms,
            "search finished"
        );

        MoveResult::from_search(result, self.search_type, time_ms)
    }

    pub fn set_search_type(&mut self, search_type: SearchType) {
        self.search_type = search_type;
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Best move for `me` with the default engine.
#[must_use]
pub fn choose_move(board: &mut Board, me: Symbol) -> Option<Pos> {
    AIEngine::new().choose_move(board, me)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        let mut symbol = Symbol::Cross;
        for &(row, col) in moves {
            assert!(board.place(Pos::new(row, col), symbol));
            symbol = symbol.opponent();
        }
        board
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.search_type(), SearchType::AlphaBeta);
        assert_eq!(engine.max_depth(), 9);
        assert_eq!(engine, AIEngine::default());
    }

    #[test]
    fn test_engine_with_config() {
        let mut engine = AIEngine::with_config(SearchType::Minimax, 4);
        assert_eq!(engine.search_type(), SearchType::Minimax);
        assert_eq!(engine.max_depth(), 4);

        engine.set_search_type(SearchType::AlphaBeta);
        engine.set_max_depth(9);
        assert_eq!(engine, AIEngine::new());
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        // o: (0,2) (1,1); x: (0,0) (2,2); o to move, wins at (2,0)
        let mut board = play(&[(0, 0), (0, 2), (2, 2), (1, 1)]);
        board.place(Pos::new(0, 1), Symbol::Cross);
        assert_eq!(choose_move(&mut board, Symbol::Nought), Some(Pos::new(2, 0)));
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = play(&[(0, 0), (1, 1), (0, 1)]);
        assert_eq!(choose_move(&mut board, Symbol::Nought), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_engine_no_move_when_decided() {
        let mut board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let engine = AIEngine::new();
        assert_eq!(engine.choose_move(&mut board, Symbol::Nought), None);
        assert_eq!(engine.choose_move(&mut board, Symbol::Cross), None);
    }

    #[test]
    fn test_engine_no_move_on_parsed_finished_board() {
        let mut board: Board = "xxx/oo-/---".parse().unwrap();
        let before = board;
        for search_type in [SearchType::AlphaBeta, SearchType::Minimax] {
            let engine = AIEngine::with_config(search_type, 9);
            assert_eq!(engine.choose_move(&mut board, Symbol::Nought), None);
            assert_eq!(engine.choose_move(&mut board, Symbol::Cross), None);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_no_move_on_full_board() {
        let mut board = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)]);
        assert!(board.is_full());
        let engine = AIEngine::with_config(SearchType::Minimax, 9);
        assert_eq!(engine.choose_move(&mut board, Symbol::Nought), None);
    }

    #[test]
    fn test_engine_empty_symbol() {
        let mut board = Board::new();
        let result = AIEngine::new().choose_move_with_stats(&mut board, Symbol::Empty);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_engine_leaves_board_unchanged() {
        let mut board = play(&[(1, 1), (0, 0), (2, 2)]);
        let before = board;
        for search_type in [SearchType::AlphaBeta, SearchType::Minimax] {
            let engine = AIEngine::with_config(search_type, 9);
            let mv = engine.choose_move(&mut board, Symbol::Nought);
            assert!(mv.is_some());
            assert_eq!(board, before, "{} modified the board", search_type);
        }
    }

    #[test]
    fn test_engine_multiple_searches_agree() {
        let mut board = play(&[(0, 1)]);
        let engine = AIEngine::new();
        let first = engine.choose_move(&mut board, Symbol::Nought);
        let second = engine.choose_move(&mut board, Symbol::Nought);
        assert_eq!(first, second);
    }

    #[test]
    fn test_move_result_reports_search() {
        let mut board = Board::new();
        let engine = AIEngine::with_config(SearchType::Minimax, 2);
        let result = engine.choose_move_with_stats(&mut board, Symbol::Cross);
        assert_eq!(result.search_type, SearchType::Minimax);
        // Root, 9 replies, 72 second-ply leaves
        assert_eq!(result.nodes, 1 + 9 + 72);
        assert_eq!(result.cutoffs, 0);
    }

    #[test]
    fn test_search_type_display() {
        assert_eq!(SearchType::AlphaBeta.to_string(), "alpha-beta");
        assert_eq!(SearchType::Minimax.to_string(), "minimax");
        assert_eq!(SearchType::default(), SearchType::AlphaBeta);
    }
}
