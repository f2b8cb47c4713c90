//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Move generation shared by both searches
//! - Plain minimax with discrete evaluation
//! - Alpha-beta pruned minimax with graduated evaluation

pub mod alphabeta;
pub mod minimax;
pub mod moves;

pub use alphabeta::Searcher;
pub use minimax::MinimaxSearcher;
pub use moves::generate_moves;

use crate::board::Pos;

/// Bound used for the initial alpha-beta window and as the starting best
/// score in plain minimax. No evaluation comes near it.
pub const INF: i32 = i32::MAX;

/// Outcome of one search from the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` if the root had no candidate moves
    pub best_move: Option<Pos>,
    /// Score of the root position as seen by the searching side
    pub score: i32,
    /// Positions visited, root included
    pub nodes: u64,
    /// Sibling moves skipped by alpha-beta cutoffs (0 for plain minimax)
    pub cutoffs: u64,
}
