//! Evaluation module for tic-tac-toe positions
//!
//! Static scores used at the search horizon:
//! - Graduated line scoring with a faster-win bonus
//! - Discrete win/loss scoring

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_discrete};
pub use patterns::{graduated_line_score, win_weight, LineScore};
