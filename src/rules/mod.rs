//! Game rules for tic-tac-toe
//!
//! Win and draw detection over the eight fixed lines.

pub mod win;

pub use win::{check_winner, find_line_through, is_draw, LINES};
