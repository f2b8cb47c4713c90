//! Tic-tac-toe engine with minimax and alpha-beta search
//!
//! A 3x3 noughts-and-crosses game with a computer opponent that plays
//! perfectly from any position:
//! - Plain minimax scoring only completed lines
//! - Alpha-beta pruned minimax with a graduated heuristic that prefers
//!   faster wins
//! - A turn controller for any mix of human and computer players
//! - A native GUI and a headless self-play mode
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and placement
//! - [`rules`]: Winning lines and game-end checks
//! - [`eval`]: Static evaluation of positions
//! - [`search`]: Move generation, minimax and alpha-beta
//! - [`engine`]: Move selection integrating search and evaluation
//! - [`game`]: Players, turns and events
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Pos, Symbol};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(1, 1), Symbol::Cross);
//!
//! // Nought replies
//! let engine = AIEngine::new();
//! if let Some(pos) = engine.choose_move(&mut board, Symbol::Nought) {
//!     board.place(pos, Symbol::Nought);
//!     println!("Computer plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search
//!
//! Both searches explore every empty cell in row-major order to the full
//! depth of the board and stop at any position where the last move
//! completed a line. The board is searched in place; every trial placement
//! is taken back before the search returns.

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Symbol, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{choose_move, AIEngine, MoveResult, SearchType, DEFAULT_DEPTH};
pub use game::{GameConfig, GameController, GameEvent, GameOutcome, Player, PlayerKind};
