//! Alpha-Beta pruned minimax
//!
//! Same recursion as plain minimax, carrying the best score each side can
//! already guarantee. Once `alpha >= beta` the remaining siblings cannot
//! change the result and are skipped. Leaves are scored with the graduated
//! evaluator, which separates positions well enough for pruning to bite
//! and prefers faster wins.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Pos, Symbol};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Pos::new(0, 0), Symbol::Cross);
//! board.place(Pos::new(1, 1), Symbol::Nought);
//! board.place(Pos::new(0, 1), Symbol::Cross);
//!
//! // Nought must block the top row
//! let result = Searcher::new(Symbol::Nought).search(&mut board, 9);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use crate::board::{Board, Pos, Symbol};
use crate::eval::evaluate;

use super::moves::{generate_moves, TrialMove};
use super::{SearchResult, INF};

/// Alpha-beta searcher playing for `me`
#[derive(Debug, Clone)]
pub struct Searcher {
    me: Symbol,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    pub fn new(me: Symbol) -> Self {
        Self {
            me,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Search `height` plies with `me` to move, starting from the full
    /// window. The board is restored before returning.
    pub fn search(&mut self, board: &mut Board, height: u8) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;

        let (best_move, score) = self.alpha_beta(board, height, self.me, -INF, INF);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }

    /// One node. Returns the tracked best move with `alpha` at `me`'s
    /// nodes and `beta` at the opponent's.
    ///
    /// A move only becomes best if it strictly improves the bound, so a node
    /// whose children all fail to beat the inherited window reports no move.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        height: u8,
        to_move: Symbol,
        mut alpha: i32,
        mut beta: i32,
    ) -> (Option<Pos>, i32) {
        self.nodes += 1;

        let moves = generate_moves(board);
        if height == 0 || moves.is_empty() {
            return (None, evaluate(board, self.me));
        }

        let maximizing = to_move == self.me;
        let mut best_move = None;
        let total = moves.len();

        for (i, pos) in moves.into_iter().enumerate() {
            let score = {
                let Some(mut trial) = TrialMove::place(board, pos, to_move) else {
                    continue;
                };
                self.alpha_beta(&mut trial, height - 1, to_move.opponent(), alpha, beta)
                    .1
            };

            if maximizing {
                if score > alpha {
                    alpha = score;
                    best_move = Some(pos);
                }
            } else if score < beta {
                beta = score;
                best_move = Some(pos);
            }

            if alpha >= beta {
                self.cutoffs += (total - i - 1) as u64;
                break;
            }
        }

        (best_move, if maximizing { alpha } else { beta })
    }
}
