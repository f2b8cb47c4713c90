//! Plain minimax search
//!
//! Explores every line to the given height and scores leaves with the
//! discrete evaluator, so wins and losses are ±10 however far away they
//! are. Equal scores keep the first move in generation order.

use crate::board::{Board, Pos, Symbol};
use crate::eval::evaluate_discrete;

use super::moves::{generate_moves, TrialMove};
use super::{SearchResult, INF};

/// Minimax searcher playing for `me`
#[derive(Debug, Clone)]
pub struct MinimaxSearcher {
    me: Symbol,
    nodes: u64,
}

impl MinimaxSearcher {
    pub fn new(me: Symbol) -> Self {
        Self { me, nodes: 0 }
    }

    /// Search `height` plies with `me` to move. The board is restored
    /// before returning.
    pub fn search(&mut self, board: &mut Board, height: u8) -> SearchResult {
        self.nodes = 0;
        let (best_move, score) = self.minimax(board, height, self.me);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            cutoffs: 0,
        }
    }

    fn minimax(&mut self, board: &mut Board, height: u8, to_move: Symbol) -> (Option<Pos>, i32) {
        self.nodes += 1;

        let moves = generate_moves(board);
        if height == 0 || moves.is_empty() {
            return (None, evaluate_discrete(board, self.me));
        }

        let maximizing = to_move == self.me;
        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for pos in moves {
            let score = {
                let Some(mut trial) = TrialMove::place(board, pos, to_move) else {
                    continue;
                };
                self.minimax(&mut trial, height - 1, to_move.opponent()).1
            };

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(pos);
            }
        }

        (best_move, best_score)
    }
}
