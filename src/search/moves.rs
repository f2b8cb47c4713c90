//! Move generation and trial placements shared by both searches

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Pos, Symbol};

/// Candidate moves for the side to move.
///
/// Empty cells in row-major order, or nothing once the most recent
/// placement has completed a line. The order decides ties between equally
/// scored moves: the first one seen is kept.
pub fn generate_moves(board: &Board) -> Vec<Pos> {
    if board.completed_line().is_some() {
        return Vec::new();
    }
    board.empty_cells()
}

/// A hypothetical placement that is taken back when dropped.
///
/// Dereferences to the board so the search can recurse through it. On drop
/// the cell is emptied and the board's last-move record is put back, so
/// every exit path leaves the board as it was.
pub(crate) struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous: Option<(Pos, Symbol)>,
}

impl<'a> TrialMove<'a> {
    /// Place `symbol` at `pos`; `None` if the board refuses the placement.
    pub(crate) fn place(board: &'a mut Board, pos: Pos, symbol: Symbol) -> Option<Self> {
        let previous = board.last_move();
        if !board.place(pos, symbol) {
            return None;
        }
        Some(Self {
            board,
            pos,
            previous,
        })
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.unplace(self.pos);
        self.board.restore_last_move(self.previous);
    }
}
