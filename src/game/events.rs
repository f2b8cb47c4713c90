use crate::board::{Pos, Symbol};

use super::GameOutcome;

/// Notifications from the controller to whatever is showing the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Status line text, e.g. whose turn it is or why a move was refused
    ShowMessage(String),
    /// Whether the board should accept clicks
    HumansTurn(bool),
    /// A symbol was placed
    MarkCell { pos: Pos, symbol: Symbol },
    /// No more moves will be accepted
    GameOver(GameOutcome),
}
