use std::fmt;

use crate::board::Symbol;

/// Who decides a player's moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Moves come from [`GameController::play_turn`](super::GameController::play_turn)
    Human,
    /// Moves come from the engine
    Computer,
}

impl PlayerKind {
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            PlayerKind::Human => PlayerKind::Computer,
            PlayerKind::Computer => PlayerKind::Human,
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "HUMAN"),
            PlayerKind::Computer => write!(f, "COMPUTER"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            kind,
            symbol,
        }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    #[inline]
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind, self.symbol)
    }
}
