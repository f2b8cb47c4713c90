use std::time::Duration;

use thiserror::Error;

use crate::board::{Symbol, TOTAL_CELLS};
use crate::engine::{AIEngine, SearchType, DEFAULT_DEPTH};

use super::{Player, PlayerKind};

/// Pause before a computer move is delivered
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("both players use the symbol {0}")]
    SameSymbol(Symbol),

    #[error("{player} has no symbol")]
    EmptySymbol { player: String },

    #[error("search depth {0} is outside 1..={max}", max = TOTAL_CELLS)]
    DepthOutOfRange(u8),

    #[error("headless play needs two computer players")]
    HeadlessNeedsComputers,
}

/// Setup for one game. `players[0]` moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub players: [Player; 2],
    pub search_type: SearchType,
    pub depth: u8,
    pub delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: [
                Player::new("PLAYER 1", PlayerKind::Human, Symbol::Nought),
                Player::new("PLAYER 2", PlayerKind::Computer, Symbol::Cross),
            ],
            search_type: SearchType::AlphaBeta,
            depth: DEFAULT_DEPTH,
            delay: DEFAULT_DELAY,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for player in &self.players {
            if player.symbol == Symbol::Empty {
                return Err(ConfigError::EmptySymbol {
                    player: player.name.clone(),
                });
            }
        }
        if self.players[0].symbol == self.players[1].symbol {
            return Err(ConfigError::SameSymbol(self.players[0].symbol));
        }
        if self.depth == 0 || self.depth as usize > TOTAL_CELLS {
            return Err(ConfigError::DepthOutOfRange(self.depth));
        }
        Ok(())
    }

    /// Checks for a game that plays itself out with nobody at the board
    pub fn validate_headless(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.players.iter().any(Player::is_human) {
            return Err(ConfigError::HeadlessNeedsComputers);
        }
        Ok(())
    }

    pub fn swap_symbols(&mut self) {
        let [first, second] = &mut self.players;
        std::mem::swap(&mut first.symbol, &mut second.symbol);
    }

    /// Flip one player between human and computer. Out-of-range indices
    /// are ignored.
    pub fn toggle_kind(&mut self, index: usize) {
        if let Some(player) = self.players.get_mut(index) {
            player.kind = player.kind.toggle();
        }
    }

    pub fn engine(&self) -> AIEngine {
        AIEngine::with_config(self.search_type, self.depth)
    }
}
