//! Turn-taking between two players
//!
//! The controller owns the live board, alternates turns, runs computer
//! searches off the calling thread and reports what happened as
//! [`GameEvent`]s over a channel.

mod config;
mod controller;
mod error;
mod events;
mod player;

pub use config::{ConfigError, GameConfig, DEFAULT_DELAY};
pub use controller::{GameController, GameOutcome};
pub use error::GameError;
pub use events::GameEvent;
pub use player::{Player, PlayerKind};
