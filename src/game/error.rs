use thiserror::Error;

/// Why a turn could not be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,

    #[error("it is not a human's turn")]
    NotYourTurn,

    #[error("the computer is still thinking")]
    ComputerThinking,

    #[error("Invalid move on {row}, {col}. Try again.")]
    InvalidMove { row: u8, col: u8 },

    #[error("the computer found no move")]
    NoMoveAvailable,

    #[error("the computer's search thread went away")]
    EngineDisconnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = GameError::InvalidMove { row: 1, col: 2 };
        assert_eq!(err.to_string(), "Invalid move on 1, 2. Try again.");
    }
}
