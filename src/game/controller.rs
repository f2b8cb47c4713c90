use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::board::{Board, Pos, Symbol};
use crate::engine::{AIEngine, MoveResult};

use super::{ConfigError, GameConfig, GameError, GameEvent, Player};

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Player, line: [Pos; 3] },
    Draw,
}

impl GameOutcome {
    /// Text for the game-over card
    pub fn message(&self) -> String {
        match self {
            GameOutcome::Win { winner, .. } => format!("{} WINS!", winner.name),
            GameOutcome::Draw => "IT'S A DRAW".to_string(),
        }
    }

    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        match self {
            GameOutcome::Win { line, .. } => Some(*line),
            GameOutcome::Draw => None,
        }
    }
}

/// Computer search state
enum ComputerState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Runs one game at a time between the configured players.
///
/// Human moves arrive through [`play_turn`](Self::play_turn). Computer
/// moves are searched on a worker thread against a copy of the board and
/// picked up by [`poll_computer`](Self::poll_computer) or
/// [`wait_for_computer`](Self::wait_for_computer), so only the controller
/// ever writes to the live board.
pub struct GameController {
    board: Board,
    players: [Player; 2],
    current: usize,
    engine: AIEngine,
    delay: Duration,
    outcome: Option<GameOutcome>,
    computer: ComputerState,
    history: Vec<(Pos, Symbol)>,
    last_computer_result: Option<MoveResult>,
    events: Sender<GameEvent>,
}

impl GameController {
    /// Build a controller and the receiving end of its event channel.
    pub fn new(config: &GameConfig) -> Result<(Self, Receiver<GameEvent>), ConfigError> {
        config.validate()?;
        let (events, receiver) = channel();
        let controller = Self {
            board: Board::new(),
            players: config.players.clone(),
            current: 0,
            engine: config.engine(),
            delay: config.delay,
            outcome: None,
            computer: ComputerState::Idle,
            history: Vec::new(),
            last_computer_result: None,
            events,
        };
        Ok((controller, receiver))
    }

    /// Begin a fresh game with player 1 to move.
    pub fn start(&mut self) {
        self.reset();
        info!(
            first = %self.players[0],
            second = %self.players[1],
            search = %self.engine.search_type(),
            "game started"
        );
        self.prompt();
        self.begin_turn();
    }

    /// Clear the board and drop any pending computer move.
    pub fn end(&mut self) {
        if self.is_computer_thinking() {
            debug!("discarding pending computer move");
        }
        self.reset();
    }

    /// Play the current human player's move.
    pub fn play_turn(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if self.is_computer_thinking() {
            return Err(GameError::ComputerThinking);
        }
        if !self.current_player().is_human() {
            return Err(GameError::NotYourTurn);
        }
        self.apply_move(pos)
    }

    /// Apply the computer's move if its search has finished.
    ///
    /// Returns `Ok(true)` when a move was played, `Ok(false)` when nothing
    /// was ready.
    pub fn poll_computer(&mut self) -> Result<bool, GameError> {
        let result = match &self.computer {
            ComputerState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return Ok(false),
                Err(TryRecvError::Disconnected) => return self.computer_disconnected(),
            },
            ComputerState::Idle => return Ok(false),
        };
        self.finish_computer_turn(result).map(|()| true)
    }

    /// Block until the computer's move arrives, then apply it.
    ///
    /// Returns `Ok(false)` without waiting if no search is running.
    pub fn wait_for_computer(&mut self) -> Result<bool, GameError> {
        let result = match &self.computer {
            ComputerState::Thinking { receiver, .. } => match receiver.recv() {
                Ok(result) => result,
                Err(_) => return self.computer_disconnected(),
            },
            ComputerState::Idle => return Ok(false),
        };
        self.finish_computer_turn(result).map(|()| true)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_humans_turn(&self) -> bool {
        self.outcome.is_none() && self.current_player().is_human()
    }

    pub fn is_computer_thinking(&self) -> bool {
        matches!(self.computer, ComputerState::Thinking { .. })
    }

    pub fn thinking_elapsed(&self) -> Option<Duration> {
        match &self.computer {
            ComputerState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            ComputerState::Idle => None,
        }
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[(Pos, Symbol)] {
        &self.history
    }

    pub fn last_computer_result(&self) -> Option<&MoveResult> {
        self.last_computer_result.as_ref()
    }

    fn reset(&mut self) {
        self.board.clear();
        self.current = 0;
        self.outcome = None;
        self.computer = ComputerState::Idle;
        self.history.clear();
        self.last_computer_result = None;
    }

    fn emit(&self, event: GameEvent) {
        // Nobody listening is fine, e.g. a headless run that ignores events
        let _ = self.events.send(event);
    }

    fn prompt(&self) {
        self.emit(GameEvent::ShowMessage(format!(
            "{}'S TURN",
            self.current_player().name
        )));
    }

    fn begin_turn(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        let human = self.current_player().is_human();
        self.emit(GameEvent::HumansTurn(human));
        if !human {
            self.start_computer();
        }
    }

    fn start_computer(&mut self) {
        if self.is_computer_thinking() {
            return;
        }

        let mut board = self.board;
        let symbol = self.current_player().symbol;
        let engine = self.engine;
        let delay = self.delay;
        let (tx, rx) = channel();

        debug!(player = %self.current_player().name, "computer thinking");
        thread::spawn(move || {
            let result = engine.choose_move_with_stats(&mut board, symbol);
            thread::sleep(delay);
            let _ = tx.send(result);
        });

        self.computer = ComputerState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    fn finish_computer_turn(&mut self, result: MoveResult) -> Result<(), GameError> {
        self.computer = ComputerState::Idle;
        let best_move = result.best_move;
        self.last_computer_result = Some(result);

        match best_move {
            Some(pos) => self.apply_move(pos),
            None => {
                warn!(player = %self.current_player().name, "computer found no move");
                Err(GameError::NoMoveAvailable)
            }
        }
    }

    fn computer_disconnected(&mut self) -> Result<bool, GameError> {
        self.computer = ComputerState::Idle;
        warn!("computer search thread ended without a move");
        self.emit(GameEvent::ShowMessage(
            GameError::EngineDisconnected.to_string(),
        ));
        Err(GameError::EngineDisconnected)
    }

    fn apply_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let symbol = self.current_player().symbol;
        if !self.board.place(pos, symbol) {
            let err = GameError::InvalidMove {
                row: pos.row,
                col: pos.col,
            };
            warn!(row = pos.row, col = pos.col, "invalid move");
            self.emit(GameEvent::ShowMessage(err.to_string()));
            return Err(err);
        }

        info!(
            player = %self.current_player().name,
            %symbol,
            row = pos.row,
            col = pos.col,
            "move played"
        );
        self.history.push((pos, symbol));
        self.emit(GameEvent::MarkCell { pos, symbol });

        if let Some(outcome) = self.check_game_over() {
            info!(result = %outcome.message(), "game over");
            self.emit(GameEvent::ShowMessage(outcome.message()));
            self.emit(GameEvent::HumansTurn(false));
            self.emit(GameEvent::GameOver(outcome.clone()));
            self.outcome = Some(outcome);
            return Ok(());
        }

        self.current = 1 - self.current;
        self.prompt();
        self.begin_turn();
        Ok(())
    }

    fn check_game_over(&self) -> Option<GameOutcome> {
        if let Some(line) = self.board.completed_line() {
            return Some(GameOutcome::Win {
                winner: self.current_player().clone(),
                line,
            });
        }
        if self.board.is_full() {
            return Some(GameOutcome::Draw);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerKind;

    fn config(first: PlayerKind, second: PlayerKind) -> GameConfig {
        let mut config = GameConfig::default();
        config.players[0].kind = first;
        config.players[1].kind = second;
        config.delay = Duration::ZERO;
        config
    }

    fn hotseat() -> (GameController, Receiver<GameEvent>) {
        let (mut game, events) =
            GameController::new(&config(PlayerKind::Human, PlayerKind::Human)).unwrap();
        game.start();
        (game, events)
    }

    #[test]
    fn test_start_announces_first_player() {
        let (_game, events) = hotseat();
        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(
            received,
            vec![
                GameEvent::ShowMessage("PLAYER 1'S TURN".to_string()),
                GameEvent::HumansTurn(true),
            ]
        );
    }

    #[test]
    fn test_turns_alternate() {
        let (mut game, events) = hotseat();
        events.try_iter().for_each(drop);

        game.play_turn(Pos::new(1, 1)).unwrap();
        assert_eq!(game.current_index(), 1);
        assert_eq!(game.board().get(Pos::new(1, 1)), Symbol::Nought);

        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(
            received,
            vec![
                GameEvent::MarkCell {
                    pos: Pos::new(1, 1),
                    symbol: Symbol::Nought
                },
                GameEvent::ShowMessage("PLAYER 2'S TURN".to_string()),
                GameEvent::HumansTurn(true),
            ]
        );

        game.play_turn(Pos::new(0, 0)).unwrap();
        assert_eq!(game.board().get(Pos::new(0, 0)), Symbol::Cross);
        assert_eq!(game.current_index(), 0);
    }

    #[test]
    fn test_invalid_move_keeps_turn() {
        let (mut game, events) = hotseat();
        game.play_turn(Pos::new(0, 0)).unwrap();
        events.try_iter().for_each(drop);

        let err = game.play_turn(Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, GameError::InvalidMove { row: 0, col: 0 });
        assert_eq!(game.current_index(), 1);
        assert_eq!(
            events.try_iter().collect::<Vec<_>>(),
            vec![GameEvent::ShowMessage(
                "Invalid move on 0, 0. Try again.".to_string()
            )]
        );

        let off_board = Pos { row: 3, col: 1 };
        assert_eq!(
            game.play_turn(off_board),
            Err(GameError::InvalidMove { row: 3, col: 1 })
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_win_detected() {
        let (mut game, events) = hotseat();
        // o takes the left column, x plays the middle column
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            game.play_turn(Pos::new(row, col)).unwrap();
        }

        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.message(), "PLAYER 1 WINS!");
        assert_eq!(
            outcome.winning_line(),
            Some([Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)])
        );
        assert!(game.is_over());
        assert!(!game.is_humans_turn());

        let received: Vec<_> = events.try_iter().collect();
        assert!(matches!(received.last(), Some(GameEvent::GameOver(_))));
        assert!(received.contains(&GameEvent::ShowMessage("PLAYER 1 WINS!".to_string())));

        assert_eq!(game.play_turn(Pos::new(2, 2)), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_detected() {
        let (mut game, _events) = hotseat();
        // o x o / o x x / x o o
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            game.play_turn(Pos::new(row, col)).unwrap();
        }
        assert_eq!(game.outcome(), Some(&GameOutcome::Draw));
        assert_eq!(game.outcome().unwrap().message(), "IT'S A DRAW");
    }

    #[test]
    fn test_human_cannot_move_for_computer() {
        let (mut game, _events) =
            GameController::new(&config(PlayerKind::Computer, PlayerKind::Human)).unwrap();
        game.start();
        assert!(game.is_computer_thinking());
        assert_eq!(
            game.play_turn(Pos::new(1, 1)),
            Err(GameError::ComputerThinking)
        );

        assert!(game.wait_for_computer().unwrap());
        assert!(!game.is_computer_thinking());
        assert_eq!(game.history().len(), 1);
        assert!(game.is_humans_turn());
        assert!(game.last_computer_result().is_some());
    }

    #[test]
    fn test_computer_replies_to_human() {
        let (mut game, _events) =
            GameController::new(&config(PlayerKind::Human, PlayerKind::Computer)).unwrap();
        game.start();
        assert!(!game.is_computer_thinking());

        game.play_turn(Pos::new(1, 1)).unwrap();
        assert!(game.is_computer_thinking());
        assert!(game.thinking_elapsed().is_some());

        game.wait_for_computer().unwrap();
        assert_eq!(game.board().count(Symbol::Cross), 1);
        assert_eq!(game.current_index(), 0);
        assert!(!game.poll_computer().unwrap());
    }

    #[test]
    fn test_computers_draw() {
        let (mut game, _events) =
            GameController::new(&config(PlayerKind::Computer, PlayerKind::Computer)).unwrap();
        game.start();
        while !game.is_over() {
            assert!(game.wait_for_computer().unwrap());
        }
        assert_eq!(game.outcome(), Some(&GameOutcome::Draw));
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_end_discards_pending_move() {
        let mut setup = config(PlayerKind::Computer, PlayerKind::Human);
        setup.delay = Duration::from_millis(50);
        let (mut game, _events) = GameController::new(&setup).unwrap();
        game.start();
        game.end();

        assert!(!game.is_computer_thinking());
        assert!(game.board().is_board_empty());
        assert!(!game.wait_for_computer().unwrap());
    }

    #[test]
    fn test_restart_after_game_over() {
        let (mut game, _events) = hotseat();
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            game.play_turn(Pos::new(row, col)).unwrap();
        }
        game.start();
        assert!(!game.is_over());
        assert!(game.history().is_empty());
        assert!(game.play_turn(Pos::new(2, 2)).is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut setup = GameConfig::default();
        setup.depth = 0;
        assert!(GameController::new(&setup).is_err());
    }
}
