//! Tic-tac-toe GUI
//!
//! Play against the computer, another person, or watch two computers play.
//! With `--headless` a computer-only game is printed to the terminal.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::game::{GameConfig, GameController, GameEvent, GameOutcome, PlayerKind};
use tictactoe::ui::TicTacToeApp;
use tictactoe::{SearchType, DEFAULT_DEPTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Human,
    Computer,
}

impl From<Kind> for PlayerKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Human => PlayerKind::Human,
            Kind::Computer => PlayerKind::Computer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Search {
    AlphaBeta,
    Minimax,
}

impl From<Search> for SearchType {
    fn from(search: Search) -> Self {
        match search {
            Search::AlphaBeta => SearchType::AlphaBeta,
            Search::Minimax => SearchType::Minimax,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against a perfect computer player")]
struct Cli {
    /// Who plays first
    #[arg(long, value_enum, default_value_t = Kind::Human)]
    player1: Kind,

    /// Who plays second
    #[arg(long, value_enum, default_value_t = Kind::Computer)]
    player2: Kind,

    /// Give player 1 crosses and player 2 noughts
    #[arg(long)]
    swap_symbols: bool,

    /// Search used by computer players
    #[arg(long, value_enum, default_value_t = Search::AlphaBeta)]
    search: Search,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Play computer against computer in the terminal
    #[arg(long)]
    headless: bool,
}

impl Cli {
    fn to_config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        config.players[0].kind = self.player1.into();
        config.players[1].kind = self.player2.into();
        if self.swap_symbols {
            config.swap_symbols();
        }
        config.search_type = self.search.into();
        config.depth = self.depth;
        config.delay = Duration::from_millis(self.delay_ms);
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();

    if cli.headless {
        config.validate_headless()?;
        return run_headless(&config);
    }
    config.validate()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 560.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )?;
    Ok(())
}

/// Computer against computer, printing the board after every move
fn run_headless(config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (mut game, events) = GameController::new(config)?;
    game.start();

    loop {
        for event in events.try_iter() {
            match event {
                GameEvent::ShowMessage(text) => println!("{text}"),
                GameEvent::MarkCell { pos, symbol } => {
                    println!("{symbol} -> {pos}");
                    println!("{}\n", game.board());
                }
                GameEvent::HumansTurn(_) | GameEvent::GameOver(_) => {}
            }
        }

        if game.is_over() {
            break;
        }
        game.wait_for_computer()?;
    }

    match game.outcome() {
        Some(GameOutcome::Win { winner, line }) => {
            info!(winner = %winner.name, ?line, moves = game.history().len(), "finished");
        }
        Some(GameOutcome::Draw) | None => {
            info!(moves = game.history().len(), "finished in a draw");
        }
    }
    Ok(())
}
