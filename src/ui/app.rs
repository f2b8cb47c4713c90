//! Main application for the tic-tac-toe GUI

use std::sync::mpsc::Receiver;

use eframe::egui;
use egui::{Align, CentralPanel, Context, CornerRadius, Frame, Layout, Margin, RichText, SidePanel};
use tracing::warn;

use crate::game::{GameConfig, GameController, GameError, GameEvent, GameOutcome, Player};
use crate::{Pos, SearchType};

use super::board_view::{symbol_color, BoardView};
use super::theme::*;

enum Screen {
    Start,
    Game,
}

/// A running game and the events it has not yet delivered
struct Session {
    controller: GameController,
    events: Receiver<GameEvent>,
}

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    config: GameConfig,
    screen: Screen,
    session: Option<Session>,
    board_view: BoardView,
    status: String,
    humans_turn: bool,
    last_mark: Option<Pos>,
    outcome: Option<GameOutcome>,
    error: Option<String>,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            config,
            screen: Screen::Start,
            session: None,
            board_view: BoardView::default(),
            status: String::new(),
            humans_turn: false,
            last_mark: None,
            outcome: None,
            error: None,
        }
    }

    /// Start a game with the current setup
    fn start_game(&mut self) {
        let (mut controller, events) = match GameController::new(&self.config) {
            Ok(pair) => pair,
            Err(err) => {
                warn!(%err, "cannot start game");
                self.error = Some(err.to_string());
                self.screen = Screen::Start;
                return;
            }
        };

        self.status.clear();
        self.humans_turn = false;
        self.last_mark = None;
        self.outcome = None;
        self.error = None;

        controller.start();
        self.session = Some(Session { controller, events });
        self.screen = Screen::Game;
    }

    /// Drop the running game and go back to the setup screen
    fn back_to_start(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.controller.end();
        }
        self.screen = Screen::Start;
    }

    /// Pick up a finished computer move and apply queued events
    fn pump(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Err(err) = session.controller.poll_computer() {
            self.status = err.to_string();
        }

        let events: Vec<GameEvent> = session.events.try_iter().collect();
        for event in events {
            match event {
                GameEvent::ShowMessage(text) => self.status = text,
                GameEvent::HumansTurn(flag) => self.humans_turn = flag,
                GameEvent::MarkCell { pos, .. } => self.last_mark = Some(pos),
                GameEvent::GameOver(outcome) => self.outcome = Some(outcome),
            }
        }
    }

    fn handle_click(&mut self, pos: Pos) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.controller.play_turn(pos) {
            Ok(()) => {}
            // Already reported through the event channel
            Err(GameError::InvalidMove { .. }) => {}
            Err(err) => self.status = err.to_string(),
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, escape) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::Escape)));

        if new_game {
            self.start_game();
        } else if escape {
            self.back_to_start();
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn button(ui: &mut egui::Ui, text: &str, size: f32) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(size).strong().color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    fn render_title(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("x").size(24.0).strong().color(CROSS));
            ui.label(RichText::new("o").size(24.0).strong().color(NOUGHT));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Setup screen: player types, symbols and search
    fn render_start_screen(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(24.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    Self::render_title(ui);
                    ui.add_space(24.0);

                    for index in 0..2 {
                        let player = &self.config.players[index];
                        let label = format!("{}: {}", player.name, player.symbol);
                        let color = symbol_color(player.symbol);
                        let kind = player.kind.to_string();

                        Self::card_frame().show(ui, |ui| {
                            ui.set_width(280.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(label).size(16.0).strong().color(color));
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    if Self::button(ui, &kind, 12.0) {
                                        self.config.toggle_kind(index);
                                    }
                                });
                            });
                        });
                        ui.add_space(8.0);
                    }

                    if Self::button(ui, "SWAP SYMBOLS", 12.0) {
                        self.config.swap_symbols();
                    }
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
                        ui.radio_value(&mut self.config.search_type, SearchType::AlphaBeta, "alpha-beta");
                        ui.radio_value(&mut self.config.search_type, SearchType::Minimax, "minimax");
                    });
                    ui.add_space(24.0);

                    if Self::button(ui, "START", 18.0) {
                        self.start_game();
                    }

                    if let Some(err) = &self.error {
                        ui.add_space(12.0);
                        ui.label(RichText::new(err).size(12.0).color(CROSS));
                    }
                });
            });
    }

    /// Player pill, highlighted while it is that player's turn
    fn render_pill(ui: &mut egui::Ui, player: &Player, active: bool) {
        let (fill, text) = if active {
            (PILL_ACTIVE, TEXT_PRIMARY)
        } else {
            (PILL_IDLE, faded(TEXT_SECONDARY))
        };
        let symbol = if active {
            symbol_color(player.symbol)
        } else {
            faded(symbol_color(player.symbol))
        };

        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(16))
            .inner_margin(Margin::symmetric(14, 8))
            .show(ui, |ui| {
                ui.set_width(200.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.symbol.to_string()).size(20.0).strong().color(symbol));
                    ui.add_space(6.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&player.name).size(14.0).strong().color(text));
                        ui.label(RichText::new(player.kind.to_string()).size(10.0).color(TEXT_MUTED));
                    });
                });
            });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        let mut replay = false;

        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                Self::render_title(ui);
                ui.add_space(12.0);

                let Some(session) = &self.session else {
                    return;
                };
                let controller = &session.controller;

                for (index, player) in controller.players().iter().enumerate() {
                    let active = !controller.is_over() && controller.current_index() == index;
                    Self::render_pill(ui, player, active);
                    ui.add_space(6.0);
                }
                ui.add_space(6.0);

                Self::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let (text, color) = if let Some(elapsed) = controller.thinking_elapsed() {
                        (format!("thinking {:.1}s", elapsed.as_secs_f32()), THINKING)
                    } else if self.humans_turn {
                        ("your move".to_string(), READY)
                    } else {
                        (String::new(), TEXT_MUTED)
                    };
                    ui.label(RichText::new(&self.status).size(16.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(text).size(11.0).color(color));
                });

                if let Some(result) = controller.last_computer_result() {
                    ui.add_space(10.0);
                    Self::card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new("LAST SEARCH").size(10.0).color(TEXT_MUTED));
                        ui.label(
                            RichText::new(format!("{}  score {}", result.search_type, result.score))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.label(
                            RichText::new(format!(
                                "{} nodes, {} cutoffs, {}ms",
                                result.nodes, result.cutoffs, result.time_ms
                            ))
                            .size(10.0)
                            .color(TEXT_MUTED),
                        );
                    });
                }

                if let Some(outcome) = &self.outcome {
                    ui.add_space(10.0);
                    replay = Self::render_game_over_card(ui, outcome);
                }

                ui.with_layout(Layout::bottom_up(Align::LEFT), |ui| {
                    ui.label(RichText::new("N new game   Esc setup").size(10.0).color(TEXT_MUTED));
                });
            });

        if replay {
            self.back_to_start();
        }
    }

    /// Returns true when the replay button is clicked
    fn render_game_over_card(ui: &mut egui::Ui, outcome: &GameOutcome) -> bool {
        let accent = match outcome {
            GameOutcome::Win { winner, .. } => symbol_color(winner.symbol),
            GameOutcome::Draw => TEXT_SECONDARY,
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(outcome.message()).size(20.0).strong().color(accent));
                    ui.add_space(12.0);
                    Self::button(ui, "PLAY AGAIN", 14.0)
                })
                .inner
            })
            .inner
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(12.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        let Some(session) = &self.session else {
            return;
        };
        let controller = &session.controller;
        let board = *controller.board();
        let current = controller.current_player().symbol;
        let winning_line = self.outcome.as_ref().and_then(GameOutcome::winning_line);
        let accepting = self.humans_turn && controller.is_humans_turn();
        let last_mark = self.last_mark;
        let invalid = self.status.starts_with("Invalid move").then(|| self.status.clone());

        let clicked = CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let clicked = self.board_view.show(
                        ui,
                        &board,
                        current,
                        last_mark,
                        winning_line,
                        accepting,
                    );
                    if let Some(msg) = &invalid {
                        ui.add_space(8.0);
                        Self::render_message_card(ui, msg);
                    }
                    clicked
                })
                .inner
            })
            .inner;

        if let Some(pos) = clicked {
            self.handle_click(pos);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.pump();

        match self.screen {
            Screen::Start => self.render_start_screen(ctx),
            Screen::Game => {
                self.render_side_panel(ctx);
                self.render_board(ctx);
            }
        }

        let thinking = self
            .session
            .as_ref()
            .is_some_and(|s| s.controller.is_computer_thinking());
        if thinking {
            ctx.request_repaint();
        }
    }
}
