//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 95, 105);
pub const CELL_HOVER: Color32 = Color32::from_rgb(48, 52, 58);

// Marks
pub const NOUGHT: Color32 = Color32::from_rgb(90, 170, 250);
pub const CROSS: Color32 = Color32::from_rgb(250, 110, 100);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 200, 80);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panels
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const PILL_ACTIVE: Color32 = Color32::from_rgb(60, 100, 70);
pub const PILL_IDLE: Color32 = Color32::from_rgb(40, 42, 46);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

pub const THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const READY: Color32 = Color32::from_rgb(80, 200, 120);

// Functions for colors that can't be const
pub fn preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)
}

pub fn faded(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 110)
}

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const MAX_BOARD_SIZE: f32 = 480.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_RATIO: f32 = 0.3;
pub const MARK_WIDTH_RATIO: f32 = 0.08;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
