//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Symbol, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Area covered by the 3x3 grid
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

/// Colour a symbol is drawn in
pub fn symbol_color(symbol: Symbol) -> Color32 {
    match symbol {
        Symbol::Nought => NOUGHT,
        Symbol::Cross => CROSS,
        Symbol::Empty => TEXT_MUTED,
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks and hover previews are only offered while `accepting` is set
    /// and only on empty cells.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current: Symbol,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        accepting: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let board_size = available.x.min(available.y).min(MAX_BOARD_SIZE) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        painter.rect_filled(response.rect, CornerRadius::same(8), BOARD_BG);
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        let hovered = if accepting {
            response
                .hover_pos()
                .and_then(|p| self.screen_to_board(p))
                .filter(|&pos| board.is_empty(pos))
        } else {
            None
        };

        if let Some(pos) = hovered {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::same(4), CELL_HOVER);
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let pos = hovered?;
        self.draw_mark(&painter, pos, current, preview(symbol_color(current)));
        response.clicked().then_some(pos)
    }

    /// Draw the two inner lines each way
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [min + Vec2::new(offset, 0.0), min + Vec2::new(offset, span)],
                stroke,
            );
            painter.line_segment(
                [min + Vec2::new(0.0, offset), min + Vec2::new(span, offset)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                let symbol = board.get(pos);
                if symbol != Symbol::Empty {
                    self.draw_mark(painter, pos, symbol, symbol_color(symbol));
                }
            }
        }
    }

    /// Cross as two diagonal strokes, nought as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, symbol: Symbol, color: Color32) {
        let center = self.board_to_screen(pos);
        let reach = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(self.cell_size * MARK_WIDTH_RATIO, color);

        match symbol {
            Symbol::Cross => {
                painter.line_segment(
                    [center + Vec2::new(-reach, -reach), center + Vec2::new(reach, reach)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(-reach, reach), center + Vec2::new(reach, -reach)],
                    stroke,
                );
            }
            Symbol::Nought => {
                painter.circle_stroke(center, reach, stroke);
            }
            Symbol::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-10.0, 10.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Stroke through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(self.cell_size * MARK_WIDTH_RATIO * 0.75, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[2]);
        painter.line_segment([start, end], stroke);

        for pos in line {
            painter.circle_stroke(
                self.board_to_screen(*pos),
                self.cell_size * 0.42,
                Stroke::new(2.0, WIN_HIGHLIGHT),
            );
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Centre of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
