//! Board rendering for the peg gomoku GUI

use crate::board::{Board, PlayerId, Pos};
use crate::rules::Sequence;
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Grid dimensions of the last drawn board
    dims: (usize, usize),
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            dims: (0, 0),
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Option<PlayerId>,
        last_move: Option<Pos>,
        sequences: &[Sequence],
    ) -> Option<Pos> {
        self.dims = (board.width(), board.height());
        let spans = Vec2::new(
            board.width().saturating_sub(1).max(1) as f32,
            board.height().saturating_sub(1).max(1) as f32,
        );

        // Fit the grid into the available space, keeping cells square
        let available = ui.available_size() - Vec2::splat(20.0 + 2.0 * BOARD_MARGIN);
        self.cell_size = (available.x / spans.x).min(available.y / spans.y).max(8.0);
        let board_size = spans * self.cell_size + Vec2::splat(2.0 * BOARD_MARGIN);

        let (response, painter) = ui.allocate_painter(board_size, Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_center_point(&painter);
        self.draw_coordinates(&painter);
        self.draw_pegs(&painter, board);

        // Scored runs stay highlighted until the board is cleared
        for sequence in sequences {
            self.draw_sequence(&painter, sequence);
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Hover preview and click only while someone is to move
        let turn = current_turn?;
        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        let is_free = board.is_empty(board_pos);
        self.draw_hover_preview(&painter, board_pos, turn, is_free);

        // Occupied cells are still reported; the session rejects them
        response.clicked().then_some(board_pos)
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let (width, height) = self.dims;
        let right = BOARD_MARGIN + (width as f32 - 1.0) * self.cell_size;
        let bottom = BOARD_MARGIN + (height as f32 - 1.0) * self.cell_size;

        for col in 0..width {
            let offset = BOARD_MARGIN + col as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, bottom);
            painter.line_segment([start, end], stroke);
        }

        for row in 0..height {
            let offset = BOARD_MARGIN + row as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(right, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_center_point(&self, painter: &Painter) {
        let (width, height) = self.dims;
        let center = self.board_to_screen(Pos::new((width / 2) as i32, (height / 2) as i32));
        painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
    }

    /// Draw coordinate labels (1-based columns and rows)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);
        let (width, height) = self.dims;

        for col in 0..width {
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + 14.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, col + 1, font.clone(), GRID_LINE);
        }

        for row in 0..height {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + 14.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row + 1, font.clone(), GRID_LINE);
        }
    }

    fn draw_pegs(&self, painter: &Painter, board: &Board) {
        for (pos, player) in board.iter_occupied() {
            self.draw_peg(painter, pos, player_color(player));
        }
    }

    /// Draw a single peg with a shadow and rim
    fn draw_peg(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PEG_RADIUS_RATIO;

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, color);
        painter.circle_stroke(center, radius, Stroke::new(1.5, PEG_RIM));
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw a line through a scored run and ring its pegs
    fn draw_sequence(&self, painter: &Painter, sequence: &Sequence) {
        let stroke = Stroke::new(3.0, SEQUENCE_HIGHLIGHT);

        for pair in sequence.positions.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in &sequence.positions {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * PEG_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: PlayerId, is_free: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PEG_RADIUS_RATIO;

        let color = if is_free {
            player_color(turn).gamma_multiply(0.45)
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to the nearest board intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;
        let (width, height) = self.dims;

        if col >= 0 && (col as usize) < width && row >= 0 && (row as usize) < height {
            Some(Pos::new(col, row))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
