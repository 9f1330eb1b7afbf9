use eframe::egui;
use engine::{Cell, GameState};

const BOARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x17, 0x2a);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x10, 0xb9, 0x81);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x60, 0xa5, 0xfa);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x3b, 0x82, 0xf6);

/// Paints one snapshot as filled cells on a dark board. The returned
/// response senses drags so the caller can turn them into swipes.
pub fn show(ui: &mut egui::Ui, state: &GameState, cell_size: f32) -> egui::Response {
    let grid = state.grid();
    let board_size = egui::vec2(
        grid.cols as f32 * cell_size,
        grid.rows as f32 * cell_size,
    );
    let (rect, response) = ui.allocate_exact_size(board_size, egui::Sense::drag());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 8.0, BOARD_BACKGROUND);

    let cell_rect = |cell: Cell, inset: f32| {
        let min = rect.min + egui::vec2(cell.x as f32 * cell_size, cell.y as f32 * cell_size);
        egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size)).shrink(inset)
    };

    painter.rect_filled(cell_rect(state.food(), 2.0), 3.0, FOOD_COLOR);

    for (i, cell) in state.snake().segments().enumerate() {
        let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
        painter.rect_filled(cell_rect(*cell, 1.0), 2.0, color);
    }

    response
}
