use super::{App, Config, NiceInt};
use eframe::egui::{vec2, Rect, RichText, Rounding, Sense, Ui, Vec2};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    /// Clears the canvas and paints one filled square per alive cell.
    pub(super) fn draw_field(&self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(self.canvas_size(), Sense::hover());
        let canvas = response.rect;
        painter.rect_filled(canvas, Rounding::ZERO, Config::BACKGROUND_COLOR);

        let size = self.settings.square_size;
        for (row, column) in self.life_engine.current_grid().alive_cells() {
            let min = canvas.min + vec2(column as f32 * size, row as f32 * size);
            painter.rect_filled(
                Rect::from_min_size(min, Vec2::splat(size)),
                Rounding::ZERO,
                Config::CELL_COLOR,
            );
        }
    }

    pub(super) fn draw_status(&self, ui: &mut Ui) {
        ui.horizontal_centered(|ui| {
            ui.label(Self::new_text(&format!(
                "Generation: {}",
                NiceInt::from(self.generation)
            )));
            ui.separator();
            ui.label(Self::new_text(&format!(
                "Population: {}",
                NiceInt::from_usize(self.life_engine.population())
            )));
            ui.separator();
            ui.label(Self::new_text(&format!(
                "FPS: {:3}",
                self.fps_limiter.fps().round() as u32
            )));
            if self.is_paused {
                ui.separator();
                ui.label(Self::new_text("Paused (E to resume, Space to step)"));
            }
        });
    }
}
