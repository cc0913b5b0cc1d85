use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const MAX_FPS: f64 = 60.;
    pub const FRAMES_PER_STEP: u32 = 30;

    pub const DEFAULT_ROWS: usize = 1;
    pub const DEFAULT_COLUMNS: usize = 10;
    pub const SQUARE_SIZE: f32 = 100.;

    pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
    pub const CELL_COLOR: Color32 = Color32::BLACK;

    pub const STATUS_BAR_HEIGHT: f32 = 28.;
    pub const STATUS_BAR_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const STATUS_BAR_MARGIN: f32 = 6.;
    pub const TEXT_SIZE: f32 = 14.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
}

/// Presentation settings picked at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Side of one cell on the canvas, in pixels.
    pub square_size: f32,
    /// Redraw frames per generation.
    pub frames_per_step: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            square_size: Config::SQUARE_SIZE,
            frames_per_step: Config::FRAMES_PER_STEP,
        }
    }
}
