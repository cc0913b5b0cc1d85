use super::{Cadence, Config, FpsLimiter, Settings};
use crate::GenerationEngine;
use eframe::egui::{vec2, CentralPanel, Context, Frame, Key, Margin, TopBottomPanel, Vec2};
use log::{debug, info};

pub struct App {
    pub(super) life_engine: GenerationEngine, // Conway's GoL engine.
    pub(super) settings: Settings,
    pub(super) cadence: Cadence, // Decides on which frames the field advances.
    pub(super) is_paused: bool,  // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool, // Do one step and stay paused.
    pub(super) generation: u64,   // Current generation number.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
}

impl App {
    pub fn new(life_engine: GenerationEngine, settings: Settings) -> Self {
        info!(
            "starting {}x{} field, {} px cells, one step every {} frames",
            life_engine.rows(),
            life_engine.columns(),
            settings.square_size,
            settings.frames_per_step
        );
        Self {
            life_engine,
            settings,
            cadence: Cadence::new(settings.frames_per_step),
            is_paused: false,
            do_one_step: false,
            generation: 0,
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
        }
    }

    pub fn engine(&self) -> &GenerationEngine {
        &self.life_engine
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Size of the drawing area: one square per cell.
    pub fn canvas_size(&self) -> Vec2 {
        vec2(
            self.life_engine.columns() as f32 * self.settings.square_size,
            self.life_engine.rows() as f32 * self.settings.square_size,
        )
    }

    /// Inner size of the window: the canvas with the status bar below it.
    pub fn window_size(&self) -> Vec2 {
        self.canvas_size() + vec2(0., Config::STATUS_BAR_HEIGHT)
    }

    fn step(&mut self) {
        self.life_engine.advance();
        self.generation += 1;
    }

    /// Called once per frame, after the current generation has been drawn.
    pub(super) fn update_engine(&mut self) {
        if self.is_paused {
            if self.do_one_step {
                self.step();
                self.do_one_step = false;
            }
            return;
        }
        if self.cadence.tick() {
            self.step();
        }
    }

    pub(super) fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        self.do_one_step = false;
        self.cadence.reset();
        debug!(
            "{} at generation {}",
            if self.is_paused { "paused" } else { "resumed" },
            self.generation
        );
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::E) {
                self.toggle_pause();
            }
            if input.key_pressed(Key::Space) && self.is_paused {
                self.do_one_step = true;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        TopBottomPanel::bottom("status_bar")
            .exact_height(Config::STATUS_BAR_HEIGHT)
            .frame(
                Frame::none()
                    .fill(Config::STATUS_BAR_COLOR)
                    .inner_margin(Margin::symmetric(Config::STATUS_BAR_MARGIN, 0.)),
            )
            .show(ctx, |ui| self.draw_status(ui));

        CentralPanel::default()
            .frame(Frame::none().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| self.draw_field(ui));

        self.update_engine();

        ctx.request_repaint();
        self.fps_limiter.delay();
    }
}
