use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps the redraw loop at a steady frame rate and tracks the rate achieved.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        let mut result = Self {
            target_frametime: Duration::ZERO,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        };
        result.set_max_fps(max_fps);
        result
    }

    /// Smoothed frame rate, 0 before the first frame is measured.
    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.target_frametime = if max_fps > 0. {
            Duration::from_secs_f64(1. / max_fps)
        } else {
            Duration::ZERO
        };
    }

    /// Sleeps for the rest of the current frame.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        if self.frametime_smoothed == 0. {
            self.frametime_smoothed = frametime;
        } else {
            self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        }

        self.frame_timer = Instant::now();
    }
}
