/// Counts redraw frames and tells on which of them the field advances.
///
/// A period of `n` advances on every `n`-th frame; 0 behaves like 1.
#[derive(Clone, Debug)]
pub struct Cadence {
    frames_per_step: u32,
    frames_since_step: u32,
}

impl Cadence {
    pub fn new(frames_per_step: u32) -> Self {
        Self {
            frames_per_step: frames_per_step.max(1),
            frames_since_step: 0,
        }
    }

    pub fn frames_per_step(&self) -> u32 {
        self.frames_per_step
    }

    /// Registers one frame; returns `true` if the field should advance on it.
    pub fn tick(&mut self) -> bool {
        self.frames_since_step += 1;
        if self.frames_since_step >= self.frames_per_step {
            self.frames_since_step = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.frames_since_step = 0;
    }
}
