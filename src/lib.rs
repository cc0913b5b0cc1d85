mod engine;
mod gui;
mod utils;

pub use engine::{EngineError, GenerationEngine, GridView};
pub use gui::{App, Cadence, Config, Settings};
pub use utils::{FpsLimiter, NiceInt};
