mod app;
mod cadence;
mod config;
mod draw;

pub use app::App;
pub use cadence::Cadence;
pub use config::{Config, Settings};
use crate::utils::{FpsLimiter, NiceInt};
