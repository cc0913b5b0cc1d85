mod error;
mod generation;
mod view;


pub use error::EngineError;
pub use generation::GenerationEngine;
pub use view::GridView;
