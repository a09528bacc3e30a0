mod config;
mod engine;
mod error;
mod tables;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use tables::EngineTables;
