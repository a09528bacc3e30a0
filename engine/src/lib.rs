pub mod constants;
mod engine;
pub mod movepick;
pub mod search;
pub mod thread;
pub mod uci;

pub use engine::*;
