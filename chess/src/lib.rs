//! # Chess primitives
//!
//! Board types, precomputed attack lookups and Zobrist keys shared by the engine.
pub mod attacks;
pub mod board;
pub mod core;
pub mod utils;

pub use attacks::{AttackTables, BetweenTable};
pub use board::{Board, Key, ZobristKeys};
pub use crate::core::*;
