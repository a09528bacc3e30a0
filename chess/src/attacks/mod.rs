//! Precomputed attack lookups: magic indexed slider tables, leaper tables, and the derived
//! between table.

mod between;
pub mod geometry;
pub mod magic;
mod tables;

pub use between::BetweenTable;
pub use magic::{BISHOP_SLOTS, Magic, ROOK_SLOTS, SliderTable};
pub use tables::AttackTables;
