mod info;
mod pv;
mod tables;
mod tt;
pub mod tune;

pub use info::SearchInfo;
pub use pv::PvTable;
pub use tables::SearchTables;
pub use tt::{TT, TTBound, TTEntry};
pub use tune::tunables;
