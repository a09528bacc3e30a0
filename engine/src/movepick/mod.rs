mod history;

pub use history::{CaptureHistory, CounterMoves, History, HistoryEntry, MainHistory, SearchStats};
