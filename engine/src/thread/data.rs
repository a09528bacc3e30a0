use std::sync::{Arc, atomic::AtomicBool};

use chess::Board;

use crate::{
    movepick::SearchStats,
    search::{PvTable, SearchInfo},
};

/// Everything a search thread mutates during a game. Each thread owns one; nothing in here is
/// shared except the stop flag inside `info`.
#[derive(Debug, Clone)]
pub struct ThreadData {
    pub thread_id: usize,
    pub board: Board,
    pub stats: Box<SearchStats>,
    pub pv: PvTable,
    pub info: SearchInfo,
}

impl ThreadData {
    pub fn new(thread_id: usize, board: Board, stop: Arc<AtomicBool>) -> Self {
        Self {
            thread_id,
            board,
            stats: SearchStats::new(),
            pv: PvTable::default(),
            info: SearchInfo::new(stop),
        }
    }

    /// Clears move ordering statistics, the PV table and the search counters. The board is left
    /// alone.
    pub fn clear(&mut self) {
        self.stats.clear();
        self.pv.clear();
        self.info.reset();
    }

    #[inline]
    pub fn is_main(&self) -> bool {
        self.thread_id == 0
    }
}
