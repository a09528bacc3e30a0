use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

/// Progress counters of one search thread, plus the stop flag every thread of a search shares
#[derive(Clone, Debug)]
pub struct SearchInfo {
    nodes: u64,
    seldepth: usize,
    start_time: Instant,
    stop: Arc<AtomicBool>,
}

impl SearchInfo {
    pub fn new(stop: Arc<AtomicBool>) -> Self {
        Self {
            nodes: 0,
            seldepth: 0,
            start_time: Instant::now(),
            stop,
        }
    }

    /// Zeroes the counters, restarts the clock and lowers the stop flag
    pub fn reset(&mut self) {
        self.nodes = 0;
        self.seldepth = 0;
        self.start_time = Instant::now();
        self.stop.store(false, Ordering::Relaxed);
    }

    #[inline]
    pub fn inc_nodes(&mut self) {
        self.nodes += 1;
    }

    #[inline]
    pub fn update_seldepth(&mut self, ply: usize) {
        self.seldepth = self.seldepth.max(ply);
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn seldepth(&self) -> usize {
        self.seldepth
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stop
    }
}
