use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    thread::{self, JoinHandle},
};

use chess::Board;

use super::ThreadData;
use crate::engine::EngineTables;

/// Helper search threads. Thread 0 is the caller, so helpers are numbered from 1.
///
/// Each helper owns its `ThreadData` for as long as it runs. The engine tables are shared through
/// an `Arc` and only ever read.
#[derive(Debug)]
pub struct ThreadPool {
    helpers: Vec<JoinHandle<ThreadData>>,
    stop: Arc<AtomicBool>,
    nodes: Arc<AtomicU64>,
}

impl ThreadPool {
    pub fn new(stop: Arc<AtomicBool>) -> Self {
        Self {
            helpers: Vec::new(),
            stop,
            nodes: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Starts `count` helpers, each on its own copy of `board`, running `job` until it returns.
    /// Helpers still running from an earlier call are stopped first.
    pub fn spawn_helpers<F>(
        &mut self,
        count: usize,
        tables: &Arc<EngineTables>,
        board: &Board,
        job: F,
    ) -> std::io::Result<()>
    where
        F: Fn(&EngineTables, &mut ThreadData) + Send + Sync + 'static,
    {
        self.stop_and_join_all();

        let job = Arc::new(job);

        for thread_id in 1..=count {
            let tables = Arc::clone(tables);
            let job = Arc::clone(&job);
            let nodes = Arc::clone(&self.nodes);
            let mut td = ThreadData::new(thread_id, board.clone(), Arc::clone(&self.stop));

            let handle = thread::Builder::new()
                .name(format!("helper-{thread_id}"))
                .spawn(move || {
                    job(&tables, &mut td);
                    nodes.fetch_add(td.info.nodes(), Ordering::Relaxed);
                    td
                })?;

            self.helpers.push(handle);
        }

        log::debug!("started {count} helper threads");
        Ok(())
    }

    /// Raises the stop flag, joins every helper and drops its thread data, then lowers the flag
    /// again. Returns how many helpers were joined.
    pub fn stop_and_join_all(&mut self) -> usize {
        if self.helpers.is_empty() {
            return 0;
        }

        self.stop.store(true, Ordering::Relaxed);

        let joined = self.helpers.len();
        for handle in self.helpers.drain(..) {
            if let Err(panic) = handle.join() {
                log::error!("helper thread panicked: {panic:?}");
            }
        }

        self.stop.store(false, Ordering::Relaxed);
        log::debug!("joined {joined} helper threads");

        joined
    }

    /// Number of running helpers
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Nodes searched by helpers that have finished
    pub fn helper_nodes(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    pub fn reset_nodes(&self) {
        self.nodes.store(0, Ordering::Relaxed);
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.stop_and_join_all();
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Mutex, time::Duration};

    use super::*;
    use crate::constants::ZOBRIST_SEED;

    fn tables() -> Arc<EngineTables> {
        Arc::new(EngineTables::build(ZOBRIST_SEED))
    }

    /// Counts nodes until the stop flag goes up
    fn spin(_: &EngineTables, td: &mut ThreadData) {
        while !td.info.stopped() {
            td.info.inc_nodes();
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_join_without_helpers_is_a_no_op() {
        let stop = Arc::new(AtomicBool::new(false));
        let mut pool = ThreadPool::new(Arc::clone(&stop));

        assert_eq!(pool.stop_and_join_all(), 0);
        assert!(!stop.load(Ordering::Relaxed));
    }

    #[test]
    fn test_spawn_and_join() {
        let tables = tables();
        let stop = Arc::new(AtomicBool::new(false));
        let mut pool = ThreadPool::new(Arc::clone(&stop));
        let board = Board::startpos(tables.zobrist());

        pool.spawn_helpers(3, &tables, &board, spin).unwrap();
        assert_eq!(pool.len(), 3);

        thread::sleep(Duration::from_millis(20));

        assert_eq!(pool.stop_and_join_all(), 3);
        assert!(pool.is_empty());
        assert!(!stop.load(Ordering::Relaxed));
        assert!(pool.helper_nodes() > 0);
    }

    #[test]
    fn test_helpers_get_distinct_ids_and_own_boards() {
        let tables = tables();
        let mut pool = ThreadPool::new(Arc::new(AtomicBool::new(false)));
        let board = Board::startpos(tables.zobrist());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let record = Arc::clone(&seen);
        pool.spawn_helpers(4, &tables, &board, move |_, td| {
            td.board.push_played(td.thread_id as u64);
            record.lock().unwrap().push((td.thread_id, td.board.played_positions().len()));
        })
        .unwrap();
        pool.stop_and_join_all();

        let mut seen = seen.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, vec![(1, 1), (2, 1), (3, 1), (4, 1)]);
        assert!(board.played_positions().is_empty());
    }

    #[test]
    fn test_respawn_stops_previous_helpers() {
        let tables = tables();
        let mut pool = ThreadPool::new(Arc::new(AtomicBool::new(false)));
        let board = Board::startpos(tables.zobrist());

        pool.spawn_helpers(2, &tables, &board, spin).unwrap();
        pool.spawn_helpers(1, &tables, &board, spin).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.stop_and_join_all(), 1);
    }
}
