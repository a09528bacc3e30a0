use std::{
    sync::{Arc, atomic::AtomicBool},
    time::Instant,
};

use chess::Board;
use nnue::Network;

use super::{EngineConfig, EngineError, EngineResult, EngineTables};
use crate::{
    search::TT,
    thread::{ThreadData, ThreadPool},
};

/// Owns the shared lookup tables and everything a game mutates.
///
/// `tables` is built once in `bootstrap` and never mutated. The TT, the main thread's data and the
/// helper pool form the session state that `reset_new_game` clears.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    tables: Arc<EngineTables>,
    tt: TT,
    pool: ThreadPool,
    main: ThreadData,
    network: Network,
}

impl Engine {
    /// Builds every lookup table, allocates the TT, loads the evaluation network and starts a new
    /// game. A network that cannot be loaded fails the whole bootstrap.
    pub fn bootstrap(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let start = Instant::now();

        let tables = Arc::new(EngineTables::build(config.zobrist_seed));

        let mut tt = TT::default();
        tt.resize(config.hash_mb);

        let network = Network::load(&config.network_path).inspect_err(|err| {
            log::error!("{err}");
        })?;
        log::debug!("network loaded from {}", config.network_path.display());

        let stop = Arc::new(AtomicBool::new(false));
        let main = ThreadData::new(0, Board::startpos(tables.zobrist()), Arc::clone(&stop));

        let mut engine = Self {
            pool: ThreadPool::new(stop),
            config,
            tables,
            tt,
            main,
            network,
        };
        engine.reset_new_game();

        log::info!(
            "bootstrap finished in {:.2?} (hash {} MiB, threads {})",
            start.elapsed(),
            engine.config.hash_mb,
            engine.config.threads
        );

        Ok(engine)
    }

    /// Returns the session to the state of a fresh game: helpers are stopped and joined first,
    /// then move ordering statistics, the PV table, search counters, TT contents and played
    /// positions are cleared and the board goes back to the start position.
    ///
    /// Running it twice in a row leaves the same state as running it once. The lookup tables are
    /// never touched.
    pub fn reset_new_game(&mut self) {
        let joined = self.pool.stop_and_join_all();
        self.pool.reset_nodes();

        self.main.clear();
        self.tt.clear(self.config.threads);
        self.main.board.reset_to_startpos(self.tables.zobrist());

        log::info!("new game (stopped {joined} helpers)");
    }

    /// Starts `threads - 1` helpers on copies of the current board
    pub fn start_helpers<F>(&mut self, job: F) -> EngineResult<()>
    where
        F: Fn(&EngineTables, &mut ThreadData) + Send + Sync + 'static,
    {
        let count = self.config.threads - 1;
        self.pool
            .spawn_helpers(count, &self.tables, &self.main.board, job)
            .map_err(EngineError::Thread)
    }

    /// Stops and joins every helper, returns how many there were
    pub fn stop_helpers(&mut self) -> usize {
        self.pool.stop_and_join_all()
    }

    /// Reallocates the TT. Helpers are stopped first since they may be reading it.
    pub fn set_hash(&mut self, mb: usize) -> EngineResult<()> {
        let config = EngineConfig {
            hash_mb: mb,
            ..self.config.clone()
        };
        config.validate()?;

        self.pool.stop_and_join_all();
        self.tt.resize(mb);
        self.config = config;

        Ok(())
    }

    pub fn set_threads(&mut self, threads: usize) -> EngineResult<()> {
        let config = EngineConfig {
            threads,
            ..self.config.clone()
        };
        config.validate()?;

        self.pool.stop_and_join_all();
        self.config = config;
        log::debug!("threads set to {threads}");

        Ok(())
    }

    pub fn clear_hash(&mut self) {
        self.pool.stop_and_join_all();
        self.tt.clear(self.config.threads);
    }

    #[inline]
    pub fn tables(&self) -> &Arc<EngineTables> {
        &self.tables
    }

    #[inline]
    pub fn tt(&self) -> &TT {
        &self.tt
    }

    #[inline]
    pub fn main_thread(&self) -> &ThreadData {
        &self.main
    }

    #[inline]
    pub fn main_thread_mut(&mut self) -> &mut ThreadData {
        &mut self.main
    }

    #[inline]
    pub fn pool(&self) -> &ThreadPool {
        &self.pool
    }

    #[inline]
    pub fn network(&self) -> &Network {
        &self.network
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
