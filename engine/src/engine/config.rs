use std::path::PathBuf;

use super::{EngineError, EngineResult};
use crate::constants::{NETWORK_PATH, THREADS, TT_SIZE, ZOBRIST_SEED};

/// Startup configuration. Everything here is fixed for the life of the engine except `hash_mb`
/// and `threads`, which can be changed between searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Transposition table size in MiB
    pub hash_mb: usize,
    /// Search threads, the main thread included
    pub threads: usize,
    /// Evaluation network parameter file
    pub network_path: PathBuf,
    /// Seed for the Zobrist keys. The same seed gives the same fingerprints on every run.
    pub zobrist_seed: u64,
}

impl EngineConfig {
    pub const MAX_HASH_MB: usize = 1 << 20;
    pub const MAX_THREADS: usize = 1024;

    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=Self::MAX_HASH_MB).contains(&self.hash_mb) {
            return Err(EngineError::Config(format!(
                "hash must be between 1 and {} MiB, got {}",
                Self::MAX_HASH_MB,
                self.hash_mb
            )));
        }

        if !(1..=Self::MAX_THREADS).contains(&self.threads) {
            return Err(EngineError::Config(format!(
                "threads must be between 1 and {}, got {}",
                Self::MAX_THREADS,
                self.threads
            )));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hash_mb: TT_SIZE,
            threads: THREADS,
            network_path: PathBuf::from(NETWORK_PATH),
            zobrist_seed: ZOBRIST_SEED,
        }
    }
}
