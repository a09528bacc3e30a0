//! Identity strings and default configuration values.

use chess::board::MAX_MOVES;

pub const NAME: &str = "Ferrite";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = "Ferrite developers";

// Default configuration values.
pub const THREADS: usize = 1;
pub const TT_SIZE: usize = 16;
pub const NETWORK_PATH: &str = "nn.net";
pub const ZOBRIST_SEED: u64 = chess::utils::PRNG::DEFAULT_SEED;

// Search-related constants.
pub const MAX_DEPTH: usize = 128;
pub const MAX_MOVE_INDEX: usize = MAX_MOVES;
pub const MAX_MAIN_HISTORY: i16 = 16384;
