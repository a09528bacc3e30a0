/// Piece-square inputs: 2 colours x 6 piece types x 64 squares
pub const INPUT: usize = 768;
pub const L1: usize = 128;

pub const FEATURE_WEIGHTS: usize = INPUT * L1;
pub const FEATURE_BIAS: usize = L1;
pub const OUTPUT_WEIGHTS: usize = 2 * L1;
pub const OUTPUT_BIAS: usize = 1;

/// Number of `i16` parameters in a network file
pub const PARAM_COUNT: usize = FEATURE_WEIGHTS + FEATURE_BIAS + OUTPUT_WEIGHTS + OUTPUT_BIAS;

/// Exact size of a network file in bytes
pub const FILE_SIZE: usize = PARAM_COUNT * size_of::<i16>();
