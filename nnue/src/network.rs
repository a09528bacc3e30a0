use std::{fs, path::Path};

use crate::{
    error::{NetworkError, NetworkResult},
    params::{FEATURE_BIAS, FEATURE_WEIGHTS, FILE_SIZE, L1, OUTPUT_BIAS, OUTPUT_WEIGHTS},
};

/******************************************\
|==========================================|
|                 Network                  |
|==========================================|
\******************************************/

/// Quantised network parameters, stored in file order:
///
/// | section           | count         |
/// |-------------------|---------------|
/// | `feature_weights` | `768 * L1`    |
/// | `feature_bias`    | `L1`          |
/// | `output_weights`  | `2 * L1`      |
/// | `output_bias`     | `1`           |
///
/// Every value is a little-endian `i16`. A file of any other size is rejected.
#[derive(Clone, PartialEq, Eq)]
pub struct Network {
    feature_weights: Box<[i16]>,
    feature_bias: Box<[i16]>,
    output_weights: Box<[i16]>,
    output_bias: i16,
}

impl Network {
    /// Reads and validates the network at `path`. Blocks on file I/O.
    pub fn load(path: impl AsRef<Path>) -> NetworkResult<Self> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if bytes.len() != FILE_SIZE {
            return Err(NetworkError::Size {
                path: path.to_path_buf(),
                expected: FILE_SIZE,
                found: bytes.len(),
            });
        }

        let network = Self::from_le_bytes(&bytes);
        log::debug!("loaded network {} ({} bytes, L1 = {L1})", path.display(), bytes.len());

        Ok(network)
    }

    /// `bytes` must be exactly `FILE_SIZE` long
    fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut values = bytes
            .chunks_exact(size_of::<i16>())
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]));

        let mut section = |len: usize| -> Box<[i16]> { values.by_ref().take(len).collect() };

        let feature_weights = section(FEATURE_WEIGHTS);
        let feature_bias = section(FEATURE_BIAS);
        let output_weights = section(OUTPUT_WEIGHTS);
        let output_bias = section(OUTPUT_BIAS).first().copied().unwrap_or_default();

        Self {
            feature_weights,
            feature_bias,
            output_weights,
            output_bias,
        }
    }

    #[inline]
    pub fn feature_weights(&self) -> &[i16] {
        &self.feature_weights
    }

    #[inline]
    pub fn feature_bias(&self) -> &[i16] {
        &self.feature_bias
    }

    /// Side to move half first, then the opponent's half
    #[inline]
    pub fn output_weights(&self) -> &[i16] {
        &self.output_weights
    }

    #[inline]
    pub fn output_bias(&self) -> i16 {
        self.output_bias
    }
}

impl std::fmt::Debug for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Network")
            .field("l1", &self.feature_bias.len())
            .field("output_bias", &self.output_bias)
            .finish_non_exhaustive()
    }
}
