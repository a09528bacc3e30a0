use std::path::PathBuf;

use thiserror::Error;

/// Reasons a network file cannot be used
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("cannot read network file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("network file {} has {found} bytes, expected {expected}", path.display())]
    Size {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
