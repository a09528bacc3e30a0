use nnue::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load the evaluation network")]
    Network(#[from] NetworkError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to start helper threads")]
    Thread(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
