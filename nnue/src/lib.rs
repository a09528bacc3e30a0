//! # Evaluation network
//!
//! Loads the quantised network parameters the evaluator runs on. Evaluation itself lives with the
//! search; this crate only owns the parameter file format.

mod error;
mod network;
pub mod params;

pub use error::{NetworkError, NetworkResult};
pub use network::Network;
