mod data;
mod pool;

pub use data::ThreadData;
pub use pool::ThreadPool;
