//! Worker pool module
//!
//! Long-lived helper threads for CPU-side frame preparation.

mod worker_pool;

pub use worker_pool::{WorkerPool, Job};
