//! Micro-benchmark comparing six execution strategies for the same
//! three-stage extract → transform → filter pipeline over a large shared
//! integer dataset.
//!
//! Every strategy consumes the dataset read-only and returns the filtered
//! output, so the strategies differ only in scheduling: single-threaded,
//! manually partitioned worker threads, rayon data parallelism, a bounded
//! producer/consumer pipeline, vector-chunked transforms, and the
//! vector + rayon combination. The harness times each one under identical
//! conditions and ranks them.

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod report;
pub mod simd;
pub mod strategies;
pub mod validate;

pub use config::BenchConfig;
pub use error::BenchError;
pub use harness::{measure, run_all, TimingRecord};
