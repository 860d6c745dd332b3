//! Rayon data parallelism: every stage is a parallel iterator and the
//! work-stealing pool owns the partitioning.

use rayon::prelude::*;

use crate::config::BenchConfig;

/// Index-level parallelism within each stage; stages still run one after
/// another. The filter's parallel collect is the thread-safe append.
pub fn run(_config: &BenchConfig, raw: &[i32]) -> Vec<i32> {
    let extracted: Vec<i32> = raw.par_iter().copied().collect();

    let mut transformed = vec![0i32; extracted.len()];
    transformed
        .par_iter_mut()
        .zip(extracted.par_iter())
        .for_each(|(dst, &value)| *dst = value * 2);

    transformed
        .par_iter()
        .copied()
        .filter(|v| v % 3 == 0)
        .collect()
}
