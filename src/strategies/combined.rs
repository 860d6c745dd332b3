//! Vector chunks spread across the rayon pool: intra-chunk vectorization,
//! inter-chunk parallelism.

use rayon::prelude::*;

use crate::config::BenchConfig;
use crate::simd::lane_width;

/// Workers are handed whole lane-width chunks, so a chunk is never split
/// between threads and the vector kernel never straddles a partition
/// boundary. One scalar pass covers the tail the chunks missed, then the
/// filter runs on the pool as in the data-parallel strategy.
pub fn run(_config: &BenchConfig, raw: &[i32]) -> Vec<i32> {
    let width = lane_width();
    let full = raw.len() - raw.len() % width;

    let mut transformed = vec![0i32; raw.len()];
    let (head, tail) = transformed.split_at_mut(full);

    head.par_chunks_exact_mut(width)
        .zip(raw[..full].par_chunks_exact(width))
        .for_each(|(dst, src)| {
            for lane in 0..width {
                dst[lane] = src[lane] * 2;
            }
        });

    for (d, &value) in tail.iter_mut().zip(&raw[full..]) {
        *d = value * 2;
    }

    transformed
        .par_iter()
        .copied()
        .filter(|v| v % 3 == 0)
        .collect()
}
