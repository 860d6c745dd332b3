//! Manually partitioned worker threads: one scoped thread per slice per
//! stage, stages sequential relative to each other.

use std::sync::Mutex;
use std::thread;

use crate::config::BenchConfig;

/// Each stage splits [0, N) into `workers` contiguous slices and hands every
/// slice to its own scoped thread. The slices come from `chunks`/`chunks_mut`,
/// so no two workers can touch the same element of a stage buffer. Filter
/// workers collect locally and splice into the shared result once per worker.
pub fn run(config: &BenchConfig, raw: &[i32]) -> Vec<i32> {
    let workers = config.workers.max(1);
    let chunk = ((raw.len() + workers - 1) / workers).max(1);

    let mut extracted = vec![0i32; raw.len()];
    thread::scope(|s| {
        for (dst, src) in extracted.chunks_mut(chunk).zip(raw.chunks(chunk)) {
            s.spawn(move || dst.copy_from_slice(src));
        }
    });

    let mut transformed = vec![0i32; raw.len()];
    thread::scope(|s| {
        for (dst, src) in transformed.chunks_mut(chunk).zip(extracted.chunks(chunk)) {
            s.spawn(move || {
                for (d, &value) in dst.iter_mut().zip(src) {
                    *d = value * 2;
                }
            });
        }
    });

    let loaded = Mutex::new(Vec::with_capacity(raw.len() / 3));
    thread::scope(|s| {
        let loaded = &loaded;
        for src in transformed.chunks(chunk) {
            s.spawn(move || {
                let kept: Vec<i32> = src.iter().copied().filter(|v| v % 3 == 0).collect();
                loaded.lock().unwrap().extend_from_slice(&kept);
            });
        }
    });
    loaded.into_inner().unwrap()
}
