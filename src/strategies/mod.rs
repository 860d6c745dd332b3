//! The six strategy implementations, one module per concurrency discipline.

pub mod combined;
pub mod data_parallel;
pub mod pipeline;
pub mod sequential;
pub mod simd;
pub mod task_parallel;

use crate::config::BenchConfig;

/// A complete extract/transform/filter implementation under one scheduling
/// discipline. Strategies read the dataset through a shared slice and return
/// the filtered output; output order is strategy-dependent, only the multiset
/// of values is comparable across strategies.
pub struct Strategy {
    pub label: &'static str,
    pub run: fn(&BenchConfig, &[i32]) -> Vec<i32>,
}

/// The benchmark lineup, in the order the harness executes it.
pub fn lineup() -> Vec<Strategy> {
    vec![
        Strategy {
            label: "Sequential",
            run: sequential::run,
        },
        Strategy {
            label: "Task Parallel",
            run: task_parallel::run,
        },
        Strategy {
            label: "Data Parallel",
            run: data_parallel::run,
        },
        Strategy {
            label: "Pipeline Parallel",
            run: pipeline::run,
        },
        Strategy {
            label: "SIMD",
            run: simd::run,
        },
        Strategy {
            label: "Combined (SIMD + Data Parallel)",
            run: combined::run,
        },
    ]
}
