//! Measurement harness: times each strategy under identical conditions and
//! ranks the results.

use std::hint::black_box;
use std::thread;
use std::time::Instant;

use crate::config::BenchConfig;
use crate::strategies::Strategy;
use crate::validate::multiset_signature;

/// One timed strategy execution.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRecord {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Best-effort quiescence before the clock starts. There is no collector to
/// force here and the previous strategy's buffers were already freed at drop;
/// what remains is keeping the dataset pages hot so no strategy pays the
/// first-touch cost, and yielding so worker threads from the previous run can
/// park.
fn quiesce(raw: &[i32]) {
    let mut checksum = 0i64;
    for &value in raw {
        checksum += value as i64;
    }
    black_box(checksum);
    thread::yield_now();
}

/// Time one strategy to completion, returning its output alongside the
/// record so the caller can validate it.
pub fn measure(
    label: &str,
    config: &BenchConfig,
    raw: &[i32],
    run: fn(&BenchConfig, &[i32]) -> Vec<i32>,
) -> (Vec<i32>, TimingRecord) {
    quiesce(raw);

    let start = Instant::now();
    let loaded = run(config, raw);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    (
        loaded,
        TimingRecord {
            label: label.to_string(),
            elapsed_ms,
        },
    )
}

/// Run every strategy in lineup order, one at a time, and return the records
/// sorted fastest first. The first strategy's output is the reference; in
/// debug builds every later result is checked against its multiset.
pub fn run_all(config: &BenchConfig, raw: &[i32], strategies: &[Strategy]) -> Vec<TimingRecord> {
    let mut records = Vec::with_capacity(strategies.len());
    let mut reference = None;

    for strategy in strategies {
        println!("Running {}...", strategy.label);
        let (loaded, record) = measure(strategy.label, config, raw, strategy.run);
        println!("{} finished.", strategy.label);

        let signature = multiset_signature(&loaded);
        match &reference {
            None => reference = Some(signature),
            Some(expected) => debug_assert_eq!(
                *expected, signature,
                "{} diverged from the reference result",
                strategy.label
            ),
        }
        records.push(record);
    }

    records.sort_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::strategies::{self, sequential};

    fn small_config() -> BenchConfig {
        BenchConfig {
            data_size: 2_000,
            queue_capacity: 128,
            workers: 2,
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_measure_returns_strategy_output() {
        let config = small_config();
        let (loaded, record) = measure("Sequential", &config, &[3, 4, 6, 7, 9], sequential::run);
        assert_eq!(loaded, vec![6, 12, 18]);
        assert_eq!(record.label, "Sequential");
        assert!(record.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_run_all_one_sorted_record_per_strategy() {
        let config = small_config();
        let raw = dataset::generate(&config);
        let strategies = strategies::lineup();

        let records = run_all(&config, &raw, &strategies);
        assert_eq!(records.len(), strategies.len());

        for pair in records.windows(2) {
            assert!(pair[0].elapsed_ms <= pair[1].elapsed_ms);
        }

        let mut expected: Vec<&str> = strategies.iter().map(|s| s.label).collect();
        let mut labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        expected.sort_unstable();
        labels.sort_unstable();
        assert_eq!(labels, expected);
    }
}
