//! Single-threaded baseline: the correctness and performance reference.

use crate::config::BenchConfig;

/// Every stage runs on the calling thread in index order.
pub fn run(_config: &BenchConfig, raw: &[i32]) -> Vec<i32> {
    let extracted = raw.to_vec();

    let mut transformed = vec![0i32; extracted.len()];
    for (i, &value) in extracted.iter().enumerate() {
        transformed[i] = value * 2;
    }

    let mut loaded = Vec::with_capacity(raw.len() / 3);
    for &value in &transformed {
        if value % 3 == 0 {
            loaded.push(value);
        }
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_doubled_multiples_of_three_in_order() {
        let config = BenchConfig::default();
        assert_eq!(run(&config, &[3, 4, 6, 7, 9]), vec![6, 12, 18]);
    }

    #[test]
    fn test_nothing_retained_when_no_multiples() {
        let config = BenchConfig::default();
        assert!(run(&config, &[1, 2, 4, 5]).is_empty());
    }
}
