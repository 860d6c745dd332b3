//! Shared dataset generation.

use rand::Rng;

use crate::config::BenchConfig;

/// Generate the dataset every strategy reads: `data_size` integers drawn
/// uniformly from the configured value range. Generated once per run and
/// shared read-only from then on.
pub fn generate(config: &BenchConfig) -> Vec<i32> {
    let (lo, hi) = config.value_range;
    let mut rng = rand::thread_rng();
    (0..config.data_size).map(|_| rng.gen_range(lo..=hi)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_respects_size_and_range() {
        let config = BenchConfig {
            data_size: 10_000,
            ..BenchConfig::default()
        };
        let data = generate(&config);
        assert_eq!(data.len(), 10_000);
        assert!(data.iter().all(|&v| (1..=99).contains(&v)));
    }

    #[test]
    fn test_generate_empty() {
        let config = BenchConfig {
            data_size: 0,
            ..BenchConfig::default()
        };
        assert!(generate(&config).is_empty());
    }
}
