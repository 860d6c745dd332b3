//! Benchmark parameters with positional command-line overrides.

use crate::error::BenchError;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of elements in the shared dataset.
    pub data_size: usize,
    /// Inclusive bounds for generated values.
    pub value_range: (i32, i32),
    /// Capacity of each bounded queue in the pipeline strategy.
    pub queue_capacity: usize,
    /// Worker count for the manually partitioned strategy.
    pub workers: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            data_size: 10_000_000,
            value_range: (1, 99),
            queue_capacity: 10_000,
            workers: num_cpus::get(),
        }
    }
}

impl BenchConfig {
    /// Positional overrides: `parallel-etl [data_size] [workers]`.
    /// Anything not supplied keeps its default.
    pub fn from_args(args: impl Iterator<Item = String>) -> Result<Self, BenchError> {
        let args: Vec<String> = args.collect();
        let mut config = BenchConfig::default();

        if let Some(arg) = args.first() {
            config.data_size = parse_count(arg, "data_size")?;
        }
        if let Some(arg) = args.get(1) {
            config.workers = parse_count(arg, "workers")?;
        }
        Ok(config)
    }
}

fn parse_count(arg: &str, field: &str) -> Result<usize, BenchError> {
    arg.parse().map_err(|_| BenchError::InvalidArgument {
        arg: arg.to_string(),
        reason: format!("{field} must be a non-negative integer"),
    })
}
