//! Single-threaded vector-chunked transform, parallel filter.

use rayon::prelude::*;

use crate::config::BenchConfig;
use crate::simd::{double_chunked, lane_width};

/// The transform reads the dataset directly in lane-width chunks (extraction
/// folds into the vector load) and finishes the tail with a scalar loop. The
/// filter is independent of the vectorization choice and runs on the rayon
/// pool like the data-parallel strategy's.
pub fn run(_config: &BenchConfig, raw: &[i32]) -> Vec<i32> {
    let width = lane_width();

    let mut transformed = vec![0i32; raw.len()];
    double_chunked(raw, &mut transformed, width);

    transformed
        .par_iter()
        .copied()
        .filter(|v| v % 3 == 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::sequential;
    use crate::validate::multiset_signature;

    #[test]
    fn test_matches_sequential_on_unaligned_lengths() {
        let config = BenchConfig::default();
        let width = lane_width();

        // One short of a chunk boundary, exactly on one, and one past it.
        for len in [width * 8 - 1, width * 8, width * 8 + 1] {
            let raw: Vec<i32> = (0..len).map(|i| (i as i32 % 99) + 1).collect();
            let expected = multiset_signature(&sequential::run(&config, &raw));
            assert_eq!(multiset_signature(&run(&config, &raw)), expected, "len {len}");
        }
    }

    #[test]
    fn test_dataset_smaller_than_one_chunk() {
        let config = BenchConfig::default();
        assert_eq!(
            multiset_signature(&run(&config, &[3, 9])),
            multiset_signature(&[6, 18])
        );
    }
}
