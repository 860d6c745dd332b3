//! Result-validation scaffolding shared by the harness and the tests.

use std::collections::HashMap;

/// Order-insensitive signature of a result collection: value → multiplicity.
/// Two strategies agree exactly when their signatures are equal.
pub fn multiset_signature(values: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// How many elements the filter should keep for a given source: doubling
/// neither creates nor destroys divisibility by 3, so it is exactly the
/// count of source multiples of 3.
pub fn expected_len(raw: &[i32]) -> usize {
    raw.iter().filter(|&&v| v % 3 == 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_ignores_order_but_not_multiplicity() {
        assert_eq!(multiset_signature(&[6, 12, 6]), multiset_signature(&[12, 6, 6]));
        assert_ne!(multiset_signature(&[6, 12]), multiset_signature(&[6, 12, 12]));
    }

    #[test]
    fn test_expected_len_counts_multiples_of_three() {
        assert_eq!(expected_len(&[3, 4, 6, 7, 9]), 3);
        assert_eq!(expected_len(&[]), 0);
    }
}
