//! Shannon entropy over a string's character distribution.

use std::collections::BTreeMap;

/// Base-2 Shannon entropy of `s` over its character (code point) counts.
/// Empty and single-character strings have zero entropy.
///
/// Counts are kept in a `BTreeMap` so the summation order (and therefore the
/// floating-point result) is deterministic across calls.
pub fn shannon_entropy(s: &str) -> f64 {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut len = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }
    if len == 0 {
        return 0.0;
    }
    let len = len as f64;
    -counts
        .values()
        .map(|&n| {
            let p = n as f64 / len;
            p * p.log2()
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn uniform_single_char_is_zero() {
        assert_eq!(shannon_entropy("aaaa"), 0.0);
    }

    #[test]
    fn two_equally_likely_chars_is_one_bit() {
        assert!((shannon_entropy("abab") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn four_distinct_chars_is_two_bits() {
        assert!((shannon_entropy("abcd") - 2.0).abs() < 1e-12);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(shannon_entropy("aabb"), shannon_entropy("abab"));
    }
}
