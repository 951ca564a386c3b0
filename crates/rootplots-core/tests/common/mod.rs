//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Bin counts that exercise single-bin axes, primes and powers of two
pub fn edge_case_bin_counts() -> Vec<usize> {
    vec![1, 2, 3, 7, 10, 16, 31, 100]
}
