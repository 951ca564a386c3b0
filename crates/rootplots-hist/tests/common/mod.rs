//! Shared utilities for histogram integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use rand::prelude::*;
use rootplots_hist::{BinnedContent, HistND};

pub const EPSILON: f64 = 1e-9;

/// A 3-D histogram filled with `n` seeded random weighted points,
/// roughly 10% of which fall outside the axes
pub fn random_3d(n: usize, seed: u64) -> HistND {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut h = HistND::new(3, &[0.0, -1.0, 10.0], &[4.0, 1.0, 20.0], &[4, 5, 6])
        .unwrap()
        .with_title("random");
    for _ in 0..n {
        let position = [
            rng.gen_range(-0.2..4.2),
            rng.gen_range(-1.05..1.05),
            rng.gen_range(9.8..20.2),
        ];
        h.fill_pos(&position, rng.gen_range(0.1..2.0)).unwrap();
    }
    h
}

/// Sum of every cell content
pub fn total_content<B: BinnedContent + ?Sized>(h: &B) -> f64 {
    h.cells_contents().iter().sum()
}
