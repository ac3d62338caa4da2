//! Multinomial scattering of work-units across the core pool.
//!
//! Every unit is assigned independently and uniformly to one of the cores,
//! realised as a sequence of conditional binomial draws so the cost is
//! O(core_count) instead of O(total_units).

use rand::Rng;
use rand_distr::{Binomial, Distribution};

/// Scatters `total_units` across `core_count` bins with uniform per-bin
/// probability. The returned allocation always has length `core_count` and
/// sums exactly to `total_units`.
///
/// Bin i receives a Binomial(remaining, 1/(bins left)) draw conditioned on
/// the units already placed, which is exactly the multinomial distribution.
pub fn distribute<R: Rng>(rng: &mut R, total_units: u64, core_count: usize) -> Vec<u64> {
    let mut allocation = vec![0u64; core_count];
    let mut remaining = total_units;
    for i in 0..core_count {
        if remaining == 0 {
            break;
        }
        let bins_left = (core_count - i) as u64;
        if bins_left == 1 {
            allocation[i] = remaining;
            break;
        }
        let draw = Binomial::new(remaining, 1.0 / bins_left as f64)
            .expect("probability is within (0, 1)")
            .sample(rng);
        allocation[i] = draw;
        remaining -= draw;
    }
    allocation
}

/// Number of fixed-size transmission chunks a single work-package splits
/// into. Integer division: the sub-chunk remainder of a package is dropped.
pub fn chunks_per_package(work_package_bytes: u64, chunk_size_bytes: u64) -> u64 {
    work_package_bytes / chunk_size_bytes
}
