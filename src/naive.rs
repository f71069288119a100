use itertools::{Itertools, MinMaxResult};

/// Brute-force reference: compute the range of every window from scratch.
/// Takes O(n * reqlength) time.
pub fn find_silences_naive(samples: &[i64], reqlength: usize, maxnoise: u64) -> Vec<usize> {
    assert!(reqlength > 0);
    samples
        .windows(reqlength)
        .enumerate()
        .filter(|(_i, window)| match window.iter().minmax() {
            MinMaxResult::NoElements => unreachable!("reqlength > 0"),
            MinMaxResult::OneElement(_) => true,
            MinMaxResult::MinMax(min, max) => max.abs_diff(*min) <= maxnoise,
        })
        .map(|(i, _window)| i)
        .collect()
}
