use crate::monotone_queue::{MaxQueue, MinQueue};
use serde::{Deserialize, Serialize};

/// Window length and noise tolerance of a silence query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilenceParams {
    /// Number of consecutive samples in a window. Must be positive.
    pub reqlength: usize,
    /// Largest allowed `max - min` inside a silent window.
    pub maxnoise: u64,
}

/// Slides a window of `reqlength` samples over a sequence and reports the
/// windows whose range is at most `maxnoise`.
///
/// A window is evaluated one step after it fills up: each `push` first checks
/// the full window (if any) and slides it, and only then adds the new sample.
/// `finish` evaluates the window ending at the last sample.
#[derive(Debug)]
pub struct SilenceFinder {
    params: SilenceParams,
    mins: MinQueue<i64>,
    maxs: MaxQueue<i64>,
    /// Number of samples pushed so far.
    pos: usize,
}

impl SilenceFinder {
    pub fn new(params: SilenceParams) -> Self {
        assert!(params.reqlength > 0, "window length must be positive");
        Self {
            params,
            mins: MinQueue::new(),
            maxs: MaxQueue::new(),
            pos: 0,
        }
    }

    pub fn params(&self) -> SilenceParams {
        self.params
    }

    /// Check the current window, if full, and slide it forward.
    /// Returns the 0-based start of that window when it is silent.
    fn evaluate(&mut self) -> Option<usize> {
        let reqlength = self.params.reqlength;
        if self.mins.size() < reqlength || self.maxs.size() < reqlength {
            return None;
        }
        let max = *self.maxs.front().expect("reqlength > 0");
        let min = *self.mins.front().expect("reqlength > 0");
        let noise = max.abs_diff(min);
        self.mins.pop();
        self.maxs.pop();
        (noise <= self.params.maxnoise).then(|| self.pos - reqlength)
    }

    /// Feed the next sample.
    /// Returns the start of the preceding full window if it is silent.
    pub fn push(&mut self, sample: i64) -> Option<usize> {
        let silence = self.evaluate();
        self.mins.push(sample);
        self.maxs.push(sample);
        self.pos += 1;
        silence
    }

    /// Evaluate the window ending at the last pushed sample.
    pub fn finish(mut self) -> Option<usize> {
        self.evaluate()
    }
}

/// Start positions of all windows of `reqlength` samples with `max - min <= maxnoise`.
/// Positions are 0-based and increasing.
pub fn find_silences(samples: &[i64], reqlength: usize, maxnoise: u64) -> Vec<usize> {
    let mut finder = SilenceFinder::new(SilenceParams {
        reqlength,
        maxnoise,
    });
    let mut silences = Vec::with_capacity(samples.len().saturating_sub(reqlength) + 1);
    silences.extend(samples.iter().filter_map(|&sample| finder.push(sample)));
    silences.extend(finder.finish());
    silences
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::naive::find_silences_naive;
    use itertools::Itertools;
    use rand::Rng;

    #[test]
    fn rising_and_falling() {
        let samples = [1, 2, 3, 2, 1, 0, 1, 2];
        assert_eq!(find_silences(&samples, 3, 1), [1, 4]);
    }

    #[test]
    fn constant() {
        assert_eq!(find_silences(&[5, 5, 5, 5], 2, 0), [0, 1, 2]);
    }

    #[test]
    fn window_longer_than_input() {
        assert!(find_silences(&[1, 1, 1], 4, 100).is_empty());
        assert!(find_silences(&[], 1, 0).is_empty());
    }

    #[test]
    fn single_sample_windows() {
        let samples = [7, -3, 12, 0, 0, 99];
        assert_eq!(find_silences(&samples, 1, 0), (0..samples.len()).collect_vec());
    }

    #[test]
    fn whole_input_window() {
        assert_eq!(find_silences(&[4, 0, 2], 3, 4), [0]);
        assert!(find_silences(&[4, 0, 2], 3, 3).is_empty());
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let samples = [i64::MIN, i64::MAX, i64::MAX];
        assert_eq!(find_silences(&samples, 2, u64::MAX), [0, 1]);
        assert_eq!(find_silences(&samples, 2, 0), [1]);
    }

    #[test]
    fn last_window_is_evaluated() {
        // Only `finish` sees the window ending at the last sample.
        assert_eq!(find_silences(&[9, 10, 10], 2, 0), [1]);
        assert_eq!(find_silences(&[-10, -10], 2, 0), [0]);
    }

    #[test]
    #[should_panic]
    fn zero_length_window() {
        find_silences(&[1, 2], 0, 0);
    }

    #[test]
    fn incremental() {
        let mut finder = SilenceFinder::new(SilenceParams {
            reqlength: 2,
            maxnoise: 1,
        });
        assert_eq!(finder.push(3), None);
        assert_eq!(finder.push(4), None);
        // [3, 4] is evaluated once the next sample arrives.
        assert_eq!(finder.push(8), Some(0));
        assert_eq!(finder.push(8), None);
        assert_eq!(finder.finish(), Some(2));
    }

    #[test]
    fn random_matches_naive() {
        let mut rng = rand::thread_rng();
        for _ in 0..2000 {
            let len = rng.gen_range(0..40);
            let amplitude = rng.gen_range(1..8);
            let samples = (0..len)
                .map(|_| rng.gen_range(-amplitude..=amplitude))
                .collect_vec();
            let reqlength = rng.gen_range(1..=len + 2);
            let maxnoise = rng.gen_range(0..=2 * amplitude as u64);
            let silences = find_silences(&samples, reqlength, maxnoise);
            assert_eq!(
                silences,
                find_silences_naive(&samples, reqlength, maxnoise),
                "samples={samples:?} reqlength={reqlength} maxnoise={maxnoise}"
            );
            assert!(silences.iter().tuple_windows().all(|(a, b)| a < b));
            // No state leaks between runs.
            assert_eq!(silences, find_silences(&samples, reqlength, maxnoise));
        }
    }
}
