pub mod monotone_queue;
pub mod naive;
pub mod record;
pub mod silence;

pub use monotone_queue::{MaxQueue, MinQueue, MonotoneQueue};
pub use record::{Problem, RecordError};
pub use silence::{find_silences, SilenceFinder, SilenceParams};

use rand::Rng;
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};

/// Generate `n` random samples in `[-amplitude, amplitude]`.
pub fn generate_random_samples(n: usize, amplitude: i64, seed: u64) -> Vec<i64> {
    assert!(amplitude >= 0);
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..n)
        .map(|_| rng.gen_range(-amplitude..=amplitude))
        .collect()
}

#[cfg(test)]
#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}
