//! Print the silences of a random signal, one window per line.

use clap::Parser;
use itertools::Itertools;
use silences::{generate_random_samples, SilenceFinder, SilenceParams};

#[derive(clap::Parser)]
struct Args {
    #[clap(short, default_value_t = 60)]
    n: usize,
    #[clap(short, default_value_t = 4)]
    l: usize,
    #[clap(short, default_value_t = 1)]
    m: u64,
}

fn main() {
    let Args { n, l, m } = Args::parse();
    let samples = generate_random_samples(n, 2, 213456);

    let mut finder = SilenceFinder::new(SilenceParams {
        reqlength: l,
        maxnoise: m,
    });
    let mut silences = samples
        .iter()
        .filter_map(|&s| finder.push(s))
        .collect_vec();
    silences.extend(finder.finish());

    eprintln!("samples: {}", samples.iter().join(" "));
    for i in &silences {
        let window = &samples[*i..*i + l];
        eprintln!("{i:>4}: {:?}", window);
    }
    eprintln!(
        "{} of {} windows are silent",
        silences.len(),
        (n + 1).saturating_sub(l)
    );
}
