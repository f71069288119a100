use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use silences::{
    find_silences, generate_random_samples,
    naive::find_silences_naive,
    record::{self, format_silences, CheckReport},
    Problem,
};

#[derive(clap::Subcommand)]
enum Command {
    /// Solve one input record and print the output record.
    Solve {
        input: PathBuf,
        /// Write the output record here instead of stdout.
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Solve input records `NAME.iXX` and compare with `NAME.oXX`.
    Check {
        #[clap(required = true)]
        inputs: Vec<PathBuf>,
        /// Print the reports as json.
        #[clap(long)]
        json: bool,
    },
    /// Compare against the brute-force solution on random samples.
    Random {
        /// Number of samples.
        #[clap(short, default_value_t = 100000)]
        n: usize,
        /// Window length.
        #[clap(short = 'l', long, default_value_t = 16)]
        reqlength: usize,
        /// Noise tolerance.
        #[clap(short = 'm', long, default_value_t = 2)]
        maxnoise: u64,
        /// Samples are drawn from [-a, a].
        #[clap(short, long, default_value_t = 3)]
        amplitude: i64,
        #[clap(long, default_value_t = 213456)]
        seed: u64,
    },
}

/// Find windows of samples whose range stays within a noise tolerance.
#[derive(clap::Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Serialize)]
struct RandomResult {
    n: usize,
    reqlength: usize,
    maxnoise: u64,
    amplitude: i64,
    silences: usize,
    agrees: bool,
}

fn check(inputs: &[PathBuf], json: bool) -> Result<bool> {
    let reports = inputs
        .par_iter()
        .map(|input| -> Result<CheckReport> {
            let expected = record::expected_path(input).with_context(|| {
                format!(
                    "no output record for {}: expected extension .iXX",
                    input.display()
                )
            })?;
            info!("Checking {} against {}", input.display(), expected.display());
            Ok(record::check(input, &expected)?)
        })
        .collect::<Result<Vec<CheckReport>>>()?;

    for report in &reports {
        if !report.ok() {
            warn!("{}: found != expected", report.input.display());
        }
    }
    if json {
        println!("{}", serde_json::to_string(&reports)?);
    } else {
        for report in &reports {
            println!("> {}", report.input.display());
            println!(
                "reqlength: {} maxnoise: {}",
                report.params.reqlength, report.params.maxnoise
            );
            println!("Found == Expected? {}", report.ok());
            if !report.ok() {
                println!("found    {}", format_silences(&report.found).trim_end());
                println!("expected {}", format_silences(&report.expected).trim_end());
            }
        }
    }
    Ok(reports.iter().all(CheckReport::ok))
}

fn main() -> Result<ExitCode> {
    color_backtrace::install();
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Solve { input, output } => {
            let problem = Problem::read(&input)?;
            let start = Instant::now();
            let silences = problem.solve();
            info!(
                "{}: {} silences in {:?}",
                input.display(),
                silences.len(),
                start.elapsed()
            );
            let out = format_silences(&silences);
            match output {
                Some(path) => fs::write(&path, out)
                    .with_context(|| format!("could not write {}", path.display()))?,
                None => print!("{out}"),
            }
        }
        Command::Check { inputs, json } => {
            if !check(&inputs, json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Random {
            n,
            reqlength,
            maxnoise,
            amplitude,
            seed,
        } => {
            if reqlength == 0 {
                bail!("window length must be positive");
            }
            if amplitude < 0 {
                bail!("amplitude must be non-negative");
            }
            let samples = generate_random_samples(n, amplitude, seed);

            let start = Instant::now();
            let silences = find_silences(&samples, reqlength, maxnoise);
            let t_queue = start.elapsed();
            let start = Instant::now();
            let naive = find_silences_naive(&samples, reqlength, maxnoise);
            let t_naive = start.elapsed();
            eprintln!("  queue: {t_queue:?}   naive: {t_naive:?}");

            let result = RandomResult {
                n,
                reqlength,
                maxnoise,
                amplitude,
                silences: silences.len(),
                agrees: silences == naive,
            };
            println!("{}", serde_json::to_string(&result)?);
            if !result.agrees {
                warn!("queue and naive silences differ");
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
