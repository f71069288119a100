//! Plain-text records in the competition format.
//!
//! An input record starts with `nsamples reqlength maxnoise`, followed by
//! `nsamples` integers. An output record lists the 1-based start of every
//! silent window, or the single token `NONE`.
//!
//! Everything in this crate outside of this module uses 0-based positions.

use crate::silence::{find_silences, SilenceParams};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

/// Token marking an output record without silences.
pub const NONE: &str = "NONE";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing header field `{0}`")]
    MissingHeader(&'static str),
    #[error("invalid integer `{token}` for {field}")]
    InvalidInteger { token: String, field: &'static str },
    #[error("window length must be positive")]
    ZeroLength,
    #[error("noise tolerance must be non-negative, got {0}")]
    NegativeNoise(i64),
    #[error("expected {expected} samples, found {found}")]
    SampleCount { expected: usize, found: usize },
    #[error("window starts are 1-based, got {0}")]
    InvalidStart(i64),
}

fn parse_int<T: FromStr>(token: &str, field: &'static str) -> Result<T, RecordError> {
    token.parse().map_err(|_| RecordError::InvalidInteger {
        token: token.to_string(),
        field,
    })
}

fn read(path: &Path) -> Result<String, RecordError> {
    fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// A parsed input record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub samples: Vec<i64>,
    pub params: SilenceParams,
}

impl Problem {
    /// 0-based starts of the silent windows.
    pub fn solve(&self) -> Vec<usize> {
        find_silences(&self.samples, self.params.reqlength, self.params.maxnoise)
    }

    pub fn read(path: &Path) -> Result<Self, RecordError> {
        let problem: Self = read(path)?.parse()?;
        log::debug!(
            "{}: {} samples, reqlength {}, maxnoise {}",
            path.display(),
            problem.samples.len(),
            problem.params.reqlength,
            problem.params.maxnoise
        );
        Ok(problem)
    }

    /// Serialize back into an input record.
    pub fn to_record(&self) -> String {
        format!(
            "{} {} {}\n{}\n",
            self.samples.len(),
            self.params.reqlength,
            self.params.maxnoise,
            self.samples.iter().join(" ")
        )
    }
}

impl FromStr for Problem {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut header =
            |field: &'static str| tokens.next().ok_or(RecordError::MissingHeader(field));
        let nsamples: usize = parse_int(header("nsamples")?, "nsamples")?;
        let reqlength: usize = parse_int(header("reqlength")?, "reqlength")?;
        let maxnoise: i64 = parse_int(header("maxnoise")?, "maxnoise")?;
        if reqlength == 0 {
            return Err(RecordError::ZeroLength);
        }
        let maxnoise =
            u64::try_from(maxnoise).map_err(|_| RecordError::NegativeNoise(maxnoise))?;

        let samples = tokens
            .map(|token| parse_int(token, "sample"))
            .collect::<Result<Vec<i64>, _>>()?;
        if samples.len() != nsamples {
            return Err(RecordError::SampleCount {
                expected: nsamples,
                found: samples.len(),
            });
        }
        Ok(Problem {
            samples,
            params: SilenceParams {
                reqlength,
                maxnoise,
            },
        })
    }
}

/// Parse an output record into 0-based window starts. `NONE` tokens are skipped.
pub fn parse_silences(s: &str) -> Result<Vec<usize>, RecordError> {
    s.split_whitespace()
        .filter(|&token| token != NONE)
        .map(|token| {
            let start: i64 = parse_int(token, "window start")?;
            usize::try_from(start)
                .ok()
                .and_then(|start| start.checked_sub(1))
                .ok_or(RecordError::InvalidStart(start))
        })
        .collect()
}

pub fn read_silences(path: &Path) -> Result<Vec<usize>, RecordError> {
    parse_silences(&read(path)?)
}

/// Format 0-based window starts as an output record.
pub fn format_silences(silences: &[usize]) -> String {
    if silences.is_empty() {
        return format!("{NONE}\n");
    }
    silences.iter().map(|start| format!("{}\n", start + 1)).collect()
}

/// The output record belonging to an input record: `sound.i07` -> `sound.o07`.
pub fn expected_path(input: &Path) -> Option<PathBuf> {
    let ext = input.extension()?.to_str()?;
    let rest = ext.strip_prefix('i')?;
    Some(input.with_extension(format!("o{rest}")))
}

/// The outcome of solving one input record and comparing against its output record.
#[derive(Clone, Debug, Serialize)]
pub struct CheckReport {
    pub input: PathBuf,
    pub params: SilenceParams,
    pub num_samples: usize,
    /// 0-based starts found.
    pub found: Vec<usize>,
    /// 0-based starts from the output record.
    pub expected: Vec<usize>,
}

impl CheckReport {
    pub fn ok(&self) -> bool {
        self.found == self.expected
    }
}

/// Solve `input` and compare with the output record at `expected`.
pub fn check(input: &Path, expected: &Path) -> Result<CheckReport, RecordError> {
    let problem = Problem::read(input)?;
    let expected = read_silences(expected)?;
    Ok(CheckReport {
        input: input.to_path_buf(),
        params: problem.params,
        num_samples: problem.samples.len(),
        found: problem.solve(),
        expected,
    })
}
