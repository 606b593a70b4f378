use std::{fmt, path::PathBuf};

use super::{ResolveError, RunMode};

mod getters;
mod mk_config;
mod rules;
mod stages;

pub use stages::{PlotOptions, RescaleOptions, Stage, StatsOptions};

/// Highest Phred score accepted for --min-basequal
pub const MAX_BASE_QUALITY: u8 = 41;

/// Suffix replacing the input extension for the rescaled BAM
pub const RESCALED_SUFFIX: &str = ".rescaled.bam";

/// Prefix of the default output folder name
pub const RESULTS_PREFIX: &str = "results_";

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Downsample {
    /// Keep this fraction of the reads
    Fraction(f64),
    /// Keep this many reads
    Count(u64),
}

impl Downsample {
    pub fn from_value(x: f64) -> Result<Self, ResolveError> {
        if !(x.is_finite() && x > 0.0) {
            Err(ResolveError::usage("-n/--downsample must be a positive value"))
        } else if x >= u64::MAX as f64 {
            Err(ResolveError::usage(format!(
                "-n/--downsample must not exceed {} reads",
                u64::MAX
            )))
        } else if x >= 1.0 {
            Ok(Self::Count(x.trunc() as u64))
        } else {
            Ok(Self::Fraction(x))
        }
    }
}

impl fmt::Display for Downsample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Fraction(x) => write!(f, "{x}"),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Fully checked run parameters handed to the processing stages
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    mode: RunMode,

    // Input
    input: Vec<PathBuf>,
    reference: Option<PathBuf>,
    downsample: Option<Downsample>,
    downsample_seed: Option<u64>,
    merge_reference_sequences: bool,

    // Read selection
    read_length: usize,
    flank_length: usize,
    min_base_quality: u8,

    // Output
    output_folder: PathBuf,

    // Plotting
    plot_enabled: bool,
    plot_y_max: f64,
    plot_read_length: usize,
    plot_flank_length: usize,
    plot_title: String,

    // Statistical estimation
    stats_enabled: bool,
    stats: StatsOptions,

    // Rescaling
    rescale: bool,
    rescale_output: Option<PathBuf>,
    rescale_length_5p: usize,
    rescale_length_3p: usize,
}
