use std::{
    fmt,
    path::{Path, PathBuf},
};

use super::{Config, RunMode};

/// Downstream processing steps a resolved configuration asks for
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Parse alignments and count misincorporations
    Count,
    Plot,
    Stats,
    Rescale,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Count => "count",
            Self::Plot => "plot",
            Self::Stats => "stats",
            Self::Rescale => "rescale",
        };
        write!(f, "{s}")
    }
}

/// Options passed to the statistical estimation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatsOptions {
    pub rand: usize,
    pub burn: usize,
    pub adjust: usize,
    pub iter: usize,
    pub forward: bool,
    pub reverse: bool,
    pub var_disp: bool,
    pub jukes_cantor: bool,
    pub diff_hangs: bool,
    pub fix_nicks: bool,
    pub use_raw_nick_freq: bool,
    pub single_stranded: bool,
    pub theme_bw: bool,
    pub seq_length: usize,
}

/// Options passed to the plotting stage
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlotOptions<'a> {
    pub folder: &'a Path,
    pub title: &'a str,
    pub y_max: f64,
    pub read_length: usize,
    pub flank_length: usize,
}

/// Options passed to the rescaling stage
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RescaleOptions<'a> {
    pub input: &'a [PathBuf],
    pub reference: &'a Path,
    pub output: &'a Path,
    pub length_5p: usize,
    pub length_3p: usize,
}

impl Config {
    pub fn stages(&self) -> Vec<Stage> {
        let mut v = Vec::with_capacity(4);
        match self.mode {
            RunMode::Full => {
                v.push(Stage::Count);
                if self.plot_enabled {
                    v.push(Stage::Plot)
                }
                if self.stats_enabled {
                    v.push(Stage::Stats)
                }
                if self.rescale {
                    v.push(Stage::Rescale)
                }
            }
            RunMode::PlotOnly => {
                if self.plot_enabled {
                    v.push(Stage::Plot)
                }
            }
            RunMode::StatsOnly => {
                v.push(Stage::Stats);
                if self.rescale {
                    v.push(Stage::Rescale)
                }
            }
            RunMode::RescaleOnly => v.push(Stage::Rescale),
        }
        v
    }

    pub fn plot_options(&self) -> PlotOptions<'_> {
        PlotOptions {
            folder: &self.output_folder,
            title: &self.plot_title,
            y_max: self.plot_y_max,
            read_length: self.plot_read_length,
            flank_length: self.plot_flank_length,
        }
    }

    /// Only present when rescaling was asked for
    pub fn rescale_options(&self) -> Option<RescaleOptions<'_>> {
        match (&self.rescale_output, &self.reference) {
            (Some(output), Some(reference)) => Some(RescaleOptions {
                input: &self.input,
                reference,
                output,
                length_5p: self.rescale_length_5p,
                length_3p: self.rescale_length_3p,
            }),
            _ => None,
        }
    }
}
