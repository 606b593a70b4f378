use std::path::{Path, PathBuf};

use super::{Config, Downsample, RunMode, StatsOptions};

impl Config {
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn input(&self) -> &[PathBuf] {
        &self.input
    }

    pub fn reference(&self) -> Option<&Path> {
        self.reference.as_deref()
    }

    pub fn downsample(&self) -> Option<Downsample> {
        self.downsample
    }

    pub fn downsample_seed(&self) -> Option<u64> {
        self.downsample_seed
    }

    pub fn merge_reference_sequences(&self) -> bool {
        self.merge_reference_sequences
    }

    pub fn read_length(&self) -> usize {
        self.read_length
    }

    pub fn flank_length(&self) -> usize {
        self.flank_length
    }

    pub fn min_base_quality(&self) -> u8 {
        self.min_base_quality
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    pub fn plot_enabled(&self) -> bool {
        self.plot_enabled
    }

    pub fn plot_y_max(&self) -> f64 {
        self.plot_y_max
    }

    pub fn plot_read_length(&self) -> usize {
        self.plot_read_length
    }

    pub fn plot_flank_length(&self) -> usize {
        self.plot_flank_length
    }

    pub fn plot_title(&self) -> &str {
        &self.plot_title
    }

    pub fn stats_enabled(&self) -> bool {
        self.stats_enabled
    }

    pub fn stats_options(&self) -> &StatsOptions {
        &self.stats
    }

    pub fn seq_length(&self) -> usize {
        self.stats.seq_length
    }

    pub fn rescale(&self) -> bool {
        self.rescale
    }

    pub fn rescale_output(&self) -> Option<&Path> {
        self.rescale_output.as_deref()
    }

    pub fn rescale_length_5p(&self) -> usize {
        self.rescale_length_5p
    }

    pub fn rescale_length_3p(&self) -> usize {
        self.rescale_length_3p
    }
}
