use std::fmt;

use super::ResolveError;

/// What a single invocation is asked to do.
///
/// The three `*Only` modes work from an existing result folder and therefore
/// relax or tighten the requirements on the other options.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Full,
    PlotOnly,
    StatsOnly,
    RescaleOnly,
}

impl RunMode {
    pub fn from_flags(
        plot_only: bool,
        stats_only: bool,
        rescale_only: bool,
    ) -> Result<Self, ResolveError> {
        match (plot_only, stats_only, rescale_only) {
            (false, false, false) => Ok(Self::Full),
            (true, false, false) => Ok(Self::PlotOnly),
            (false, true, false) => Ok(Self::StatsOnly),
            (false, false, true) => Ok(Self::RescaleOnly),
            _ => Err(ResolveError::usage(
                "The options --plot-only, --stats-only and --rescale-only are mutually exclusive",
            )),
        }
    }

    /// Command line flag selecting this mode
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Self::Full => None,
            Self::PlotOnly => Some("--plot-only"),
            Self::StatsOnly => Some("--stats-only"),
            Self::RescaleOnly => Some("--rescale-only"),
        }
    }

    pub fn requires_input(&self) -> bool {
        matches!(self, Self::Full | Self::RescaleOnly)
    }

    pub fn requires_reference(&self) -> bool {
        !matches!(self, Self::PlotOnly)
    }

    /// Input and reference must exist on disk (or be stdin)
    pub fn checks_input_files(&self) -> bool {
        matches!(self, Self::Full | Self::RescaleOnly)
    }

    /// The output folder must be given explicitly and must already exist
    pub fn requires_result_folder(&self) -> bool {
        !matches!(self, Self::Full)
    }

    pub fn requires_statistics(&self) -> bool {
        matches!(self, Self::StatsOnly | Self::RescaleOnly)
    }

    /// Whether --refplot is bounded by --around
    pub fn checks_flank_limit(&self) -> bool {
        !matches!(self, Self::PlotOnly)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Full => "full",
            Self::PlotOnly => "plot-only",
            Self::StatsOnly => "stats-only",
            Self::RescaleOnly => "rescale-only",
        };
        write!(f, "{s}")
    }
}
