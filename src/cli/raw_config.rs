use std::path::PathBuf;

use clap::ArgMatches;

/// Options exactly as given on the command line, with defaults filled in
/// but nothing derived or checked
#[derive(Debug, Clone, PartialEq)]
pub struct RawConfig {
    // Input files
    pub input: Vec<PathBuf>,
    pub reference: Option<PathBuf>,

    // General options
    pub downsample: Option<f64>,
    pub downsample_seed: Option<u64>,
    pub merge_reference_sequences: bool,
    pub length: i64,
    pub around: i64,
    pub min_basequal: i64,
    pub folder: Option<PathBuf>,
    pub plot_only: bool,
    pub no_plot: bool,

    // Graphics
    pub ymax: f64,
    pub readplot: i64,
    pub refplot: i64,
    pub title: Option<String>,

    // Statistical estimation
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
    pub seq_length: i64,
    pub stats_only: bool,
    pub no_stats: bool,
    pub check_r_packages: bool,

    // Rescaling
    pub rescale: bool,
    pub rescale_only: bool,
    pub rescale_out: Option<PathBuf>,
    pub rescale_length_5p: Option<i64>,
    pub rescale_length_3p: Option<i64>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            reference: None,
            downsample: None,
            downsample_seed: None,
            merge_reference_sequences: false,
            length: 70,
            around: 10,
            min_basequal: 0,
            folder: None,
            plot_only: false,
            no_plot: false,
            ymax: 0.3,
            readplot: 25,
            refplot: 10,
            title: None,
            rand: 30,
            burn: 10000,
            adjust: 10,
            iter: 50000,
            forward: false,
            reverse: false,
            var_disp: false,
            jukes_cantor: false,
            diff_hangs: false,
            fix_nicks: false,
            use_raw_nick_freq: false,
            single_stranded: false,
            theme_bw: false,
            seq_length: 12,
            stats_only: false,
            no_stats: false,
            check_r_packages: false,
            rescale: false,
            rescale_only: false,
            rescale_out: None,
            rescale_length_5p: None,
            rescale_length_3p: None,
        }
    }
}

impl RawConfig {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let get_int = |id: &str| -> anyhow::Result<i64> {
            m.try_get_one::<i64>(id)?
                .copied()
                .ok_or_else(|| anyhow!("Missing default for {}", id))
        };
        let get_count = |id: &str| -> anyhow::Result<usize> {
            m.try_get_one::<usize>(id)?
                .copied()
                .ok_or_else(|| anyhow!("Missing default for {}", id))
        };

        // An empty folder or title is treated as not given
        let non_empty_path = |id: &str| -> anyhow::Result<Option<PathBuf>> {
            Ok(m
                .try_get_one::<PathBuf>(id)?
                .filter(|p| !p.as_os_str().is_empty())
                .cloned())
        };

        let input = m
            .try_get_many::<PathBuf>("input")?
            .map(|v| v.cloned().collect())
            .unwrap_or_default();

        let title = m
            .try_get_one::<String>("title")?
            .filter(|s| !s.is_empty())
            .cloned();

        Ok(Self {
            input,
            reference: non_empty_path("reference")?,
            downsample: m.try_get_one::<f64>("downsample")?.copied(),
            downsample_seed: m.try_get_one::<u64>("downsample_seed")?.copied(),
            merge_reference_sequences: m.get_flag("merge_reference_sequences"),
            length: get_int("length")?,
            around: get_int("around")?,
            min_basequal: get_int("min_basequal")?,
            folder: non_empty_path("folder")?,
            plot_only: m.get_flag("plot_only"),
            no_plot: m.get_flag("no_plot"),
            ymax: m
                .try_get_one::<f64>("ymax")?
                .copied()
                .ok_or_else(|| anyhow!("Missing default for ymax"))?,
            readplot: get_int("readplot")?,
            refplot: get_int("refplot")?,
            title,
            rand: get_count("rand")?,
            burn: get_count("burn")?,
            adjust: get_count("adjust")?,
            iter: get_count("iter")?,
            forward: m.get_flag("forward"),
            reverse: m.get_flag("reverse"),
            var_disp: m.get_flag("var_disp"),
            jukes_cantor: m.get_flag("jukes_cantor"),
            diff_hangs: m.get_flag("diff_hangs"),
            fix_nicks: m.get_flag("fix_nicks"),
            use_raw_nick_freq: m.get_flag("use_raw_nick_freq"),
            single_stranded: m.get_flag("single_stranded"),
            theme_bw: m.get_flag("theme_bw"),
            seq_length: get_int("seq_length")?,
            stats_only: m.get_flag("stats_only"),
            no_stats: m.get_flag("no_stats"),
            check_r_packages: m.get_flag("check_r_packages"),
            rescale: m.get_flag("rescale"),
            rescale_only: m.get_flag("rescale_only"),
            rescale_out: non_empty_path("rescale_out")?,
            rescale_length_5p: m.try_get_one::<i64>("rescale_length_5p")?.copied(),
            rescale_length_3p: m.try_get_one::<i64>("rescale_length_3p")?.copied(),
        })
    }
}
