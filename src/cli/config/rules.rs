use std::path::{Path, PathBuf};

use crate::probe::{Capability, R_INTERPRETER};

use super::{
    super::{
        output_folder::{is_file_like, prepare_output_folder},
        RawConfig,
    },
    Downsample, ResolveError, RunMode, MAX_BASE_QUALITY, RESCALED_SUFFIX, RESULTS_PREFIX,
};

/// Partially resolved options; filled in by the rules in order
#[derive(Debug, Clone)]
pub(super) struct Draft {
    pub(super) raw: RawConfig,
    pub(super) mode: RunMode,
    pub(super) downsample: Option<Downsample>,
    pub(super) read_length: usize,
    pub(super) flank_length: usize,
    pub(super) min_base_quality: u8,
    pub(super) seq_length: usize,
    pub(super) plot_read_length: usize,
    pub(super) plot_flank_length: usize,
    pub(super) plot_title: Option<String>,
    pub(super) output_folder: Option<PathBuf>,
    pub(super) rescale_output: Option<PathBuf>,
    pub(super) rescale_length_5p: usize,
    pub(super) rescale_length_3p: usize,
    pub(super) plot_enabled: bool,
    pub(super) stats_enabled: bool,
}

impl Draft {
    pub(super) fn new(raw: RawConfig) -> Self {
        Self {
            raw,
            mode: RunMode::default(),
            downsample: None,
            read_length: 0,
            flank_length: 0,
            min_base_quality: 0,
            seq_length: 0,
            plot_read_length: 0,
            plot_flank_length: 0,
            plot_title: None,
            output_folder: None,
            rescale_output: None,
            rescale_length_5p: 0,
            rescale_length_3p: 0,
            plot_enabled: false,
            stats_enabled: false,
        }
    }

    pub(super) fn folder(&self) -> Result<&Path, ResolveError> {
        self.output_folder
            .as_deref()
            .ok_or_else(|| ResolveError::usage("Folder not provided (-d)"))
    }
}

type RuleFn = fn(&mut Draft, &Capability) -> Result<(), ResolveError>;

/// A named resolution step
pub(super) struct Rule {
    name: &'static str,
    apply: RuleFn,
}

impl Rule {
    pub(super) fn name(&self) -> &'static str {
        self.name
    }

    pub(super) fn apply(&self, d: &mut Draft, cap: &Capability) -> Result<(), ResolveError> {
        (self.apply)(d, cap)
    }
}

/// Resolution steps in the order they must run. Later rules rely on values
/// set by earlier ones.
pub(super) const RULES: [Rule; 13] = [
    Rule { name: "run_mode", apply: run_mode },
    Rule { name: "input_files", apply: input_files },
    Rule { name: "downsample", apply: downsample },
    Rule { name: "read_lengths", apply: read_lengths },
    Rule { name: "plot_limits", apply: plot_limits },
    Rule { name: "strand_ends", apply: strand_ends },
    Rule { name: "nick_frequency", apply: nick_frequency },
    Rule { name: "plot_title", apply: plot_title },
    Rule { name: "output_folder_name", apply: output_folder_name },
    Rule { name: "rescale_output", apply: rescale_output },
    Rule { name: "output_folder", apply: output_folder },
    Rule { name: "rescale_lengths", apply: rescale_lengths },
    Rule { name: "capability", apply: capability },
];

fn usage<S: Into<String>>(s: S) -> ResolveError {
    ResolveError::usage(s)
}

fn is_stdin(p: &Path) -> bool {
    p.as_os_str() == "-"
}

/// File name without directory and last extension
fn stem(p: &Path) -> String {
    p.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn non_negative(x: i64, msg: &str) -> Result<usize, ResolveError> {
    usize::try_from(x).map_err(|_| usage(msg))
}

fn run_mode(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    let raw = &d.raw;
    let mode = RunMode::from_flags(raw.plot_only, raw.stats_only, raw.rescale_only)?;

    match mode {
        RunMode::PlotOnly if raw.rescale => {
            return Err(usage("--rescale cannot be combined with --plot-only"))
        }
        RunMode::PlotOnly if raw.no_plot => {
            return Err(usage("--no-plot cannot be combined with --plot-only"))
        }
        RunMode::StatsOnly if raw.no_stats => {
            return Err(usage("--no-stats cannot be combined with --stats-only"))
        }
        _ => (),
    }

    if raw.input.is_empty() {
        match mode.flag() {
            None => return Err(usage("SAM/BAM file not given (-i)")),
            Some(flag) if mode.requires_input() => {
                return Err(usage(format!(
                    "Input BAM file not provided (-i), required with {flag}"
                )))
            }
            _ if raw.rescale => {
                return Err(usage("Input BAM file not provided (-i), required with --rescale"))
            }
            _ => (),
        }
    }

    if raw.reference.is_none() && mode.requires_reference() {
        return Err(match mode.flag() {
            Some(flag) => usage(format!(
                "Reference file not provided (-r), required with {flag}"
            )),
            None => usage("Reference file not given (-r)"),
        });
    }

    if raw.folder.is_none() {
        if let Some(flag) = mode.flag() {
            return Err(usage(format!("Folder not provided (-d), required with {flag}")));
        }
    }

    debug!("Run mode: {}", mode);
    d.mode = mode;
    Ok(())
}

fn input_files(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    if !d.mode.checks_input_files() {
        return Ok(());
    }
    let files: Vec<&Path> = d
        .raw
        .input
        .iter()
        .chain(d.raw.reference.iter())
        .map(|p| p.as_path())
        .collect();

    for p in files.iter() {
        if !(is_stdin(p) || is_file_like(p)) {
            return Err(usage(format!("{} is not a valid file", p.display())));
        }
    }
    if files.iter().filter(|p| is_stdin(p)).count() > 1 {
        return Err(usage("Only one input file can be read from stdin ('-')"));
    }
    Ok(())
}

fn downsample(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    d.downsample = d.raw.downsample.map(Downsample::from_value).transpose()?;
    if let Some(x) = d.downsample {
        debug!("Downsampling to {}", x);
    }
    Ok(())
}

fn read_lengths(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    let raw = &d.raw;
    let read_length = non_negative(raw.length, "length (-l) must be a positive integer")?;
    let flank_length = non_negative(raw.around, "around (-a) must be a positive integer")?;
    let min_base_quality = u8::try_from(raw.min_basequal)
        .ok()
        .filter(|q| *q <= MAX_BASE_QUALITY)
        .ok_or_else(|| {
            usage(format!(
                "Minimum base quality, Phred score, must be within this range: 0 - {MAX_BASE_QUALITY}"
            ))
        })?;
    let seq_length = non_negative(raw.seq_length, "--seq-length must be a positive integer")?;

    d.read_length = read_length;
    d.flank_length = flank_length;
    d.min_base_quality = min_base_quality;
    d.seq_length = seq_length;
    Ok(())
}

fn plot_limits(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    let raw = &d.raw;
    if !(raw.ymax > 0.0 && raw.ymax <= 1.0) {
        return Err(usage("ymax (-y) must be a real number between 0 and 1"));
    }
    let plot_read_length = non_negative(raw.readplot, "readplot (-m) must be a positive integer")?;
    let plot_flank_length = non_negative(raw.refplot, "refplot (-b) must be a positive integer")?;

    if d.mode.checks_flank_limit() && plot_flank_length > d.flank_length {
        return Err(usage("refplot (-b) must not be greater than around (-a)"));
    }
    if plot_read_length > d.read_length {
        return Err(usage("readplot (-m) must not be greater than length (-l)"));
    }
    d.plot_read_length = plot_read_length;
    d.plot_flank_length = plot_flank_length;
    Ok(())
}

fn strand_ends(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    if d.raw.forward && d.raw.reverse {
        Err(usage(
            "Cannot use only forward end and only reverse end for the statistics",
        ))
    } else {
        Ok(())
    }
}

fn nick_frequency(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    let raw = &d.raw;
    let n = [raw.use_raw_nick_freq, raw.fix_nicks, raw.single_stranded]
        .iter()
        .filter(|x| **x)
        .count();
    if n > 1 {
        Err(usage(
            "The options --use-raw-nick-freq, --fix-nicks and --single-stranded are mutually exclusive",
        ))
    } else {
        Ok(())
    }
}

fn plot_title(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    let raw = &d.raw;
    let title = match (&raw.title, raw.input.first(), &raw.folder) {
        (Some(t), _, _) => t.clone(),
        (None, Some(input), _) => stem(input),
        (None, None, Some(folder)) => {
            let s = stem(folder);
            match s.strip_prefix(RESULTS_PREFIX) {
                Some(t) => t.to_owned(),
                None => s,
            }
        }
        (None, None, None) => String::new(),
    };
    debug!("Plot title: {}", title);
    d.plot_title = Some(title);
    Ok(())
}

fn output_folder_name(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    let folder = match (&d.raw.folder, d.raw.input.first()) {
        (Some(f), _) => f.clone(),
        (None, Some(input)) => PathBuf::from(format!("{}{}", RESULTS_PREFIX, stem(input))),
        (None, None) => return Err(usage("Folder not provided (-d)")),
    };
    debug!("Output folder: {}", folder.display());
    d.output_folder = Some(folder);
    Ok(())
}

fn rescale_output(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    if !(d.raw.rescale || d.mode == RunMode::RescaleOnly) {
        return Ok(());
    }
    let out = match &d.raw.rescale_out {
        Some(p) => p.clone(),
        None => {
            // With several inputs the first one names the rescaled file
            let input = d
                .raw
                .input
                .first()
                .ok_or_else(|| usage("Input BAM file not provided (-i), required for rescaling"))?;
            d.folder()?
                .join(format!("{}{}", stem(input), RESCALED_SUFFIX))
        }
    };
    debug!("Rescaled BAM: {}", out.display());
    d.rescale_output = Some(out);
    Ok(())
}

fn output_folder(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    let state = prepare_output_folder(d.folder()?, d.mode)?;
    trace!("Output folder state: {:?}", state);
    Ok(())
}

fn rescale_length(v: Option<i64>, seq_length: usize, opt: &str) -> Result<usize, ResolveError> {
    match v {
        None => Ok(seq_length),
        Some(x) => usize::try_from(x)
            .ok()
            .filter(|x| *x <= seq_length)
            .ok_or_else(|| {
                usage(format!(
                    "{opt} must be between 0 and --seq-length ({seq_length})"
                ))
            }),
    }
}

fn rescale_lengths(d: &mut Draft, _: &Capability) -> Result<(), ResolveError> {
    d.rescale_length_5p = rescale_length(d.raw.rescale_length_5p, d.seq_length, "--rescale-length-5p")?;
    d.rescale_length_3p = rescale_length(d.raw.rescale_length_3p, d.seq_length, "--rescale-length-3p")?;
    Ok(())
}

/// `--no-plot` switches the interpreter off entirely, so it gates statistics
/// the same way a failed probe does
fn capability(d: &mut Draft, cap: &Capability) -> Result<(), ResolveError> {
    d.plot_enabled = !d.raw.no_plot;
    d.stats_enabled = !d.raw.no_stats;

    if !cap.has_interpreter() && d.plot_enabled {
        warn!("{} is not in your PATH, plotting is disabled", R_INTERPRETER);
        d.plot_enabled = false;
    }

    if d.raw.no_plot || !cap.statistics() {
        if !d.raw.no_plot {
            for lib in cap.missing_libraries() {
                warn!("Could not load the library '{}' in R", lib.name());
            }
        }
        if d.stats_enabled {
            warn!("The Bayesian estimation has been disabled");
            d.stats_enabled = false;
        }
        if let Some(flag) = d.mode.flag().filter(|_| d.mode.requires_statistics()) {
            return Err(ResolveError::environment(format!(
                "Cannot use {flag} with missing R libraries"
            )));
        }
        if d.raw.rescale {
            return Err(ResolveError::environment(
                "Cannot use --rescale with missing R libraries",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap() -> Capability {
        Capability::available("/usr/bin/Rscript")
    }

    /// Run the rules up to and including `last`
    fn run_until(raw: RawConfig, cap: &Capability, last: &str) -> Result<Draft, ResolveError> {
        let mut d = Draft::new(raw);
        for rule in RULES.iter() {
            rule.apply(&mut d, cap)?;
            if rule.name() == last {
                return Ok(d);
            }
        }
        panic!("No rule named {last}")
    }

    fn with_input(input: &Path) -> RawConfig {
        RawConfig {
            input: vec![input.to_path_buf()],
            reference: Some(input.to_path_buf()),
            ..RawConfig::default()
        }
    }

    fn expect_usage(r: Result<Draft, ResolveError>, text: &str) {
        match r {
            Err(ResolveError::Usage(s)) => assert!(s.contains(text), "'{s}' lacks '{text}'"),
            Err(e) => panic!("Expected usage error, got {e:?}"),
            Ok(_) => panic!("Expected usage error containing '{text}'"),
        }
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<_> = RULES.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            [
                "run_mode",
                "input_files",
                "downsample",
                "read_lengths",
                "plot_limits",
                "strand_ends",
                "nick_frequency",
                "plot_title",
                "output_folder_name",
                "rescale_output",
                "output_folder",
                "rescale_lengths",
                "capability",
            ]
        );
    }

    #[test]
    fn input_and_reference_are_required() {
        expect_usage(run_until(RawConfig::default(), &cap(), "run_mode"), "-i");
        let raw = RawConfig {
            input: vec!["x.bam".into()],
            ..RawConfig::default()
        };
        expect_usage(run_until(raw, &cap(), "run_mode"), "-r");
    }

    #[test]
    fn only_modes_need_folder() {
        let raw = RawConfig {
            plot_only: true,
            ..RawConfig::default()
        };
        expect_usage(run_until(raw, &cap(), "run_mode"), "--plot-only");

        let raw = RawConfig {
            stats_only: true,
            reference: Some("ref.fa".into()),
            ..RawConfig::default()
        };
        expect_usage(run_until(raw, &cap(), "run_mode"), "--stats-only");
    }

    #[test]
    fn stats_only_needs_reference_but_not_input() {
        let raw = RawConfig {
            stats_only: true,
            folder: Some("results_x".into()),
            ..RawConfig::default()
        };
        expect_usage(run_until(raw.clone(), &cap(), "run_mode"), "-r");

        let raw = RawConfig {
            reference: Some("ref.fa".into()),
            ..raw
        };
        let d = run_until(raw, &cap(), "input_files").unwrap();
        assert_eq!(d.mode, RunMode::StatsOnly);
    }

    #[test]
    fn rescale_only_needs_input_reference_and_folder() {
        let base = RawConfig {
            rescale_only: true,
            folder: Some("results_x".into()),
            reference: Some("ref.fa".into()),
            ..RawConfig::default()
        };
        expect_usage(run_until(base.clone(), &cap(), "run_mode"), "--rescale-only");

        let raw = RawConfig {
            input: vec!["x.bam".into()],
            reference: None,
            ..base
        };
        expect_usage(run_until(raw, &cap(), "run_mode"), "-r");
    }

    #[test]
    fn contradictory_mode_combinations() {
        let plot_only = RawConfig {
            plot_only: true,
            folder: Some("results_x".into()),
            ..RawConfig::default()
        };
        let raw = RawConfig {
            rescale: true,
            ..plot_only.clone()
        };
        expect_usage(run_until(raw, &cap(), "run_mode"), "--rescale");
        let raw = RawConfig {
            no_plot: true,
            ..plot_only.clone()
        };
        expect_usage(run_until(raw, &cap(), "run_mode"), "--no-plot");
        let raw = RawConfig {
            plot_only: false,
            stats_only: true,
            no_stats: true,
            reference: Some("ref.fa".into()),
            ..plot_only.clone()
        };
        expect_usage(run_until(raw, &cap(), "run_mode"), "--no-stats");

        // Model flags are simply ignored when only plotting
        let raw = RawConfig {
            forward: true,
            jukes_cantor: true,
            ..plot_only
        };
        assert!(run_until(raw, &cap(), "run_mode").is_ok());
    }

    #[test]
    fn input_files_must_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let bam = tmp.path().join("sample.bam");
        std::fs::write(&bam, b"").unwrap();

        assert!(run_until(with_input(&bam), &cap(), "input_files").is_ok());

        let raw = RawConfig {
            reference: Some(tmp.path().join("missing.fa")),
            ..with_input(&bam)
        };
        expect_usage(run_until(raw, &cap(), "input_files"), "missing.fa");

        // A directory is not a file
        let raw = RawConfig {
            input: vec![tmp.path().to_path_buf()],
            ..with_input(&bam)
        };
        expect_usage(run_until(raw, &cap(), "input_files"), "not a valid file");
    }

    #[test]
    fn stdin_is_accepted_once() {
        let tmp = tempfile::tempdir().unwrap();
        let fa = tmp.path().join("ref.fa");
        std::fs::write(&fa, b">x\nACGT\n").unwrap();

        let raw = RawConfig {
            input: vec!["-".into()],
            reference: Some(fa),
            ..RawConfig::default()
        };
        assert!(run_until(raw, &cap(), "input_files").is_ok());

        let raw = RawConfig {
            input: vec!["-".into()],
            reference: Some("-".into()),
            ..RawConfig::default()
        };
        expect_usage(run_until(raw, &cap(), "input_files"), "stdin");
    }

    #[test]
    fn plot_only_skips_file_checks() {
        let raw = RawConfig {
            plot_only: true,
            folder: Some("results_x".into()),
            reference: Some("does_not_exist.fa".into()),
            ..RawConfig::default()
        };
        assert!(run_until(raw, &cap(), "input_files").is_ok());
    }

    #[test]
    fn numeric_ranges() {
        let tmp = tempfile::tempdir().unwrap();
        let bam = tmp.path().join("s.bam");
        std::fs::write(&bam, b"").unwrap();
        let base = with_input(&bam);

        let cases: [(RawConfig, &str); 7] = [
            (RawConfig { length: -1, ..base.clone() }, "length (-l)"),
            (RawConfig { around: -1, ..base.clone() }, "around (-a)"),
            (RawConfig { min_basequal: 42, ..base.clone() }, "0 - 41"),
            (RawConfig { min_basequal: -1, ..base.clone() }, "0 - 41"),
            (RawConfig { seq_length: -1, ..base.clone() }, "--seq-length"),
            (RawConfig { ymax: 0.0, ..base.clone() }, "ymax"),
            (RawConfig { ymax: 1.5, ..base.clone() }, "ymax"),
        ];
        for (raw, text) in cases {
            expect_usage(run_until(raw, &cap(), "plot_limits"), text);
        }

        let d = run_until(
            RawConfig { ymax: 1.0, min_basequal: 41, ..base },
            &cap(),
            "plot_limits",
        )
        .unwrap();
        assert_eq!(d.min_base_quality, 41);
        assert_eq!(d.read_length, 70);
        assert_eq!(d.plot_read_length, 25);
    }

    #[test]
    fn plot_lengths_are_bounded() {
        let tmp = tempfile::tempdir().unwrap();
        let bam = tmp.path().join("s.bam");
        std::fs::write(&bam, b"").unwrap();
        let base = with_input(&bam);

        let raw = RawConfig { length: 20, readplot: 21, ..base.clone() };
        expect_usage(run_until(raw, &cap(), "plot_limits"), "readplot (-m)");
        let raw = RawConfig { length: 20, readplot: 20, ..base.clone() };
        assert!(run_until(raw, &cap(), "plot_limits").is_ok());

        let raw = RawConfig { around: 5, refplot: 6, ..base.clone() };
        expect_usage(run_until(raw, &cap(), "plot_limits"), "refplot (-b)");
        let raw = RawConfig { refplot: -2, ..base };
        expect_usage(run_until(raw, &cap(), "plot_limits"), "refplot (-b)");
    }

    #[test]
    fn plot_only_ignores_flank_bound() {
        let raw = RawConfig {
            plot_only: true,
            folder: Some("results_x".into()),
            around: 5,
            refplot: 6,
            ..RawConfig::default()
        };
        let d = run_until(raw, &cap(), "plot_limits").unwrap();
        assert_eq!(d.plot_flank_length, 6);
    }

    #[test]
    fn forward_and_reverse_exclude_each_other() {
        let raw = RawConfig {
            plot_only: true,
            folder: Some("results_x".into()),
            forward: true,
            reverse: true,
            ..RawConfig::default()
        };
        expect_usage(run_until(raw, &cap(), "strand_ends"), "forward");
    }

    #[test]
    fn nick_frequency_variants_exclude_each_other() {
        let base = RawConfig {
            plot_only: true,
            folder: Some("results_x".into()),
            ..RawConfig::default()
        };
        let pairs = [
            RawConfig { use_raw_nick_freq: true, fix_nicks: true, ..base.clone() },
            RawConfig { use_raw_nick_freq: true, single_stranded: true, ..base.clone() },
            RawConfig { fix_nicks: true, single_stranded: true, ..base.clone() },
        ];
        for raw in pairs {
            expect_usage(run_until(raw, &cap(), "nick_frequency"), "mutually exclusive");
        }
        let raw = RawConfig { single_stranded: true, ..base };
        assert!(run_until(raw, &cap(), "nick_frequency").is_ok());
    }

    #[test]
    fn names_derive_from_input() {
        let mut d = Draft::new(RawConfig {
            input: vec!["data/sampleX.bam".into()],
            rescale: true,
            ..RawConfig::default()
        });
        plot_title(&mut d, &cap()).unwrap();
        output_folder_name(&mut d, &cap()).unwrap();
        rescale_output(&mut d, &cap()).unwrap();
        assert_eq!(d.plot_title.as_deref(), Some("sampleX"));
        assert_eq!(d.output_folder, Some(PathBuf::from("results_sampleX")));
        assert_eq!(
            d.rescale_output,
            Some(PathBuf::from("results_sampleX/sampleX.rescaled.bam"))
        );
    }

    #[test]
    fn first_input_names_outputs() {
        let mut d = Draft::new(RawConfig {
            input: vec!["a.bam".into(), "b.bam".into()],
            folder: Some("out".into()),
            rescale: true,
            ..RawConfig::default()
        });
        output_folder_name(&mut d, &cap()).unwrap();
        rescale_output(&mut d, &cap()).unwrap();
        assert_eq!(d.rescale_output, Some(PathBuf::from("out/a.rescaled.bam")));
    }

    #[test]
    fn explicit_names_win() {
        let mut d = Draft::new(RawConfig {
            input: vec!["sampleX.bam".into()],
            title: Some("My plot".into()),
            folder: Some("elsewhere".into()),
            rescale_out: Some("r.bam".into()),
            rescale: true,
            ..RawConfig::default()
        });
        plot_title(&mut d, &cap()).unwrap();
        output_folder_name(&mut d, &cap()).unwrap();
        rescale_output(&mut d, &cap()).unwrap();
        assert_eq!(d.plot_title.as_deref(), Some("My plot"));
        assert_eq!(d.output_folder, Some(PathBuf::from("elsewhere")));
        assert_eq!(d.rescale_output, Some(PathBuf::from("r.bam")));
    }

    #[test]
    fn plot_only_title_comes_from_folder() {
        let mut d = Draft::new(RawConfig {
            plot_only: true,
            folder: Some("runs/results_sampleY/".into()),
            ..RawConfig::default()
        });
        plot_title(&mut d, &cap()).unwrap();
        assert_eq!(d.plot_title.as_deref(), Some("sampleY"));

        let mut d = Draft::new(RawConfig {
            plot_only: true,
            folder: Some("my_results_z".into()),
            ..RawConfig::default()
        });
        plot_title(&mut d, &cap()).unwrap();
        assert_eq!(d.plot_title.as_deref(), Some("my_results_z"));
    }

    #[test]
    fn no_rescale_output_without_rescaling() {
        let mut d = Draft::new(RawConfig {
            input: vec!["sampleX.bam".into()],
            ..RawConfig::default()
        });
        output_folder_name(&mut d, &cap()).unwrap();
        rescale_output(&mut d, &cap()).unwrap();
        assert_eq!(d.rescale_output, None);
    }

    #[test]
    fn rescale_lengths_default_to_seq_length() {
        let mut d = Draft::new(RawConfig::default());
        d.seq_length = 12;
        rescale_lengths(&mut d, &cap()).unwrap();
        assert_eq!((d.rescale_length_5p, d.rescale_length_3p), (12, 12));

        let mut d = Draft::new(RawConfig {
            rescale_length_3p: Some(0),
            rescale_length_5p: Some(12),
            ..RawConfig::default()
        });
        d.seq_length = 12;
        rescale_lengths(&mut d, &cap()).unwrap();
        assert_eq!((d.rescale_length_5p, d.rescale_length_3p), (12, 0));
    }

    #[test]
    fn rescale_lengths_are_bounded() {
        for (p5, p3) in [(Some(15), None), (None, Some(13)), (Some(-1), None)] {
            let mut d = Draft::new(RawConfig {
                rescale_length_5p: p5,
                rescale_length_3p: p3,
                ..RawConfig::default()
            });
            d.seq_length = 12;
            let e = rescale_lengths(&mut d, &cap()).unwrap_err();
            assert!(e.to_string().contains("--rescale-length"));
        }
    }

    #[test]
    fn missing_capability_degrades_default_run() {
        let mut d = Draft::new(RawConfig::default());
        capability(&mut d, &Capability::unavailable()).unwrap();
        assert!(!d.stats_enabled);
        assert!(!d.plot_enabled);

        let mut d = Draft::new(RawConfig::default());
        capability(&mut d, &Capability::with_missing("/usr/bin/Rscript", &["gam"])).unwrap();
        assert!(!d.stats_enabled);
        assert!(d.plot_enabled);
    }

    #[test]
    fn missing_capability_is_fatal_where_required() {
        let cases = [
            (RunMode::StatsOnly, false, "--stats-only"),
            (RunMode::RescaleOnly, false, "--rescale-only"),
            (RunMode::Full, true, "--rescale"),
        ];
        for (mode, rescale, text) in cases {
            let mut d = Draft::new(RawConfig {
                rescale,
                ..RawConfig::default()
            });
            d.mode = mode;
            let e = capability(&mut d, &Capability::unavailable()).unwrap_err();
            assert!(e.is_environment());
            assert!(e.to_string().contains(text));
        }
    }

    #[test]
    fn user_flags_disable_stages() {
        let mut d = Draft::new(RawConfig {
            no_stats: true,
            no_plot: true,
            ..RawConfig::default()
        });
        capability(&mut d, &cap()).unwrap();
        assert!(!d.stats_enabled);
        assert!(!d.plot_enabled);

        // Without the interpreter there is no Bayesian estimation either
        let mut d = Draft::new(RawConfig {
            no_plot: true,
            ..RawConfig::default()
        });
        capability(&mut d, &cap()).unwrap();
        assert!(!d.stats_enabled);
        assert!(!d.plot_enabled);

        let mut d = Draft::new(RawConfig::default());
        capability(&mut d, &cap()).unwrap();
        assert!(d.stats_enabled);
        assert!(d.plot_enabled);
    }

    #[test]
    fn no_plot_is_fatal_where_statistics_are_required() {
        let cases = [
            (RunMode::StatsOnly, false, "--stats-only"),
            (RunMode::RescaleOnly, false, "--rescale-only"),
            (RunMode::Full, true, "--rescale"),
        ];
        for (mode, rescale, text) in cases {
            let mut d = Draft::new(RawConfig {
                no_plot: true,
                rescale,
                ..RawConfig::default()
            });
            d.mode = mode;
            let e = capability(&mut d, &cap()).unwrap_err();
            assert!(e.is_environment());
            assert!(e.to_string().contains(text));
        }
    }
}
