use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, Command};

use crate::log_utils::LogLevel;

pub(crate) fn cli_model() -> Command {
    command!()
    .override_usage("damage-config [OPTIONS] -i <BAM file> -r <FASTA file>")
    .next_help_heading("Input files")
    .arg(
        Arg::new("input")
            .short('i')
            .long("input")
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf))
            .value_name("SAM/BAM file")
            .help("SAM/BAM file, must contain a valid header, use '-' for reading a BAM from stdin"),
    )
    .arg(
        Arg::new("reference")
            .short('r')
            .long("reference")
            .value_parser(value_parser!(PathBuf))
            .value_name("FASTA file")
            .help("Reference file in FASTA format"),
    )
    .next_help_heading("General options")
    .arg(
        Arg::new("downsample")
            .short('n')
            .long("downsample")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .value_name("DOWNSAMPLE")
            .help("Downsample to a randomly selected fraction of the reads (if 0 < DOWNSAMPLE < 1), or a fixed number of randomly selected reads (if DOWNSAMPLE >= 1)"),
    )
    .arg(
        Arg::new("downsample_seed")
            .long("downsample-seed")
            .value_parser(value_parser!(u64))
            .value_name("SEED")
            .help("Seed value to use for downsampling"),
    )
    .arg(
        Arg::new("merge_reference_sequences")
            .long("merge-reference-sequences")
            .hide(true)
            .action(ArgAction::SetTrue)
            .help("Merge all reference sequences"),
    )
    .arg(
        Arg::new("length")
            .short('l')
            .long("length")
            .default_value("70")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .value_name("INT")
            .help("Read length, in nucleotides to consider"),
    )
    .arg(
        Arg::new("around")
            .short('a')
            .long("around")
            .default_value("10")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .value_name("INT")
            .help("Nucleotides to retrieve before/after reads"),
    )
    .arg(
        Arg::new("min_basequal")
            .short('Q')
            .long("min-basequal")
            .default_value("0")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .value_name("QUAL")
            .help("Minimum base quality Phred score considered, Phred-33 assumed"),
    )
    .arg(
        Arg::new("folder")
            .short('d')
            .long("folder")
            .value_parser(value_parser!(PathBuf))
            .value_name("FOLDER")
            .help("Folder name to store results [default: results_<input stem>]"),
    )
    .arg(
        Arg::new("plot_only")
            .long("plot-only")
            .action(ArgAction::SetTrue)
            .help("Run only plotting from a valid result folder"),
    )
    .arg(
        Arg::new("log_level")
            .long("log-level")
            .value_name("LOGLEVEL")
            .value_parser(value_parser!(LogLevel))
            .ignore_case(true)
            .default_value("INFO")
            .help("Logging verbosity level"),
    )
    .arg(
        Arg::new("no_plot")
            .long("no-plot")
            .hide(true)
            .action(ArgAction::SetTrue)
            .help("Do not use R (no plots or statistical estimation)"),
    )
    .next_help_heading("Options for graphics")
    .arg(
        Arg::new("ymax")
            .short('y')
            .long("ymax")
            .default_value("0.3")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .value_name("FREQ")
            .help("Graphical y-axis limit for nucleotide misincorporation frequencies"),
    )
    .arg(
        Arg::new("readplot")
            .short('m')
            .long("readplot")
            .default_value("25")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .value_name("INT")
            .help("Read length, in nucleotides, considered for plotting nucleotide misincorporations"),
    )
    .arg(
        Arg::new("refplot")
            .short('b')
            .long("refplot")
            .default_value("10")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .value_name("INT")
            .help("Number of reference nucleotides to consider for plotting base composition upstream and downstream of every read"),
    )
    .arg(
        Arg::new("title")
            .short('t')
            .long("title")
            .value_parser(value_parser!(String))
            .value_name("TITLE")
            .help("Title used for plots [default: input file stem]"),
    )
    .next_help_heading("Options for the statistical estimation")
    .arg(
        Arg::new("rand")
            .long("rand")
            .default_value("30")
            .value_parser(value_parser!(usize))
            .value_name("INT")
            .help("Number of random starting points for the likelihood optimization"),
    )
    .arg(
        Arg::new("burn")
            .long("burn")
            .default_value("10000")
            .value_parser(value_parser!(usize))
            .value_name("INT")
            .help("Number of burnin iterations"),
    )
    .arg(
        Arg::new("adjust")
            .long("adjust")
            .default_value("10")
            .value_parser(value_parser!(usize))
            .value_name("INT")
            .help("Number of adjust proposal variance parameters iterations"),
    )
    .arg(
        Arg::new("iter")
            .long("iter")
            .default_value("50000")
            .value_parser(value_parser!(usize))
            .value_name("INT")
            .help("Number of final MCMC iterations"),
    )
    .arg(
        Arg::new("forward")
            .long("forward")
            .action(ArgAction::SetTrue)
            .help("Using only the 5' end of the seqs"),
    )
    .arg(
        Arg::new("reverse")
            .long("reverse")
            .action(ArgAction::SetTrue)
            .help("Using only the 3' end of the seqs"),
    )
    .arg(
        Arg::new("var_disp")
            .long("var-disp")
            .action(ArgAction::SetTrue)
            .help("Variable dispersion in the overhangs"),
    )
    .arg(
        Arg::new("jukes_cantor")
            .long("jukes-cantor")
            .action(ArgAction::SetTrue)
            .help("Use Jukes Cantor instead of HKY85"),
    )
    .arg(
        Arg::new("diff_hangs")
            .long("diff-hangs")
            .action(ArgAction::SetTrue)
            .help("The overhangs are different for 5' and 3'"),
    )
    .arg(
        Arg::new("fix_nicks")
            .long("fix-nicks")
            .action(ArgAction::SetTrue)
            .help("Fix the nick frequency vector (Only C.T from the 5' end and G.A from the 3' end)"),
    )
    .arg(
        Arg::new("use_raw_nick_freq")
            .long("use-raw-nick-freq")
            .action(ArgAction::SetTrue)
            .help("Use the raw nick frequency vector without smoothing"),
    )
    .arg(
        Arg::new("single_stranded")
            .long("single-stranded")
            .action(ArgAction::SetTrue)
            .help("Single stranded protocol"),
    )
    .arg(
        Arg::new("theme_bw")
            .long("theme-bw")
            .action(ArgAction::SetTrue)
            .help("Use black and white theme in post. pred. plot"),
    )
    .arg(
        Arg::new("seq_length")
            .long("seq-length")
            .default_value("12")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .value_name("INT")
            .help("How long sequence to use from each side"),
    )
    .arg(
        Arg::new("stats_only")
            .long("stats-only")
            .action(ArgAction::SetTrue)
            .help("Run only statistical estimation from a valid result folder"),
    )
    .arg(
        Arg::new("no_stats")
            .long("no-stats")
            .action(ArgAction::SetTrue)
            .help("Disable statistical estimation, active by default"),
    )
    .arg(
        Arg::new("check_r_packages")
            .long("check-R-packages")
            .action(ArgAction::SetTrue)
            .help("Check if the R modules are working"),
    )
    .next_help_heading("Options for rescaling of BAM files")
    .arg(
        Arg::new("rescale")
            .long("rescale")
            .action(ArgAction::SetTrue)
            .help("Rescale the quality scores in the BAM file using the output from the statistical estimation"),
    )
    .arg(
        Arg::new("rescale_only")
            .long("rescale-only")
            .action(ArgAction::SetTrue)
            .help("Run only rescaling from a valid result folder"),
    )
    .arg(
        Arg::new("rescale_out")
            .long("rescale-out")
            .value_parser(value_parser!(PathBuf))
            .value_name("BAM file")
            .help("Write the rescaled BAM to this file"),
    )
    .arg(
        Arg::new("rescale_length_5p")
            .long("rescale-length-5p")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .value_name("INT")
            .help("How many bases to rescale at the 5' termini [default: --seq-length]"),
    )
    .arg(
        Arg::new("rescale_length_3p")
            .long("rescale-length-3p")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .value_name("INT")
            .help("How many bases to rescale at the 3' termini [default: --seq-length]"),
    )
}
