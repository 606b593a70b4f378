use std::{
    io::{self, Write},
    path::Path,
};

use crate::cli::{Config, PlotOptions, RescaleOptions, Stage};

fn path_str(p: Option<&Path>) -> String {
    p.map(|p| p.display().to_string()).unwrap_or_default()
}

fn opt_str<T: ToString>(x: Option<T>) -> String {
    x.map(|x| x.to_string()).unwrap_or_default()
}

/// Write the resolved configuration as `key<TAB>value` lines. Unset optional
/// values are written as empty fields.
pub fn write_summary<W: Write>(cfg: &Config, mut w: W) -> io::Result<()> {
    let stats = cfg.stats_options();

    let input = cfg
        .input()
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\t");
    let stages = cfg
        .stages()
        .iter()
        .map(Stage::to_string)
        .collect::<Vec<_>>()
        .join(",");

    let fields: Vec<(&str, String)> = vec![
        ("mode", cfg.mode().to_string()),
        ("input", input),
        ("reference", path_str(cfg.reference())),
        ("downsample", opt_str(cfg.downsample())),
        ("downsample_seed", opt_str(cfg.downsample_seed())),
        ("merge_reference_sequences", cfg.merge_reference_sequences().to_string()),
        ("length", cfg.read_length().to_string()),
        ("around", cfg.flank_length().to_string()),
        ("min_basequal", cfg.min_base_quality().to_string()),
        ("folder", cfg.output_folder().display().to_string()),
        ("plot", cfg.plot_enabled().to_string()),
        ("ymax", cfg.plot_y_max().to_string()),
        ("readplot", cfg.plot_read_length().to_string()),
        ("refplot", cfg.plot_flank_length().to_string()),
        ("title", cfg.plot_title().to_string()),
        ("stats", cfg.stats_enabled().to_string()),
        ("rand", stats.rand.to_string()),
        ("burn", stats.burn.to_string()),
        ("adjust", stats.adjust.to_string()),
        ("iter", stats.iter.to_string()),
        ("forward", stats.forward.to_string()),
        ("reverse", stats.reverse.to_string()),
        ("var_disp", stats.var_disp.to_string()),
        ("jukes_cantor", stats.jukes_cantor.to_string()),
        ("diff_hangs", stats.diff_hangs.to_string()),
        ("fix_nicks", stats.fix_nicks.to_string()),
        ("use_raw_nick_freq", stats.use_raw_nick_freq.to_string()),
        ("single_stranded", stats.single_stranded.to_string()),
        ("theme_bw", stats.theme_bw.to_string()),
        ("seq_length", cfg.seq_length().to_string()),
        ("rescale", cfg.rescale().to_string()),
        ("rescale_out", path_str(cfg.rescale_output())),
        ("rescale_length_5p", cfg.rescale_length_5p().to_string()),
        ("rescale_length_3p", cfg.rescale_length_3p().to_string()),
        ("stages", stages),
    ];

    for (k, v) in fields {
        writeln!(w, "{k}\t{v}")?;
    }
    w.flush()
}

fn log_plot(p: &PlotOptions) {
    info!(
        "plot: '{}' in {} (ymax {}, {} read and {} reference positions)",
        p.title,
        p.folder.display(),
        p.y_max,
        p.read_length,
        p.flank_length
    )
}

fn log_rescale(r: &RescaleOptions) {
    info!(
        "rescale: {} against {} -> {} (5': {}, 3': {})",
        path_str(r.input.first().map(|p| p.as_path())),
        r.reference.display(),
        r.output.display(),
        r.length_5p,
        r.length_3p
    )
}

/// Log which stages will run and what each receives
pub fn log_plan(cfg: &Config) {
    let stages = cfg.stages();
    if stages.is_empty() {
        warn!("Nothing to do: every requested stage is disabled");
    }
    for stage in stages {
        match stage {
            Stage::Count => info!(
                "count: {} input file(s), read length {}, {} flanking bases",
                cfg.input().len(),
                cfg.read_length(),
                cfg.flank_length()
            ),
            Stage::Plot => log_plot(&cfg.plot_options()),
            Stage::Stats => {
                let s = cfg.stats_options();
                info!(
                    "stats: {} burn-in and {} final iterations, seq length {}",
                    s.burn, s.iter, s.seq_length
                )
            }
            Stage::Rescale => match cfg.rescale_options() {
                Some(r) => log_rescale(&r),
                None => debug!("rescale: using result folder {}", cfg.output_folder().display()),
            },
        }
    }
}
