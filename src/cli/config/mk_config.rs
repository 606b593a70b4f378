use crate::probe::Capability;

use super::{
    super::RawConfig,
    rules::{Draft, RULES},
    Config, ResolveError, StatsOptions,
};

impl Config {
    /// Apply defaults, derive missing values and check every constraint.
    ///
    /// Rules run in a fixed order and the first failure stops resolution. The
    /// output folder may have been created by the time a later rule fails.
    pub fn resolve(raw: RawConfig, cap: &Capability) -> Result<Self, ResolveError> {
        let mut draft = Draft::new(raw);
        for rule in RULES.iter() {
            trace!("Applying rule {}", rule.name());
            rule.apply(&mut draft, cap)?;
        }
        Self::from_draft(draft)
    }

    fn from_draft(d: Draft) -> Result<Self, ResolveError> {
        let output_folder = d.folder()?.to_path_buf();
        let raw = d.raw;
        let stats = StatsOptions {
            rand: raw.rand,
            burn: raw.burn,
            adjust: raw.adjust,
            iter: raw.iter,
            forward: raw.forward,
            reverse: raw.reverse,
            var_disp: raw.var_disp,
            jukes_cantor: raw.jukes_cantor,
            diff_hangs: raw.diff_hangs,
            fix_nicks: raw.fix_nicks,
            use_raw_nick_freq: raw.use_raw_nick_freq,
            single_stranded: raw.single_stranded,
            theme_bw: raw.theme_bw,
            seq_length: d.seq_length,
        };

        Ok(Config {
            mode: d.mode,
            input: raw.input,
            reference: raw.reference,
            downsample: d.downsample,
            downsample_seed: raw.downsample_seed,
            merge_reference_sequences: raw.merge_reference_sequences,
            read_length: d.read_length,
            flank_length: d.flank_length,
            min_base_quality: d.min_base_quality,
            output_folder,
            plot_enabled: d.plot_enabled,
            plot_y_max: raw.ymax,
            plot_read_length: d.plot_read_length,
            plot_flank_length: d.plot_flank_length,
            plot_title: d.plot_title.unwrap_or_default(),
            stats_enabled: d.stats_enabled,
            stats,
            rescale: raw.rescale || d.rescale_output.is_some(),
            rescale_output: d.rescale_output,
            rescale_length_5p: d.rescale_length_5p,
            rescale_length_3p: d.rescale_length_3p,
        })
    }
}
