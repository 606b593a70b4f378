use crate::probe::{self, Capability};

mod cli_model;
mod config;
mod error;
mod output_folder;
mod raw_config;
mod run_mode;

pub use config::{Config, PlotOptions, RescaleOptions, Stage};
pub use error::ResolveError;
pub use raw_config::RawConfig;
pub use run_mode::RunMode;

/// What the invocation asked for once the command line is read
pub enum Task {
    /// Report on the statistics interpreter and its libraries, nothing else
    CheckPackages(Capability),
    Process(Config),
}

pub fn handle_cli() -> anyhow::Result<Task> {
    let m = cli_model::cli_model().get_matches();
    crate::log_utils::init_log(&m)?;

    let raw = RawConfig::from_matches(&m)?;
    // --no-plot keeps the interpreter out of the run, including the package check
    let cap = if raw.no_plot {
        Capability::unavailable()
    } else {
        probe::probe()
    };

    // Runs before any other option is looked at
    if raw.check_r_packages {
        return Ok(Task::CheckPackages(cap));
    }

    let cfg = Config::resolve(raw, &cap)?;
    Ok(Task::Process(cfg))
}
