#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

use std::{io, process::ExitCode};

mod cli;
mod log_utils;
mod probe;
mod summary;

use cli::{ResolveError, Task};

fn run() -> anyhow::Result<ExitCode> {
    match cli::handle_cli()? {
        Task::CheckPackages(cap) => Ok(if probe::report(&cap) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }),
        Task::Process(cfg) => {
            summary::log_plan(&cfg);
            summary::write_summary(&cfg, io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    run().unwrap_or_else(|e| {
        error!("{:#}", e);
        e.downcast_ref::<ResolveError>()
            .map(|r| r.exit_code())
            .unwrap_or(ExitCode::FAILURE)
    })
}
