use std::fmt;

use clap::{builder::PossibleValue, ArgMatches, ValueEnum};

/// LogLevel
///
/// Represents minimum level of messages that will be logged
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 0,
    Warning,
    Info,
    Debug,
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Debug, Self::Info, Self::Warning, Self::Error]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Error => Some(PossibleValue::new("ERROR")),
            Self::Warning => Some(PossibleValue::new("WARNING")),
            Self::Info => Some(PossibleValue::new("INFO")),
            Self::Debug => Some(PossibleValue::new("DEBUG")),
        }
    }
}

impl LogLevel {
    pub fn get_level(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let level_str = ["ERROR", "WARNING", "INFO", "DEBUG"];
        write!(f, "{}", level_str[self.get_level()])
    }
}

/// Initialize logging from command line arguments
pub fn init_log(m: &ArgMatches) -> anyhow::Result<()> {
    let verbose = m
        .get_one::<LogLevel>("log_level")
        .copied()
        .unwrap_or(LogLevel::Info);

    stderrlog::new().verbosity(verbose.get_level()).init()?;
    Ok(())
}
