use std::process::ExitCode;

use thiserror::Error;

/// Reasons why a set of options cannot be turned into a [`super::Config`]
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Missing, malformed or contradictory options, or an unusable output folder
    #[error("{0}")]
    Usage(String),

    /// The statistics interpreter or one of its libraries is required but unavailable
    #[error("{0}")]
    Environment(String),
}

impl ResolveError {
    pub fn usage<S: Into<String>>(s: S) -> Self {
        Self::Usage(s.into())
    }

    pub fn environment<S: Into<String>>(s: S) -> Self {
        Self::Environment(s.into())
    }

    #[cfg(test)]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    #[cfg(test)]
    pub fn is_environment(&self) -> bool {
        matches!(self, Self::Environment(_))
    }

    /// Usage errors share clap's exit status
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage(_) => ExitCode::from(2),
            Self::Environment(_) => ExitCode::from(1),
        }
    }
}
