use std::{io, path::PathBuf};

use boxtext::BoxError;
use thiserror::Error;

/// Exit codes, following the BSD `sysexits.h` conventions.
pub mod exit_codes {
    /// Malformed or missing command-line arguments.
    pub const USAGE: u8 = 64;
    /// The input file does not exist or is not a regular file.
    pub const NO_INPUT: u8 = 66;
    /// An internal invariant of the boxing transformation was violated.
    pub const SOFTWARE: u8 = 70;
    /// The output buffer could not be reserved.
    pub const OS_ERR: u8 = 71;
    /// The output path cannot be created.
    pub const CANT_CREATE: u8 = 73;
    /// Reading or writing a file failed.
    pub const IO_ERR: u8 = 74;
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Argument(#[from] clap::Error),

    #[error("the input file '{}' could not be found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("the output path '{}' is not writable: {reason}", path.display())]
    OutputPathInvalid { path: PathBuf, reason: &'static str },

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Box(#[from] BoxError),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Argument(_) => exit_codes::USAGE,
            CliError::InputNotFound { .. } => exit_codes::NO_INPUT,
            CliError::OutputPathInvalid { .. } => exit_codes::CANT_CREATE,
            CliError::Read { .. } | CliError::Write { .. } => exit_codes::IO_ERR,
            CliError::Box(err) if err.is_allocation() => exit_codes::OS_ERR,
            CliError::Box(_) => exit_codes::SOFTWARE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_the_failure_kind() {
        let missing = CliError::InputNotFound {
            path: PathBuf::from("nope.txt"),
        };
        assert_eq!(missing.exit_code(), 66);
        assert_eq!(
            missing.to_string(),
            "the input file 'nope.txt' could not be found"
        );

        let write = CliError::Write {
            path: PathBuf::from("out.txt"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(write.exit_code(), 74);
        assert_eq!(write.to_string(), "failed to write 'out.txt': disk full");

        let overflow = CliError::from(BoxError::CapacityOverflow { width: 1, rows: 1 });
        assert_eq!(overflow.exit_code(), 71);

        let exceeded = CliError::from(BoxError::CapacityExceeded { capacity: 8 });
        assert_eq!(exceeded.exit_code(), 70);
    }
}
