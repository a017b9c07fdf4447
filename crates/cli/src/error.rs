// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and exit codes.
//!
//! A tool exiting non-zero is not an error here: its status is reported as
//! an outcome and passed through unchanged. These variants cover failures
//! that happen before or around the tool invocation.

use std::path::PathBuf;

/// Process exit code for crdtask's own failures.
///
/// Tool failures bypass this type: their raw status is returned as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Everything ran and succeeded.
    Success,
    /// Invalid usage or configuration (bad task file, unknown alias, cycle).
    ConfigError,
    /// The tool exists but could not be executed.
    NotExecutable,
    /// The tool program was not found.
    NotFound,
}

impl ExitCode {
    /// Numeric process status.
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::ConfigError => 2,
            ExitCode::NotExecutable => 126,
            ExitCode::NotFound => 127,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

/// Errors raised while loading configuration, resolving aliases or
/// spawning tools.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid task file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("unknown alias `{name}` (known aliases: {})", known.join(", "))]
    UnknownAlias { name: String, known: Vec<String> },

    #[error("alias cycle: {}", path.join(" -> "))]
    AliasCycle { path: Vec<String> },

    #[error("invalid alias `{name}`: {reason}")]
    InvalidAlias { name: String, reason: String },

    #[error("invalid placeholder in `{template}`: {reason}")]
    Placeholder { template: String, reason: String },

    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Exit code reported to the shell when this error ends the run.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ExitCode::NotFound
            }
            Error::Spawn { .. } => ExitCode::NotExecutable,
            _ => ExitCode::ConfigError,
        }
    }
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
