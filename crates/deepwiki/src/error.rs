//! Failures surfaced by the CLI and their exit codes.

use thiserror::Error;

/// Exit code for server, transport and application failures.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for malformed command-line input.
pub const EXIT_USAGE: u8 = 2;

/// Error type for CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad arguments, detected before any network call.
    #[error("{0}")]
    Usage(String),

    /// The DeepWiki call failed.
    #[error(transparent)]
    Server(#[from] deepwiki_client::Error),
}

impl CliError {
    /// Create a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => EXIT_USAGE,
            CliError::Server(_) => EXIT_FAILURE,
        }
    }
}

/// Exit code for any error reaching the entry point.
///
/// Errors that are not a [`CliError`] map to the generic failure code.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}
