//! The CLI's error type and its exit-code mapping.
//!
//! Client errors fold into [`CliError`] here; `main` prints the message
//! and exits with [`CliError::exit_code`].

use thiserror::Error;
use wares_client::ClientError;

/// Anything a command handler can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failure talking to the catalog server.
    #[error("{0}")]
    Client(String),

    /// Argument parsing or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (reading prompts, broken pipe, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// The server failed to start or stopped unexpectedly.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// The process exit code for this error, per Unix conventions:
    /// 1 for general failures, 2 for invalid arguments, and the
    /// sysexits.h codes for the IO and server classes.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Client(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Server(_) => 71,   // EX_OSERR
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidUrl(parse_err) => {
                CliError::Arguments(format!("invalid server URL: {parse_err}"))
            }
            // A 400 echoes bad user input back, so it is a usage error.
            ClientError::Api {
                status: 400,
                message,
            } => CliError::Arguments(message),
            other => CliError::Client(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
