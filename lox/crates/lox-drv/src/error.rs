//! Error handling for the lox driver.
//!
//! Every way a run can fail is a [`DriverError`]. The binary's `main` turns
//! it into a message on stderr and an exit status via
//! [`DriverError::exit_code`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status when lexical errors were reported.
pub const EXIT_DATA_ERROR: i32 = 65;

/// Exit status for usage, I/O and configuration failures.
pub const EXIT_FAILURE: i32 = 1;

/// Main error type for the lox driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// No command, or `tokenize` without a file name.
    #[error("Usage: lox tokenize <filename>")]
    Usage,

    /// A command the driver does not know.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The source file could not be read.
    #[error("Error reading file: {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },

    /// The configuration file is missing, unreadable or malformed, or logging
    /// could not be set up.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The scan reported lexical errors. The diagnostics themselves have
    /// already been written.
    #[error("{0} lexical error(s) reported")]
    LexicalErrors(usize),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Output(#[from] io::Error),
}

impl DriverError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::LexicalErrors(_) => EXIT_DATA_ERROR,
            _ => EXIT_FAILURE,
        }
    }

    /// Whether `main` should print this error.
    ///
    /// Lexical errors are not printed again; their diagnostics already went
    /// to stderr.
    pub fn should_print(&self) -> bool {
        !matches!(self, DriverError::LexicalErrors(_))
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
