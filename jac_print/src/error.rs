//! Error types for jac_print
//!
//! This module defines the errors raised while rendering format strings,
//! writing to sinks, and configuring the global log level.

use thiserror::Error;

/// Result type for jac_print operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the format renderer
///
/// A format error is a programming mistake in the format string itself:
/// the only recovery is to fix the string. No partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Placeholder body is not a base-10 non-negative integer
    #[error("Invalid format string, expected integer got \"{0}\".")]
    ExpectedInteger(String),

    /// Placeholder resolved to an index past the end of the argument list
    #[error("Invalid format string, index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Placeholder found while the argument list is empty
    #[error("Invalid format string, no arguments provided.")]
    NoArguments,

    /// Lone '}' that is neither "}}" nor closing a placeholder
    #[error("Invalid format string, unexpected '}}'.")]
    UnexpectedClosingBrace,

    /// '{' with no matching '}' before the end of the string
    #[error("Invalid format string, unclosed '{{' at byte {0}.")]
    UnclosedPlaceholder(usize),
}

/// jac_print errors
#[derive(Debug, Error)]
pub enum Error {
    /// Format string could not be rendered
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Writing to the sink failed
    #[error("Sink error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown log level name
    #[error("Invalid log level: \"{0}\"")]
    InvalidLogLevel(String),

    /// The `log` facade already has a logger installed
    #[error("Logger install failed: {0}")]
    LoggerInstall(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
