//! Error handling for the htmlify application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for htmlify operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the MiniJinja engine during rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors in template processing outside the engine itself
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors compiling a source glob pattern
    #[error("Glob error: {0}.")]
    GlobError(#[from] globset::Error),

    /// A content filename does not follow the `<name>.htm` convention,
    /// so no page identifier can be derived from it.
    #[error("Malformed filename: '{filename}' does not match the '<name>.htm' pattern.")]
    MalformedFilename { filename: String },

    /// A base template or content file could not be read
    #[error("Cannot read '{path}': {source}.")]
    FileReadError { path: String, source: io::Error },

    /// A rendered page could not be written to its destination
    #[error("Cannot write '{path}': {source}.")]
    FileWriteError { path: String, source: io::Error },

    /// Raised after a keep-going run so per-file failures still fail the build
    #[error("Task '{task}' failed for {count} file(s).")]
    TaskError { task: String, count: usize },
}

/// Convenience type alias for Results with htmlify's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
