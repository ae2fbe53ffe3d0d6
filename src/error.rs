//! Error handling for the Inlay application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for Inlay operations.
///
/// Configuration errors are fatal and stop the run before any file is touched.
/// Everything else is scoped to a single file and is reported by the caller
/// without aborting the walk.
#[derive(Error, Debug)]
pub enum InlayError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors in the configuration file or in a rule record
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A referenced file exists but could not be read
    #[error("Failed to read referenced file '{}': {source}.", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file selected for processing could not be read, transformed or written
    #[error("Failed to process '{path}': {error}.")]
    ProcessError { path: String, error: String },
}

/// Convenience type alias for Results with InlayError as the error type.
pub type InlayResult<T> = Result<T, InlayError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The InlayError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: InlayError) {
    eprintln!("{}", err);
    std::process::exit(1);
}
