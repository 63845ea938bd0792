//! Error handling for the examplegen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for examplegen operations.
///
/// One variant per failure phase; every variant renders as a single
/// human-readable line prefixed with the phase it belongs to.
#[derive(Error, Debug)]
pub enum Error {
    /// Empty brand prefix or an unusable template root
    #[error("Configuration error: {0}")]
    Config(String),

    /// The filesystem reported an error while visiting an entry
    #[error("Error walking the path: {0}")]
    Walk(#[from] walkdir::Error),

    /// An output directory could not be created
    #[error("Error creating output directory: {0}")]
    CreateDir(#[source] io::Error),

    /// A template file could not be read
    #[error("Error reading template: {0}")]
    ReadTemplate(#[source] io::Error),

    /// Malformed template syntax
    #[error("Error parsing template: {0}")]
    ParseTemplate(#[source] minijinja::Error),

    /// An unresolved placeholder reference or a failure while rendering
    #[error("Error executing template: {0}")]
    ExecuteTemplate(#[source] minijinja::Error),

    /// An output file could not be created or written
    #[error("Error creating output file: {0}")]
    WriteOutput(#[source] io::Error),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
