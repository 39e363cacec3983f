//! Drill error types.
//!
//! Every variant is fatal at startup or on a broken output stream. Malformed
//! answers and end-of-input are not errors and never show up here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a drill session.
#[derive(Debug, Error)]
pub enum DrillError {
    /// No question kind was enabled.
    #[error("no question kinds enabled")]
    EmptyMode,

    /// The log file could not be created for lack of permissions.
    #[error("insufficient permissions for log file {}", path.display())]
    LogPermissionDenied { path: PathBuf },

    /// The log file already exists and would be overwritten.
    #[error("log file {} exists", path.display())]
    LogExists { path: PathBuf },

    /// Any other failure creating the log file.
    #[error("could not open log file {}", path.display())]
    LogOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the answer or writing the transcript failed.
    #[error("I/O error")]
    Io(#[from] io::Error),
}
