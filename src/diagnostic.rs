//! Per-block events raised while transforming a file.
//! Neither event stops processing; callers decide how to present them.

use std::fmt;
use std::path::PathBuf;

use log::Level;

/// A recoverable, per-block event. Line numbers are 1-based and point at the
/// start marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A start marker with no matching end marker; the block was skipped
    UnclosedMarker {
        file: PathBuf,
        line: usize,
        path: String,
    },
    /// The referenced path is not an existing regular file; the block was left as-is
    MissingReference {
        file: PathBuf,
        line: usize,
        path: String,
    },
}

impl Diagnostic {
    /// Log level the event should be reported at.
    pub fn level(&self) -> Level {
        match self {
            Diagnostic::UnclosedMarker { .. } => Level::Warn,
            Diagnostic::MissingReference { .. } => Level::Info,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Diagnostic::UnclosedMarker { line, .. } | Diagnostic::MissingReference { line, .. } => {
                *line
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnclosedMarker { file, line, path } => write!(
                f,
                "{}:{}: unclosed marker for '{}'",
                file.display(),
                line,
                path
            ),
            Diagnostic::MissingReference { file, line, path } => write!(
                f,
                "{}:{}: skipping missing include target '{}'",
                file.display(),
                line,
                path
            ),
        }
    }
}
