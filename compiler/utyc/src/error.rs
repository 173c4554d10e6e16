//! Driver errors.
//!
//! Checking never fails; only setting up the run can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use uty_diagnostic::{Diagnostic, ErrorCode};

/// Failure to configure the checker's ambient services.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown trace sink `{0}` (expected `none`, `console` or `file:<path>`)")]
    UnknownTraceSink(String),

    #[error("trace sink `file:` needs a path")]
    EmptyTracePath,

    #[error("unknown output format `{0}` (expected `text` or `json`)")]
    UnknownFormat(String),

    #[error("unknown color mode `{0}` (expected `auto`, `always` or `never`)")]
    UnknownColorMode(String),

    #[error("cannot open trace file `{}`", path.display())]
    TraceFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Render as an error diagnostic with no source location.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(ErrorCode::E0001).with_message(self.to_string());
        match self {
            ConfigError::TraceFile { source, .. } => diagnostic.with_note(source.to_string()),
            _ => diagnostic,
        }
    }
}
