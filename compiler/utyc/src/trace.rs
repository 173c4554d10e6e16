//! Tracing sink installation.
//!
//! The subscriber is process-global. Once a sink is in place, whether ours
//! or one the host installed first, later calls are no-ops whatever sink
//! they ask for. A sink that fails to open leaves nothing installed, so a
//! later call may still succeed. Filtering follows `RUST_LOG`, falling back
//! to [`DEFAULT_FILTER`].

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

use crate::{ConfigError, TraceSink, DEFAULT_FILTER};

static TRACING_INSTALLED: Mutex<bool> = Mutex::new(false);

/// Install the global subscriber for `sink`.
///
/// Safe to call multiple times. `TraceSink::None` never claims the global
/// slot. Enable more detail with `RUST_LOG=uty=debug` or
/// `RUST_LOG=uty=trace`.
pub fn init_tracing(sink: &TraceSink) -> Result<(), ConfigError> {
    if *sink == TraceSink::None {
        return Ok(());
    }
    let mut installed = TRACING_INSTALLED
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if *installed {
        return Ok(());
    }
    install(sink)?;
    *installed = true;
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn install(sink: &TraceSink) -> Result<(), ConfigError> {
    match sink {
        TraceSink::None => Ok(()),
        TraceSink::Console => {
            let layer = HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_indent_lines(true);
            keep_existing(
                tracing_subscriber::registry()
                    .with(layer)
                    .with(env_filter())
                    .try_init(),
            );
            Ok(())
        }
        TraceSink::File(path) => {
            let file = open_trace_file(path)?;
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_writer(Mutex::new(file));
            keep_existing(
                tracing_subscriber::registry()
                    .with(layer)
                    .with(env_filter())
                    .try_init(),
            );
            Ok(())
        }
    }
}

/// A host subscriber already set wins over ours; events go to it instead.
fn keep_existing(result: Result<(), TryInitError>) {
    if let Err(err) = result {
        tracing::debug!(%err, "global subscriber already set, keeping it");
    }
}

/// Open `path` for appending, creating it if needed.
pub(crate) fn open_trace_file(path: &Path) -> Result<File, ConfigError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::TraceFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
