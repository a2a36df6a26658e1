//! Opt-in JSON trace log.
//!
//! Rendered frames are written to stdout, so traces only ever go to a file.

use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

const TRACE_LOG_ENV: &str = "TTYFRAME_TRACE_LOG";
const TRACE_LEVEL_ENV: &str = "TTYFRAME_TRACE_LEVEL";

static ACTIVE_LOG: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Trace log location; `TTYFRAME_TRACE_LOG` overrides the temp file.
pub fn tracing_log_path() -> PathBuf {
    env::var_os(TRACE_LOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("ttyframe_trace.jsonl"))
}

/// Most verbose level recorded. Geometry is logged at debug, formatted
/// content at trace.
fn trace_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(Level::DEBUG)
}

fn open_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the JSON file subscriber, at most once per process.
///
/// Returns the log file in use, or `None` when logging is off, `no_logs` is
/// set, or the file cannot be opened. Later calls repeat the first result.
pub fn init_tracing(logs: bool, no_logs: bool) -> Option<PathBuf> {
    if !logs || no_logs {
        return None;
    }

    ACTIVE_LOG
        .get_or_init(|| {
            let path = tracing_log_path();
            let file = open_log(&path).ok()?;
            let level = trace_level(env::var(TRACE_LEVEL_ENV).ok().as_deref());
            let subscriber = tracing_subscriber::fmt()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(file)
                .with_max_level(level)
                .with_ansi(false)
                .with_current_span(false)
                .with_span_list(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber).ok()?;
            Some(path)
        })
        .clone()
}
