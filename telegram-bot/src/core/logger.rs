//! Tracing setup for the bot process.
//!
//! One plain-text line per event, written to stdout and appended to the log file:
//!
//! ```text
//! 2021-06-21 09:14:02 INFO cowin_bot::handler: step: command matched command="find_by_pin"
//! 2021-06-21 09:14:02 WARN telegram_bot::telegram::runner: Event caused error chat_id=42 error=No results: ...
//! ```

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Local wall-clock timestamp, second precision.
struct LocalSeconds;

impl FormatTime for LocalSeconds {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

fn open_log_file(path: &str) -> io::Result<File> {
    match Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
        _ => {}
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber. Call once, after `.env` is loaded so `RUST_LOG` applies.
///
/// Missing parent directories of `log_file_path` are created. ANSI colors stay off so the
/// file and a redirected stdout read the same.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = Arc::new(open_log_file(log_file_path)?);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let format = tracing_subscriber::fmt::format()
        .with_timer(LocalSeconds)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout.and(file))
        .event_format(format)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing already initialized: {}", e))
}
