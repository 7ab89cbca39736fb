//! File-based logging setup.
//!
//! The TUI occupies stdout/stderr, so all tracing output goes to a log file
//! under the platform cache directory.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Setup logging to a file under the platform cache directory.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "hilo.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive for the process lifetime.
    std::mem::forget(guard);

    tracing::info!("Logging initialized: {}/hilo.log", log_dir.display());

    Ok(())
}

/// Platform-specific log directory
/// (e.g. `~/.cache/hilo/logs` on Linux, `~/Library/Caches/hilo/logs` on macOS).
fn log_directory() -> std::path::PathBuf {
    directories::ProjectDirs::from("", "", "hilo")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("/tmp/hilo"))
        .join("logs")
}
