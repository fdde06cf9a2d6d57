//! Tracing setup writing to a per-session log file.
//!
//! The terminal is reserved for the battle log, so diagnostics go to
//! `<log dir>/<session>/client.log` only.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Keeps the file writer alive. Drop it last, at the end of `main`.
pub struct LogSession {
    pub session_id: String,
    pub log_file: PathBuf,
    _guard: WorkerGuard,
}

pub fn init(config: &ClientConfig) -> Result<LogSession> {
    let session_id = config
        .session_id
        .clone()
        .unwrap_or_else(|| format!("session_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S")));

    let base = config.log_dir.clone().unwrap_or_else(default_log_dir);
    let session_log_dir = base.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)
        .with_context(|| format!("creating log directory {}", session_log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    let log_file = session_log_dir.join("client.log");
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok(LogSession {
        session_id,
        log_file,
        _guard: guard,
    })
}

/// Platform cache directory for logs, falling back to the temp dir.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "spire")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("spire"))
        .join("logs")
}
