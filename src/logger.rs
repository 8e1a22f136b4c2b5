use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::Config;

type LogBuffer = Arc<Mutex<Vec<String>>>;

/// Buffer shared with the global `log` dispatch. The dispatch can only be
/// installed once per process.
static DISPATCH_BUFFER: OnceCell<LogBuffer> = OnceCell::new();

/// Shared logger that can be used across the application.
///
/// Entries are kept in memory for the in-app log view. When file logging is
/// enabled, a `fern` dispatch routes every `log` record (ours and the
/// library's) both to the log file and into the same buffer.
#[derive(Clone)]
pub struct Logger {
    logs: LogBuffer,
    enabled: bool,
}

impl Logger {
    /// In-memory logger; `log` records are not captured
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Build the logger described by the `[logging]` section
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }

        let logs = DISPATCH_BUFFER.get_or_try_init(install_dispatch)?.clone();
        Ok(Self { logs, enabled: true })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        if self.enabled {
            log::info!("{}", message);
            return;
        }

        let formatted_message = format!("[{}] {}", timestamp(), message);
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Path of the log file written when logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join("routine.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

fn install_dispatch() -> Result<LogBuffer> {
    let path = Logger::get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let buffer: LogBuffer = Arc::new(Mutex::new(Vec::new()));
    let sink = buffer.clone();

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {} {}: {}", timestamp(), record.level(), record.target(), message))
        })
        .level(log::LevelFilter::Info)
        .level_for("routine", log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .chain(fern::Output::call(move |record| {
            if let Ok(mut logs) = sink.lock() {
                logs.push(record.args().to_string());
            }
        }))
        .apply()
        .context("Failed to install logger")?;

    Ok(buffer)
}
