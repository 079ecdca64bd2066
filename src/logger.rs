use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Upper bound on in-memory entries kept for the logs panel
const MAX_ENTRIES: usize = 500;

/// Shared logger that can be used across the application.
///
/// Every entry is kept in memory for the logs panel and forwarded to the
/// `log` facade, which writes to a file once [`Logger::init_file_logging`]
/// has installed a dispatcher.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Build a logger from configuration, installing the file dispatcher when enabled
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if config.enabled {
            Self::init_file_logging(config)?;
        }
        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: config.enabled,
        })
    }

    /// Whether file logging was requested
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Install a fern dispatcher writing to the log file.
    ///
    /// Only the first call per process installs a dispatcher; later calls are no-ops.
    pub fn init_file_logging(config: &LoggingConfig) -> Result<()> {
        let path = Self::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let level = config.level_filter();
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let installed = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(file)
            .apply();

        if installed.is_err() {
            log::debug!("Logger: dispatcher already installed, keeping existing one");
        }
        Ok(())
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("tasktrail").join("tasktrail.log"))
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_ENTRIES {
                let overflow = logs.len() - MAX_ENTRIES;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
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
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
