//! Configuration management for Tasktrail
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DAYS_BACK_DEFAULT, DAYS_BACK_MAX, DEFAULT_ADD_BUTTON_TEXT, DEFAULT_TASKS_EMPTY_MESSAGE,
    DEFAULT_TASKS_TITLE, DEFAULT_TASK_PLACEHOLDER, ID_COLUMN_WIDTH_DEFAULT,
};
use crate::icons::IconTheme;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub tracker: TrackerConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// View shown on startup: "tasks" or "grid"
    pub default_view: String,
    /// Icon theme: "unicode", "ascii" or "emoji"
    pub icon_theme: IconTheme,
}

/// Daily task tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Number of days shown, ending today
    pub days_back: u32,
    pub header_title: String,
    pub add_button_text: String,
    pub empty_message: String,
    pub task_placeholder: String,
    pub show_delete_button: bool,
    /// Task name column width as a percentage of the grid
    pub id_column_width: u8,
    /// strftime format for the date column headers
    pub date_format: String,
    /// Task names to start with
    pub initial_tasks: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view: "tasks".to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            days_back: DAYS_BACK_DEFAULT,
            header_title: DEFAULT_TASKS_TITLE.to_string(),
            add_button_text: DEFAULT_ADD_BUTTON_TEXT.to_string(),
            empty_message: DEFAULT_TASKS_EMPTY_MESSAGE.to_string(),
            task_placeholder: DEFAULT_TASK_PLACEHOLDER.to_string(),
            show_delete_button: true,
            id_column_width: ID_COLUMN_WIDTH_DEFAULT,
            date_format: datetime::HEADER_DATE_FORMAT.to_string(),
            initial_tasks: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level, falling back to Info
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("tasktrail.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = dirs::config_dir()?.join("tasktrail").join("config.toml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !["tasks", "grid"].contains(&self.ui.default_view.as_str()) {
            anyhow::bail!(
                "default_view must be \"tasks\" or \"grid\", got \"{}\"",
                self.ui.default_view
            );
        }

        if self.tracker.days_back == 0 || self.tracker.days_back > DAYS_BACK_MAX {
            anyhow::bail!(
                "days_back must be between 1 and {}, got {}",
                DAYS_BACK_MAX,
                self.tracker.days_back
            );
        }

        if !(1..=99).contains(&self.tracker.id_column_width) {
            anyhow::bail!(crate::error::UiError::InvalidColumnWidth(self.tracker.id_column_width));
        }

        if !datetime::is_valid_format(&self.tracker.date_format) {
            anyhow::bail!(crate::error::UiError::InvalidDateFormat(self.tracker.date_format.clone()));
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Tasktrail Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_KEY_FORMAT)
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("tasktrail"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
