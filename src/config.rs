//! Configuration management for Routine
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::board::TaskPolicy;
use crate::constants::{
    CONFIG_GENERATED, DEFAULT_NAVIGATION_DURATION_MS, DEFAULT_SPRING_BACK_DURATION_MS, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_TOGGLE_DURATION_MS, MAX_ANIMATION_DURATION_MS,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub calendar: CalendarConfig,
    pub animation: AnimationConfig,
    pub policy: PolicyConfig,
    pub logging: LoggingConfig,
    pub profile: ProfileConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (drag the week strip to change weeks)
    pub mouse_enabled: bool,
    /// Show the day selector above the task list
    pub show_week_strip: bool,
}

/// Calendar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// First day of the week: "sunday" or "monday"
    pub week_start: String,
}

/// Animation timings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of the completion toggle slide
    pub toggle_duration_ms: u64,
    /// Duration of a week change
    pub navigation_duration_ms: u64,
    /// Duration of the spring back after a short drag
    pub spring_back_duration_ms: u64,
    /// Minimum horizontal drag, in pixels, that changes the week
    pub swipe_threshold: f32,
}

/// Date rules for creating and completing tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Reject tasks dated before today
    pub forbid_past_creation: bool,
    /// Reject completing tasks dated after today
    pub forbid_future_completion: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

/// Offline profile shown when no identity provider is connected
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub display_name: String,
    pub email: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            show_week_strip: true,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: "sunday".to_string(),
        }
    }
}

impl CalendarConfig {
    /// Configured week start; falls back to Sunday when unrecognised
    pub fn week_start_day(&self) -> Weekday {
        datetime::parse_week_start(&self.week_start).unwrap_or(Weekday::Sun)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            toggle_duration_ms: DEFAULT_TOGGLE_DURATION_MS,
            navigation_duration_ms: DEFAULT_NAVIGATION_DURATION_MS,
            spring_back_duration_ms: DEFAULT_SPRING_BACK_DURATION_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl AnimationConfig {
    pub fn toggle_duration(&self) -> Duration {
        Duration::from_millis(self.toggle_duration_ms)
    }

    pub fn navigation_duration(&self) -> Duration {
        Duration::from_millis(self.navigation_duration_ms)
    }

    pub fn spring_back_duration(&self) -> Duration {
        Duration::from_millis(self.spring_back_duration_ms)
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let policy = TaskPolicy::default();
        Self {
            forbid_past_creation: policy.forbid_past_creation,
            forbid_future_completion: policy.forbid_future_completion,
        }
    }
}

impl PolicyConfig {
    pub fn task_policy(&self) -> TaskPolicy {
        TaskPolicy {
            forbid_past_creation: self.forbid_past_creation,
            forbid_future_completion: self.forbid_future_completion,
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: "Guest".to_string(),
            email: "guest@localhost".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

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
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("routine.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("routine").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if datetime::parse_week_start(&self.calendar.week_start).is_none() {
            anyhow::bail!(
                "week_start must be \"sunday\" or \"monday\", got '{}'",
                self.calendar.week_start
            );
        }

        let durations = [
            ("toggle_duration_ms", self.animation.toggle_duration_ms),
            ("navigation_duration_ms", self.animation.navigation_duration_ms),
            ("spring_back_duration_ms", self.animation.spring_back_duration_ms),
        ];
        for (name, value) in durations {
            if value == 0 || value > MAX_ANIMATION_DURATION_MS {
                anyhow::bail!(
                    "{} must be between 1 and {} milliseconds, got {}",
                    name,
                    MAX_ANIMATION_DURATION_MS,
                    value
                );
            }
        }

        if !(self.animation.swipe_threshold > 0.0) {
            anyhow::bail!(
                "swipe_threshold must be greater than 0, got {}",
                self.animation.swipe_threshold
            );
        }

        if self.profile.display_name.trim().is_empty() {
            anyhow::bail!("profile display_name cannot be empty");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Routine Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
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
            .map(|dir| dir.join("routine"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }

    /// Directory for runtime data (log file, profile cache)
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("routine"))
    }
}
