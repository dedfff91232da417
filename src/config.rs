//! Scheduling configuration file support.
//!
//! Working-window clock bounds and the default search knobs are configuration
//! constants, not data. They can be overridden from a `docket.toml` file; every
//! field has a default so a missing file or a partial file both work.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Inclusive bounds for a hearing duration, in minutes.
pub const DURATION_MIN_MINUTES: i32 = 15;
pub const DURATION_MAX_MINUTES: i32 = 480;

/// Inclusive bounds for the rounding grid, in minutes (0 = no rounding).
pub const GRID_MIN_MINUTES: i32 = 0;
pub const GRID_MAX_MINUTES: i32 = 60;

/// Scheduling configuration loaded from file (or defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    #[serde(default)]
    pub working_hours: WorkingHours,
    #[serde(default)]
    pub search_defaults: SearchDefaults,
}

/// Clock bounds of the two daily work windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    #[serde(default = "default_morning_start")]
    pub morning_start: String,
    #[serde(default = "default_morning_end")]
    pub morning_end: String,
    #[serde(default = "default_afternoon_start")]
    pub afternoon_start: String,
    #[serde(default = "default_afternoon_end")]
    pub afternoon_end: String,
}

/// Default knobs applied when a free-slot request omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDefaults {
    #[serde(default = "default_buffer_minutes")]
    pub buffer_before_minutes: i32,
    #[serde(default = "default_buffer_minutes")]
    pub buffer_after_minutes: i32,
    #[serde(default = "default_grid_minutes")]
    pub grid_minutes: i32,
    #[serde(default = "default_min_gap_minutes")]
    pub min_gap_minutes: i32,
}

fn default_morning_start() -> String {
    "08:00".to_string()
}

fn default_morning_end() -> String {
    "12:00".to_string()
}

fn default_afternoon_start() -> String {
    "13:00".to_string()
}

fn default_afternoon_end() -> String {
    "18:00".to_string()
}

fn default_buffer_minutes() -> i32 {
    10
}

fn default_grid_minutes() -> i32 {
    15
}

fn default_min_gap_minutes() -> i32 {
    5
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            morning_start: default_morning_start(),
            morning_end: default_morning_end(),
            afternoon_start: default_afternoon_start(),
            afternoon_end: default_afternoon_end(),
        }
    }
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            buffer_before_minutes: default_buffer_minutes(),
            buffer_after_minutes: default_buffer_minutes(),
            grid_minutes: default_grid_minutes(),
            min_gap_minutes: default_min_gap_minutes(),
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            working_hours: WorkingHours::default(),
            search_defaults: SearchDefaults::default(),
        }
    }
}

impl SchedulingConfig {
    /// Load scheduling configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SchedulingConfig = toml::from_str(&content)?;
        config.working_windows()?; // reject unparseable clock bounds up front
        Ok(config)
    }

    /// Load configuration from the default locations, falling back to the
    /// built-in defaults when no `docket.toml` exists.
    pub fn from_default_location() -> Self {
        let search_paths = vec![
            PathBuf::from("docket.toml"),
            PathBuf::from("backend/docket.toml"),
            PathBuf::from("../docket.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    /// Parsed clock bounds of the daily windows, morning before afternoon.
    pub fn working_windows(&self) -> anyhow::Result<Vec<(NaiveTime, NaiveTime)>> {
        let parse = |s: &str| -> anyhow::Result<NaiveTime> {
            NaiveTime::parse_from_str(s, "%H:%M")
                .map_err(|e| anyhow::anyhow!("invalid clock time '{}': {}", s, e))
        };
        Ok(vec![
            (
                parse(&self.working_hours.morning_start)?,
                parse(&self.working_hours.morning_end)?,
            ),
            (
                parse(&self.working_hours.afternoon_start)?,
                parse(&self.working_hours.afternoon_end)?,
            ),
        ])
    }
}
