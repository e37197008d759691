//! Application configuration
//!
//! Every field has a default, so a partial JSON override only changes what it names.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainResult, DEFAULT_HISTORY_CAP};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Storage key for the tracker's task list
    pub tracker_key: String,
    /// Storage key for the study hub document
    pub hub_key: String,
    /// Maximum number of remembered searches
    pub history_cap: usize,
    /// Delay before mock search results appear
    pub search_delay_ms: u32,
    /// How long a toast stays visible
    pub toast_ms: u32,
    /// Preset applied on load and on reset
    pub default_timer_minutes: u32,
    /// Preset chips offered by the timer
    pub timer_presets: Vec<u32>,
    /// Maximum log level: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tracker_key: "studyflow_tasks".to_string(),
            hub_key: "studyhub_data".to_string(),
            history_cap: DEFAULT_HISTORY_CAP,
            search_delay_ms: 800,
            toast_ms: 2500,
            default_timer_minutes: 25,
            timer_presets: vec![15, 25, 45, 60],
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON override on top of the defaults
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The configured level, falling back to `Info` on unknown names
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
