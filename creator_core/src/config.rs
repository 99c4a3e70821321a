//! # Settings
//!
//! Optional JSON settings file. Every field has a default, so an empty
//! object (or no file at all) is a valid configuration.
//!
//! ```json
//! {
//!   "analytics": {
//!     "enabled": true,
//!     "sink": { "kind": "file", "path": "events.jsonl" }
//!   },
//!   "loading_delay_ms": 300
//! }
//! ```
//!
//! Sink kinds: `none`, `file { path }`, `http { endpoint, timeout_secs }`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analytics::{AnalyticsSink, NoopSink};
use crate::errors::{CalcError, CalcResult};

/// Environment variable naming the settings file
pub const CONFIG_ENV: &str = "CREATOR_CALC_CONFIG";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

/// Where analytics events go
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SinkConfig {
    #[default]
    None,
    File {
        path: PathBuf,
    },
    Http {
        endpoint: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    pub enabled: bool,
    pub sink: SinkConfig,
}

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub analytics: AnalyticsSettings,
    /// Cosmetic pause before showing a result (presentation only)
    pub loading_delay_ms: u64,
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let shown = path.display().to_string();
        let contents =
            std::fs::read_to_string(path).map_err(|e| CalcError::config(&shown, e.to_string()))?;
        let settings: Settings =
            serde_json::from_str(&contents).map_err(|e| CalcError::config(&shown, e.to_string()))?;
        tracing::debug!(path = %shown, "settings loaded");
        Ok(settings)
    }

    /// Load from `path`, else from `$CREATOR_CALC_CONFIG`, else defaults
    pub fn resolve(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(p) => Settings::load(p),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(p) if !p.is_empty() => Settings::load(Path::new(&p)),
                _ => Ok(Settings::default()),
            },
        }
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Construct the configured analytics sink
    pub fn build_sink(&self) -> CalcResult<Box<dyn AnalyticsSink>> {
        if !self.analytics.enabled {
            return Ok(Box::new(NoopSink));
        }
        build_sink(&self.analytics.sink)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_sink(config: &SinkConfig) -> CalcResult<Box<dyn AnalyticsSink>> {
    use crate::analytics::{HttpSink, JsonlFileSink};

    match config {
        SinkConfig::None => Ok(Box::new(NoopSink)),
        SinkConfig::File { path } => Ok(Box::new(JsonlFileSink::new(path.clone()))),
        SinkConfig::Http { endpoint, timeout_secs } => {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(CalcError::config(
                    "analytics.sink.endpoint",
                    format!("'{}' is not an http(s) URL", endpoint),
                ));
            }
            Ok(Box::new(HttpSink::new(endpoint.clone(), Duration::from_secs(*timeout_secs))?))
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn build_sink(config: &SinkConfig) -> CalcResult<Box<dyn AnalyticsSink>> {
    match config {
        SinkConfig::None => Ok(Box::new(NoopSink)),
        _ => Err(CalcError::config("analytics.sink", "only 'none' is supported on this target")),
    }
}
