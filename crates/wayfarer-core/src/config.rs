// crates/wayfarer-core/src/config.rs
use crate::api::DEFAULT_BASE_URL;
use crate::error::{Result, WayfarerError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// -----------------------------------------------------------------------------
// DEFAULTS
// -----------------------------------------------------------------------------

/// Upper bound on a single lookup. The browser client this replaces never
/// set one; a hung request would otherwise keep the loading flag on forever.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 12_000;
pub const DEFAULT_PADDING_FACTOR: f64 = 0.3;
pub const DEFAULT_ERROR_NOTICE_MS: u64 = 5_000;
pub const DEFAULT_INFO_NOTICE_MS: u64 = 3_000;

pub const DEFAULT_FEATURED: [&str; 6] = [
    "Japan",
    "Italy",
    "Iceland",
    "Peru",
    "New Zealand",
    "Morocco",
];

/// What a surface shows after a lookup that matched nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPolicy {
    /// Leave the previous results on screen and only post a notice.
    #[default]
    KeepResults,
    /// Clear records and markers, then post the notice.
    ClearResults,
}

/// Runtime configuration shared by the coordinator, reconciler and featured
/// loader. Every field has a default, so a config file only needs the keys
/// it overrides:
///
/// ```json
/// { "base_url": "http://localhost:8080", "featured_concurrency": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WayfarerConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
    /// Also abort the transport of a superseded lookup. Correctness never
    /// depends on this; stale results are discarded by token either way.
    pub abort_superseded: bool,
    pub padding_factor: f64,
    pub error_notice_ms: u64,
    pub info_notice_ms: u64,
    pub empty_policy: EmptyPolicy,
    pub featured: Vec<String>,
    /// How many featured lookups may be in flight at once. `1` issues them
    /// one after another.
    pub featured_concurrency: usize,
}

impl Default for WayfarerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            abort_superseded: true,
            padding_factor: DEFAULT_PADDING_FACTOR,
            error_notice_ms: DEFAULT_ERROR_NOTICE_MS,
            info_notice_ms: DEFAULT_INFO_NOTICE_MS,
            empty_policy: EmptyPolicy::default(),
            featured: DEFAULT_FEATURED.iter().map(|s| s.to_string()).collect(),
            featured_concurrency: 1,
        }
    }
}

impl WayfarerConfig {
    /// Read a JSON config file; missing keys take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            WayfarerError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(WayfarerError::Config("base_url must not be empty".into()));
        }
        if self.request_timeout_ms == 0 {
            return Err(WayfarerError::Config("request_timeout_ms must be positive".into()));
        }
        if !self.padding_factor.is_finite() || self.padding_factor < 0.0 {
            return Err(WayfarerError::Config(format!(
                "padding_factor must be a non-negative number, got {}",
                self.padding_factor
            )));
        }
        if self.featured_concurrency == 0 {
            return Err(WayfarerError::Config("featured_concurrency must be at least 1".into()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn error_notice_ttl(&self) -> Duration {
        Duration::from_millis(self.error_notice_ms)
    }

    pub fn info_notice_ttl(&self) -> Duration {
        Duration::from_millis(self.info_notice_ms)
    }
}
