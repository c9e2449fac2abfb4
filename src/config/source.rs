//! Data source configuration
//!
//! Selects which PropertySource backs the app and tunes it.

use serde::Deserialize;

/// Which property source to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// Built-in catalogue (default)
    #[default]
    Fixture,
    /// Remote JSON API at `api_url`
    Http,
}

impl SourceKind {
    /// Parse source kind; unknown values fall back to the fixture
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "http" => Self::Http,
            _ => Self::Fixture,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixture => "fixture",
            Self::Http => "http",
        }
    }
}

/// Property source settings
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Base URL of the HTTP API (http source only)
    pub api_url: String,
    /// Request timeout (http source only)
    pub timeout_secs: u64,
    /// Probability that a fixture call fails (fixture source only)
    pub failure_rate: f64,
    /// Simulated per-call latency (fixture source only)
    pub latency_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Fixture,
            api_url: "http://127.0.0.1:3000".to_string(),
            timeout_secs: 10,
            failure_rate: 0.0,
            latency_ms: 150,
        }
    }
}

/// Source settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSource {
    pub kind: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub failure_rate: Option<f64>,
    pub latency_ms: Option<u64>,
}

/// Environment overrides for the source section
#[derive(Debug, Default)]
pub struct SourceOverrides {
    pub kind: Option<String>,
    pub api_url: Option<String>,
    pub failure_rate: Option<f64>,
}

impl SourceConfig {
    /// Create from file config with defaults, then apply env overrides
    pub fn from_file(file: Option<FileSource>, env: SourceOverrides) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            kind: env
                .kind
                .or(file.kind)
                .map(|s| SourceKind::parse(&s))
                .unwrap_or(defaults.kind),
            api_url: env.api_url.or(file.api_url).unwrap_or(defaults.api_url),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
            failure_rate: env
                .failure_rate
                .or(file.failure_rate)
                .unwrap_or(defaults.failure_rate),
            latency_ms: file.latency_ms.unwrap_or(defaults.latency_ms),
        }
    }
}
