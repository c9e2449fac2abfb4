//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# immo configuration

# Theme: immo, light, terminal
theme = "{theme}"

# Seconds before an error notification dismisses itself
toast_timeout_secs = {toast}

# Where property data comes from
[source]
kind = "{kind}"  # fixture, http
# Base URL of the property API (kind = "http")
api_url = "{api_url}"
timeout_secs = {timeout}
# Simulated behaviour of the built-in catalogue (kind = "fixture")
failure_rate = {failure_rate:?}
latency_ms = {latency}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            toast = self.toast_timeout_secs,
            kind = self.source.kind.as_str(),
            api_url = self.source.api_url,
            timeout = self.source.timeout_secs,
            failure_rate = self.source.failure_rate,
            latency = self.source.latency_ms,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
