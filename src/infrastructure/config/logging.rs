//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info").
    pub level: String,
    /// "pretty" or "json".
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so command output on stdout stays clean.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        // A subscriber may already be installed (tests, repeated init).
        let _ = result;
    }

    /// Copy with the level replaced, as from a `--log-level` flag.
    #[must_use]
    pub fn with_level(mut self, level: Option<&str>) -> Self {
        if let Some(level) = level {
            self.level = level.to_string();
        }
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_override_applies_only_when_given() {
        let config = LoggingConfig::default();
        assert_eq!(config.clone().with_level(None).level, "warn");
        assert_eq!(config.with_level(Some("debug")).level, "debug");
    }
}
