use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (default: "info")
    /// Options: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Include module targets in log lines (default: true)
    #[serde(default = "default_targets")]
    pub targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            targets: default_targets(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_targets() -> bool {
    true
}
