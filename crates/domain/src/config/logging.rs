use serde::{Deserialize, Serialize};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn is_valid_level(level: &str) -> bool {
        LOG_LEVELS.contains(&level.to_lowercase().as_str())
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
