use serde::{Deserialize, Serialize};

use super::directory::DirectoryConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::probe::ProbeDefaults;

const LOCAL_CONFIG_PATH: &str = "dns-probe.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-probe/config.toml";

/// Main configuration structure for dns-probe
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Iteration and delay defaults
    #[serde(default)]
    pub probe: ProbeDefaults,

    /// Record directory backend
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-probe.toml in current directory
    /// 3. /etc/dns-probe/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.dns_servers.is_empty() {
            self.directory.servers = overrides.dns_servers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        self.directory.validate()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_servers: Vec<String>,
    pub log_level: Option<String>,
}
