use anyhow::Context;
use dns_probe_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, overrides).context("Failed to load configuration")
}

/// Path of the configuration file in effect, if any.
pub fn config_source(path: Option<&str>) -> Option<String> {
    path.map(str::to_string).or_else(Config::get_config_path)
}
