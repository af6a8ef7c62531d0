use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

pub const DNS_PORT: u16 = 53;
const DNS_URL_SCHEME: &str = "dns:";

/// Backing configuration of the record directory.
///
/// An empty server list selects the system resolver configuration. Timeout
/// and attempts fall back to the platform defaults when unset.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub servers: Vec<String>,

    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub attempts: Option<usize>,
}

impl DirectoryConfig {
    pub fn uses_system_servers(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Resolves every configured server into a socket address.
    pub fn server_addresses(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.servers
            .iter()
            .map(|s| parse_server(s))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server_addresses()?;

        if self.timeout_ms == Some(0) {
            return Err(ConfigError::Validation(
                "directory timeout_ms cannot be 0".to_string(),
            ));
        }
        if self.attempts == Some(0) {
            return Err(ConfigError::Validation(
                "directory attempts cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses `dns://host[:port][/domain]` or a bare `host[:port]`.
///
/// Only IP literals are accepted as hosts; the port defaults to 53.
pub fn parse_server(server: &str) -> Result<SocketAddr, ConfigError> {
    let host = server_host(server);
    if host.is_empty() {
        return Err(ConfigError::Validation(format!(
            "DNS server '{}' has no host",
            server
        )));
    }

    if let Ok(addr) = host.parse::<SocketAddr>() {
        return Ok(addr);
    }

    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .map_err(|_| {
            ConfigError::Validation(format!(
                "DNS server '{}' is not an IP address with optional port",
                server
            ))
        })
}

fn server_host(server: &str) -> &str {
    let trimmed = server.trim();
    let without_scheme = trimmed
        .strip_prefix(DNS_URL_SCHEME)
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(trimmed);

    without_scheme.split('/').next().unwrap_or_default()
}
