use dns_probe_domain::{DirectoryConfig, DomainError};
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use std::net::SocketAddr;
use tracing::debug;

/// Builds resolver contexts from an explicit [`DirectoryConfig`].
///
/// Every call yields a fresh context, so nothing learned by one lookup is
/// reused by the next one.
#[derive(Debug, Clone)]
pub struct ResolverFactory {
    config: DirectoryConfig,
    servers: Vec<SocketAddr>,
    use_hosts_file: bool,
}

impl ResolverFactory {
    pub fn new(config: DirectoryConfig) -> Result<Self, DomainError> {
        let servers = config
            .server_addresses()
            .map_err(|e| DomainError::resolution("directory configuration", e))?;

        Ok(Self {
            config,
            servers,
            use_hosts_file: false,
        })
    }

    /// Resolver backed by the system configuration, hosts file included.
    pub fn system() -> Self {
        Self {
            config: DirectoryConfig::default(),
            servers: Vec::new(),
            use_hosts_file: true,
        }
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    pub fn build(&self) -> Result<TokioAsyncResolver, DomainError> {
        let (config, mut opts) = if self.servers.is_empty() {
            read_system_conf().map_err(|e| DomainError::resolution("system resolver", e))?
        } else {
            (self.explicit_config(), ResolverOpts::default())
        };

        if let Some(timeout) = self.config.timeout() {
            opts.timeout = timeout;
        }
        if let Some(attempts) = self.config.attempts {
            opts.attempts = attempts;
        }
        opts.ndots = 0;
        opts.cache_size = 0;
        opts.use_hosts_file = self.use_hosts_file;

        debug!(
            servers = config.name_servers().len(),
            timeout_ms = opts.timeout.as_millis() as u64,
            attempts = opts.attempts,
            "Resolver context created"
        );

        Ok(TokioAsyncResolver::tokio(config, opts))
    }

    fn explicit_config(&self) -> ResolverConfig {
        let mut group = NameServerConfigGroup::new();
        for server in &self.servers {
            group.merge(NameServerConfigGroup::from_ips_clear(
                &[server.ip()],
                server.port(),
                true,
            ));
        }
        ResolverConfig::from_parts(None, vec![], group)
    }
}
