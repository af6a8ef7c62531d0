use async_trait::async_trait;
use dns_probe_application::ports::HostResolver;
use dns_probe_domain::{DomainError, Hostname, ResolvedHost};
use std::io;
use std::net::IpAddr;
use tracing::debug;

use crate::dns::{map_resolve_error, ResolverFactory};

/// Host resolution through the operating system resolver.
///
/// Forward and local lookups go through `getaddrinfo`; reverse lookups use a
/// resolver context built from the system configuration.
pub struct PlatformHostResolver {
    reverse_factory: ResolverFactory,
}

impl PlatformHostResolver {
    pub fn new() -> Self {
        Self {
            reverse_factory: ResolverFactory::system(),
        }
    }

    async fn first_address(name: &str) -> Result<IpAddr, DomainError> {
        let mut addrs = tokio::net::lookup_host((name, 0))
            .await
            .map_err(|e| map_io_error(name, e))?;

        addrs
            .next()
            .map(|addr| addr.ip())
            .ok_or_else(|| DomainError::NoRecords(name.to_string()))
    }
}

impl Default for PlatformHostResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for PlatformHostResolver {
    async fn local_host(&self) -> Result<ResolvedHost, DomainError> {
        let name = hostname::get()
            .map_err(|e| DomainError::resolution("local host name", e))?
            .to_string_lossy()
            .into_owned();

        let address = Self::first_address(&name).await?;
        debug!(hostname = %name, address = %address, "Local host resolved");
        Ok(ResolvedHost::new(name, address))
    }

    async fn forward(&self, hostname: &Hostname) -> Result<IpAddr, DomainError> {
        Self::first_address(hostname.as_str()).await
    }

    async fn reverse(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        let resolver = self.reverse_factory.build()?;
        let target = ip.to_string();

        match resolver.reverse_lookup(ip).await {
            Ok(response) => Ok(response
                .iter()
                .next()
                .map(|ptr| ptr.to_utf8().trim_end_matches('.').to_string())),
            Err(e) => match map_resolve_error(&target, e) {
                DomainError::NxDomain(_) | DomainError::NoRecords(_) => {
                    debug!(ip = %ip, "PTR lookup returned no records");
                    Ok(None)
                }
                other => Err(other),
            },
        }
    }
}

fn map_io_error(name: &str, err: io::Error) -> DomainError {
    match err.kind() {
        io::ErrorKind::TimedOut => DomainError::QueryTimeout(name.to_string()),
        _ => DomainError::resolution(name, err),
    }
}
