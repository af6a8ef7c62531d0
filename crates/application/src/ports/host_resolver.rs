use async_trait::async_trait;
use dns_probe_domain::{DomainError, Hostname, ResolvedHost};
use std::net::IpAddr;

/// Name resolution through the platform's own resolver.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves the machine's configured host name to one of its addresses.
    async fn local_host(&self) -> Result<ResolvedHost, DomainError>;

    async fn forward(&self, hostname: &Hostname) -> Result<IpAddr, DomainError>;

    /// `Ok(None)` when the address has no PTR record.
    async fn reverse(&self, ip: IpAddr) -> Result<Option<String>, DomainError>;
}
