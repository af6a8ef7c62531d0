use super::Probe;
use crate::ports::HostResolver;
use async_trait::async_trait;
use dns_probe_domain::{DomainError, Ipv4Address, ProbeResult, ResolvedHost};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub struct ReverseLookupProbe {
    resolver: Arc<dyn HostResolver>,
    address: Ipv4Address,
}

impl ReverseLookupProbe {
    pub fn new(resolver: Arc<dyn HostResolver>, address: Ipv4Address) -> Self {
        Self { resolver, address }
    }
}

#[async_trait]
impl Probe for ReverseLookupProbe {
    async fn attempt(&self) -> Result<ProbeResult, DomainError> {
        let ip = IpAddr::V4(self.address.to_ipv4());

        let start = Instant::now();
        let name = self.resolver.reverse(ip).await?;
        let elapsed = start.elapsed();

        let host = match name {
            Some(name) => ResolvedHost::new(name, ip),
            None => {
                debug!(ip = %ip, "No PTR record, reporting bare address");
                ResolvedHost::unnamed(ip)
            }
        };
        Ok(ProbeResult::resolved(elapsed, host))
    }
}
