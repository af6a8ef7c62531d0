use super::Probe;
use crate::ports::HostResolver;
use async_trait::async_trait;
use dns_probe_domain::{DomainError, Hostname, ProbeResult, ResolvedHost};
use std::sync::Arc;
use std::time::Instant;

pub struct ForwardLookupProbe {
    resolver: Arc<dyn HostResolver>,
    hostname: Hostname,
}

impl ForwardLookupProbe {
    pub fn new(resolver: Arc<dyn HostResolver>, hostname: Hostname) -> Self {
        Self { resolver, hostname }
    }
}

#[async_trait]
impl Probe for ForwardLookupProbe {
    async fn attempt(&self) -> Result<ProbeResult, DomainError> {
        let start = Instant::now();
        let address = self.resolver.forward(&self.hostname).await?;
        let elapsed = start.elapsed();

        Ok(ProbeResult::resolved(
            elapsed,
            ResolvedHost::new(self.hostname.as_str(), address),
        ))
    }
}
