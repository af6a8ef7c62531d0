use super::Probe;
use crate::ports::HostResolver;
use async_trait::async_trait;
use dns_probe_domain::{DomainError, ProbeResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub struct LocalHostProbe {
    resolver: Arc<dyn HostResolver>,
}

impl LocalHostProbe {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Probe for LocalHostProbe {
    async fn attempt(&self) -> Result<ProbeResult, DomainError> {
        let start = Instant::now();
        let host = self.resolver.local_host().await?;
        let elapsed = start.elapsed();

        debug!(host = %host, elapsed_ms = elapsed.as_millis() as u64, "Local host resolved");
        Ok(ProbeResult::resolved(elapsed, host))
    }
}
