use super::probes::{
    ForwardLookupProbe, LocalHostProbe, Probe, RecordQueryProbe, ReverseLookupProbe,
};
use crate::ports::{HostResolver, LineSink, RecordDirectory};
use dns_probe_domain::{DomainError, ProbeKind, ProbeRequest};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u32,
    /// Attempts whose failure was recovered and reported inline.
    pub failures: u32,
}

/// Looped runner: repeats the probe selected by a request and streams its
/// output through a [`LineSink`].
pub struct RunProbeUseCase {
    host_resolver: Arc<dyn HostResolver>,
    record_directory: Arc<dyn RecordDirectory>,
}

impl RunProbeUseCase {
    pub fn new(
        host_resolver: Arc<dyn HostResolver>,
        record_directory: Arc<dyn RecordDirectory>,
    ) -> Self {
        Self {
            host_resolver,
            record_directory,
        }
    }

    pub fn probe_for(&self, kind: &ProbeKind) -> Box<dyn Probe> {
        match kind {
            ProbeKind::LocalHost => Box::new(LocalHostProbe::new(self.host_resolver.clone())),
            ProbeKind::ReverseLookup(address) => Box::new(ReverseLookupProbe::new(
                self.host_resolver.clone(),
                *address,
            )),
            ProbeKind::ForwardLookup(hostname) => Box::new(ForwardLookupProbe::new(
                self.host_resolver.clone(),
                hostname.clone(),
            )),
            ProbeKind::RecordQuery {
                hostname,
                record_type,
            } => Box::new(RecordQueryProbe::new(
                self.record_directory.clone(),
                hostname.clone(),
                *record_type,
            )),
        }
    }

    pub async fn execute(
        &self,
        request: &ProbeRequest,
        sink: &mut dyn LineSink,
    ) -> Result<RunSummary, DomainError> {
        let probe = self.probe_for(&request.kind);
        run_looped(probe.as_ref(), request, sink).await
    }
}

/// Writes the header once, then runs `probe` `request.iterations` times.
///
/// Every line reaches the sink before the next attempt starts. A probe error
/// stops the loop and is returned as is.
pub async fn run_looped(
    probe: &dyn Probe,
    request: &ProbeRequest,
    sink: &mut dyn LineSink,
) -> Result<RunSummary, DomainError> {
    sink.emit(&request.header())?;
    sink.emit("")?;

    let mut summary = RunSummary::default();

    for iteration in 0..request.iterations {
        if iteration > 0 {
            if let Some(delay) = request.delay() {
                tokio::time::sleep(delay).await;
            }
        }

        let result = probe.attempt().await?;
        if result.failure().is_some() {
            summary.failures += 1;
        }

        for line in result.lines() {
            sink.emit(&line)?;
        }
        summary.iterations += 1;
    }

    debug!(
        iterations = summary.iterations,
        failures = summary.failures,
        "Probe run finished"
    );
    Ok(summary)
}
