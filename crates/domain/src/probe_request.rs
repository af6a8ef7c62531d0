use super::{Hostname, Ipv4Address, RecordType};
use std::time::Duration;

pub const DEFAULT_ITERATIONS: u32 = 5;
pub const DEFAULT_FORWARD_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeKind {
    LocalHost,
    ReverseLookup(Ipv4Address),
    ForwardLookup(Hostname),
    RecordQuery {
        hostname: Hostname,
        record_type: RecordType,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub kind: ProbeKind,
    pub iterations: u32,
    pub delay_ms: Option<u64>,
}

impl ProbeRequest {
    pub fn new(kind: ProbeKind, iterations: u32) -> Self {
        Self {
            kind,
            iterations,
            delay_ms: None,
        }
    }

    pub fn local_host(iterations: u32) -> Self {
        Self::new(ProbeKind::LocalHost, iterations)
    }

    pub fn reverse(address: Ipv4Address, iterations: u32) -> Self {
        Self::new(ProbeKind::ReverseLookup(address), iterations)
    }

    pub fn forward(hostname: Hostname, iterations: u32, delay_ms: u64) -> Self {
        Self {
            delay_ms: Some(delay_ms),
            ..Self::new(ProbeKind::ForwardLookup(hostname), iterations)
        }
    }

    pub fn records(hostname: Hostname, record_type: RecordType, iterations: u32) -> Self {
        Self::new(
            ProbeKind::RecordQuery {
                hostname,
                record_type,
            },
            iterations,
        )
    }

    /// Pause between two iterations. A zero delay means none.
    pub fn delay(&self) -> Option<Duration> {
        self.delay_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    pub fn header(&self) -> String {
        match &self.kind {
            ProbeKind::LocalHost => "Looking up localhost...".to_string(),
            ProbeKind::ReverseLookup(address) => format!("Looking up {}...", address),
            ProbeKind::ForwardLookup(hostname) => format!("Looking up {}...", hostname),
            ProbeKind::RecordQuery {
                hostname,
                record_type,
            } => format!("Looking up {} record for {}...", record_type, hostname),
        }
    }
}
