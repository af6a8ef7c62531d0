use crate::DomainError;
use std::collections::BTreeSet;
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

/// Address returned by a host probe, with the name it is known by if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    pub name: Option<String>,
    pub address: IpAddr,
}

impl ResolvedHost {
    pub fn new(name: impl Into<String>, address: IpAddr) -> Self {
        Self {
            name: Some(name.into()),
            address,
        }
    }

    pub fn unnamed(address: IpAddr) -> Self {
        Self {
            name: None,
            address,
        }
    }
}

impl fmt::Display for ResolvedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}/{}", name, self.address),
            None => write!(f, "/{}", self.address),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Resolved(ResolvedHost),
    Records {
        records: BTreeSet<String>,
        failure: Option<DomainError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub elapsed_ms: u64,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn resolved(elapsed: Duration, host: ResolvedHost) -> Self {
        Self {
            elapsed_ms: millis(elapsed),
            outcome: ProbeOutcome::Resolved(host),
        }
    }

    pub fn records(
        elapsed: Duration,
        records: BTreeSet<String>,
        failure: Option<DomainError>,
    ) -> Self {
        Self {
            elapsed_ms: millis(elapsed),
            outcome: ProbeOutcome::Records { records, failure },
        }
    }

    pub fn failure(&self) -> Option<&DomainError> {
        match &self.outcome {
            ProbeOutcome::Records { failure, .. } => failure.as_ref(),
            ProbeOutcome::Resolved(_) => None,
        }
    }

    /// Output lines for this attempt, produced one at a time.
    pub fn lines(&self) -> Box<dyn Iterator<Item = String> + '_> {
        match &self.outcome {
            ProbeOutcome::Resolved(host) => Box::new(std::iter::once(format!(
                "Found in {} ms: {}",
                self.elapsed_ms, host
            ))),
            ProbeOutcome::Records { records, failure } => {
                let error_lines = failure.iter().flat_map(|e| {
                    [
                        format!("Error while looking up record: {}", e),
                        format!("\t{:?}", e),
                    ]
                });
                let summary = [
                    format!("Lookup completed in {} ms", self.elapsed_ms),
                    format!("Found {} records", records.len()),
                ];
                Box::new(
                    error_lines
                        .chain(summary)
                        .chain(records.iter().map(|r| format!("Result: {}", r))),
                )
            }
        }
    }
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
