use super::Probe;
use crate::ports::RecordDirectory;
use async_trait::async_trait;
use dns_probe_domain::{DomainError, Hostname, ProbeResult, RecordType};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Queries one record type and reports the values as an ordered set.
///
/// Failures never abort the run: they are attached to the result and the
/// caller renders them inline.
pub struct RecordQueryProbe {
    directory: Arc<dyn RecordDirectory>,
    hostname: Hostname,
    record_type: RecordType,
}

impl RecordQueryProbe {
    pub fn new(
        directory: Arc<dyn RecordDirectory>,
        hostname: Hostname,
        record_type: RecordType,
    ) -> Self {
        Self {
            directory,
            hostname,
            record_type,
        }
    }
}

#[async_trait]
impl Probe for RecordQueryProbe {
    async fn attempt(&self) -> Result<ProbeResult, DomainError> {
        let start = Instant::now();
        let outcome = self
            .directory
            .query_records(&self.hostname, self.record_type)
            .await;
        let elapsed = start.elapsed();

        let (records, failure) = match outcome {
            Ok(values) => {
                let records: BTreeSet<String> = values.into_iter().collect();
                debug!(
                    hostname = %self.hostname,
                    record_type = %self.record_type,
                    count = records.len(),
                    "Record lookup completed"
                );
                (records, None)
            }
            Err(e) => {
                warn!(
                    hostname = %self.hostname,
                    record_type = %self.record_type,
                    error = %e,
                    "Record lookup failed"
                );
                (BTreeSet::new(), Some(e))
            }
        };

        Ok(ProbeResult::records(elapsed, records, failure))
    }
}
