mod forward_lookup;
mod local_host;
mod record_query;
mod reverse_lookup;

pub use forward_lookup::ForwardLookupProbe;
pub use local_host::LocalHostProbe;
pub use record_query::RecordQueryProbe;
pub use reverse_lookup::ReverseLookupProbe;

use async_trait::async_trait;
use dns_probe_domain::{DomainError, ProbeResult};

/// One timed resolution attempt.
///
/// Implementations time only the resolution call itself. An `Err` is fatal
/// for the whole run; recoverable failures are carried inside the result.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn attempt(&self) -> Result<ProbeResult, DomainError>;
}
