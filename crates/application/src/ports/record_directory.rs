use async_trait::async_trait;
use dns_probe_domain::{DomainError, Hostname, RecordType};

/// Attribute-style lookup of a single record type for a name.
#[async_trait]
pub trait RecordDirectory: Send + Sync {
    /// Returns every value of `record_type` held by `hostname`, in backend
    /// order and possibly repeated. A name without such records yields an
    /// empty list.
    async fn query_records(
        &self,
        hostname: &Hostname,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError>;
}
