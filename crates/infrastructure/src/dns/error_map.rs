use dns_probe_domain::DomainError;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

/// Translates a resolver failure for `target` into the domain taxonomy.
///
/// Only a NOERROR answer without records is NODATA, which callers treat as an
/// empty answer. Other response codes (SERVFAIL, REFUSED, ...) are failures.
pub fn map_resolve_error(target: &str, err: ResolveError) -> DomainError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NoError => DomainError::NoRecords(target.to_string()),
            ResponseCode::NXDomain => DomainError::NxDomain(target.to_string()),
            _ => DomainError::resolution(target, err),
        },
        ResolveErrorKind::Timeout => DomainError::QueryTimeout(target.to_string()),
        _ => DomainError::resolution(target, err),
    }
}
