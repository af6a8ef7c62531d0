use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Address provided was not a valid IPv4 address: {0}")]
    InvalidIpAddress(String),

    #[error("Unsupported record type: {0}")]
    InvalidRecordType(String),

    #[error("Domain not found (NXDOMAIN): {0}")]
    NxDomain(String),

    #[error("No records found for {0}")]
    NoRecords(String),

    #[error("Query timeout while resolving {0}")]
    QueryTimeout(String),

    #[error("Resolution of {target} failed: {reason}")]
    ResolutionFailed { target: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn resolution(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::ResolutionFailed {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}
