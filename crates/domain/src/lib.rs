//! dns-probe Domain Layer
pub mod config;
pub mod errors;
pub mod hostname;
pub mod ipv4_address;
pub mod probe_request;
pub mod probe_result;
pub mod record_type;

pub use config::{CliOverrides, Config, ConfigError, DirectoryConfig};
pub use errors::DomainError;
pub use hostname::Hostname;
pub use ipv4_address::Ipv4Address;
pub use probe_request::{ProbeKind, ProbeRequest};
pub use probe_result::{ProbeOutcome, ProbeResult, ResolvedHost};
pub use record_type::RecordType;
