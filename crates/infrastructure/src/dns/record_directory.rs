use async_trait::async_trait;
use dns_probe_application::ports::RecordDirectory;
use dns_probe_domain::{DirectoryConfig, DomainError, Hostname, RecordType};
use hickory_resolver::proto::rr::RData;
use tracing::debug;

use super::error_map::map_resolve_error;
use super::record_type_map::RecordTypeMapper;
use super::resolver_factory::ResolverFactory;

/// Record directory speaking DNS through a hickory resolver context.
pub struct HickoryRecordDirectory {
    factory: ResolverFactory,
}

impl HickoryRecordDirectory {
    pub fn new(config: DirectoryConfig) -> Result<Self, DomainError> {
        Ok(Self {
            factory: ResolverFactory::new(config)?,
        })
    }
}

#[async_trait]
impl RecordDirectory for HickoryRecordDirectory {
    async fn query_records(
        &self,
        hostname: &Hostname,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        let resolver = self.factory.build()?;
        let wanted = RecordTypeMapper::to_hickory(record_type);

        debug!(
            hostname = %hostname,
            record_type = %record_type,
            "Querying record directory"
        );

        match resolver.lookup(hostname.as_str(), wanted).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .filter(|rdata| rdata.record_type() == wanted)
                .map(format_rdata)
                .collect()),
            Err(e) => match map_resolve_error(hostname.as_str(), e) {
                DomainError::NoRecords(_) => {
                    debug!(hostname = %hostname, record_type = %record_type, "No records of type");
                    Ok(Vec::new())
                }
                other => Err(other),
            },
        }
    }
}

/// Presentation form of a record value. TXT character-strings are joined.
pub fn format_rdata(rdata: &RData) -> String {
    match rdata {
        RData::TXT(txt) => txt
            .iter()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .collect::<Vec<String>>()
            .join(""),
        other => other.to_string(),
    }
}
