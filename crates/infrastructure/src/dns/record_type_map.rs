//! Mapping between `dns_probe_domain::RecordType` and the resolver's record type.
//!
//! Both sides agree on the IANA wire code, so the conversion goes through it.
//! Only the outbound direction is needed: answers are filtered by the
//! resolver's own type.

use dns_probe_domain::RecordType;
use hickory_resolver::proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }
}
