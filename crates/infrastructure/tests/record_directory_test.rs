use dns_probe_application::ports::RecordDirectory;
use dns_probe_domain::{DirectoryConfig, DomainError, RecordType};
use dns_probe_infrastructure::dns::record_directory::format_rdata;
use dns_probe_infrastructure::dns::{
    map_resolve_error, HickoryRecordDirectory, RecordTypeMapper, ResolverFactory,
};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::{Query, ResponseCode};
use hickory_resolver::proto::rr::rdata::{A, MX, TXT};
use hickory_resolver::proto::rr::{Name, RData, RecordType as HickoryRecordType};
use std::net::SocketAddr;
use std::str::FromStr;

// ── record type mapping ────────────────────────────────────────────────────

#[test]
fn test_record_type_maps_to_hickory() {
    assert_eq!(RecordTypeMapper::to_hickory(RecordType::A), HickoryRecordType::A);
    assert_eq!(RecordTypeMapper::to_hickory(RecordType::MX), HickoryRecordType::MX);
    assert_eq!(RecordTypeMapper::to_hickory(RecordType::TXT), HickoryRecordType::TXT);
    assert_eq!(RecordTypeMapper::to_hickory(RecordType::CAA), HickoryRecordType::CAA);
}

#[test]
fn test_dname_maps_to_hickory() {
    assert_eq!(
        RecordTypeMapper::to_hickory(RecordType::DNAME),
        HickoryRecordType::DNAME
    );
}

// ── record formatting ──────────────────────────────────────────────────────

#[test]
fn test_format_mx_uses_presentation_form() {
    let mx = RData::MX(MX::new(10, Name::from_str("mail.example.com.").unwrap()));
    assert_eq!(format_rdata(&mx), "10 mail.example.com.");
}

#[test]
fn test_format_a_record() {
    let a = RData::A(A::new(93, 184, 216, 34));
    assert_eq!(format_rdata(&a), "93.184.216.34");
}

#[test]
fn test_format_txt_joins_strings() {
    let txt = RData::TXT(TXT::new(vec!["v=spf1 ".to_string(), "-all".to_string()]));
    assert_eq!(format_rdata(&txt), "v=spf1 -all");
}

// ── error mapping ──────────────────────────────────────────────────────────

fn no_records(response_code: ResponseCode) -> ResolveError {
    ResolveErrorKind::NoRecordsFound {
        query: Box::new(Query::query(
            Name::from_str("example.com.").unwrap(),
            HickoryRecordType::A,
        )),
        soa: None,
        negative_ttl: None,
        response_code,
        trusted: true,
    }
    .into()
}

#[test]
fn test_noerror_without_answers_is_no_records() {
    assert_eq!(
        map_resolve_error("example.com", no_records(ResponseCode::NoError)),
        DomainError::NoRecords("example.com".to_string())
    );
}

#[test]
fn test_nxdomain_maps_to_nx_domain() {
    assert_eq!(
        map_resolve_error("example.com", no_records(ResponseCode::NXDomain)),
        DomainError::NxDomain("example.com".to_string())
    );
}

#[test]
fn test_server_failure_codes_are_resolution_failures() {
    for code in [
        ResponseCode::ServFail,
        ResponseCode::Refused,
        ResponseCode::FormErr,
        ResponseCode::NotImp,
    ] {
        let mapped = map_resolve_error("example.com", no_records(code));

        assert!(
            matches!(mapped, DomainError::ResolutionFailed { ref target, .. } if target == "example.com"),
            "{:?} mapped to {:?}",
            code,
            mapped
        );
    }
}

#[test]
fn test_timeout_maps_to_query_timeout() {
    let err = ResolveError::from(ResolveErrorKind::Timeout);
    assert_eq!(
        map_resolve_error("example.com", err),
        DomainError::QueryTimeout("example.com".to_string())
    );
}

#[test]
fn test_other_errors_map_to_resolution_failed() {
    let err = ResolveError::from(ResolveErrorKind::Message("no connections available"));
    let mapped = map_resolve_error("example.com", err);

    match mapped {
        DomainError::ResolutionFailed { target, reason } => {
            assert_eq!(target, "example.com");
            assert!(reason.contains("no connections available"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

// ── resolver factory ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_factory_uses_configured_servers() {
    let factory = ResolverFactory::new(DirectoryConfig {
        servers: vec!["dns://127.0.0.1:5353".to_string(), "9.9.9.9".to_string()],
        timeout_ms: Some(500),
        attempts: Some(1),
    })
    .unwrap();

    let expected: Vec<SocketAddr> = vec![
        "127.0.0.1:5353".parse().unwrap(),
        "9.9.9.9:53".parse().unwrap(),
    ];
    assert_eq!(factory.servers(), expected.as_slice());
    assert!(factory.build().is_ok());
}

#[test]
fn test_factory_rejects_invalid_server() {
    let result = ResolverFactory::new(DirectoryConfig {
        servers: vec!["dns://ns.example.com".to_string()],
        ..Default::default()
    });

    assert!(result.is_err());
}

#[tokio::test]
async fn test_unreachable_server_is_an_error_not_empty() {
    let directory = HickoryRecordDirectory::new(DirectoryConfig {
        servers: vec!["127.0.0.1:9".to_string()],
        timeout_ms: Some(200),
        attempts: Some(1),
    })
    .unwrap();

    let result = directory
        .query_records(&"example.com".parse().unwrap(), RecordType::A)
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        DomainError::QueryTimeout(_) | DomainError::ResolutionFailed { .. }
    ));
}

/// Answers every query on a local UDP socket with the given RCODE.
async fn spawn_rcode_server(rcode: u8) -> SocketAddr {
    let socket = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
            if len < 12 {
                continue;
            }
            let mut response = buf[..len].to_vec();
            response[2] |= 0x80; // QR
            response[3] = 0x80 | (rcode & 0x0F); // RA + RCODE
            let _ = socket.send_to(&response, peer).await;
        }
    });

    addr
}

#[tokio::test]
async fn test_servfail_is_reported_not_empty() {
    let server = spawn_rcode_server(2).await;
    let directory = HickoryRecordDirectory::new(DirectoryConfig {
        servers: vec![server.to_string()],
        timeout_ms: Some(500),
        attempts: Some(1),
    })
    .unwrap();

    let result = directory
        .query_records(&"example.com".parse().unwrap(), RecordType::A)
        .await;

    match result {
        Ok(records) => panic!("SERVFAIL returned records: {:?}", records),
        Err(err) => assert!(!matches!(err, DomainError::NoRecords(_)), "{:?}", err),
    }
}
