#![allow(dead_code)]
use dnsweep_domain::{DnsQuery, Endpoint, RecordType};
use std::io::Write;
use std::net::SocketAddr;
use tempfile::NamedTempFile;

/// Shorthand for building queries in tests
pub struct QueryBuilder;

impl QueryBuilder {
    pub fn a(name: &str) -> DnsQuery {
        DnsQuery::fqdn(name, RecordType::A).unwrap()
    }

    pub fn txt(name: &str) -> DnsQuery {
        DnsQuery::fqdn(name, RecordType::TXT).unwrap()
    }

    pub fn of(name: &str, record_type: RecordType) -> DnsQuery {
        DnsQuery::fqdn(name, record_type).unwrap()
    }
}

pub fn endpoint_for(addr: SocketAddr) -> Endpoint {
    Endpoint::new(addr.ip().to_string(), addr.port())
}

/// Write resolv.conf content to a temporary file
pub fn resolv_conf_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
