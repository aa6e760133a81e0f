#![allow(dead_code)]

use async_trait::async_trait;
use dnsweep_application::ports::{
    DnsExchange, QueryAnswer, SweepReporter, SystemResolverConfigProvider,
};
use dnsweep_domain::{
    AnswerRecord, DnsQuery, DomainError, Endpoint, RecordType, ResponseStatus, SweepResult,
    SystemResolverConfig,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock DnsExchange
// ============================================================================

/// Canned exchange: answers from a map keyed by (name, type), NXDOMAIN for
/// everything else. Records every call it receives.
#[derive(Clone, Default)]
pub struct MockDnsExchange {
    responses: Arc<RwLock<HashMap<(String, RecordType), QueryAnswer>>>,
    failures: Arc<RwLock<HashMap<(String, RecordType), String>>>,
    calls: Arc<RwLock<Vec<(Endpoint, DnsQuery, Duration)>>>,
    hosts: Arc<RwLock<HashMap<String, String>>>,
    resolutions: Arc<RwLock<Vec<Endpoint>>>,
}

impl MockDnsExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_answer(&self, name: &str, record_type: RecordType, answer: QueryAnswer) {
        self.responses
            .write()
            .await
            .insert((name.to_string(), record_type), answer);
    }

    pub async fn set_records(&self, name: &str, record_type: RecordType, records: Vec<AnswerRecord>) {
        self.set_answer(name, record_type, QueryAnswer::success(records))
            .await;
    }

    /// Make the question (name, type) fail at the transport level.
    pub async fn fail_on(&self, name: &str, record_type: RecordType, message: &str) {
        self.failures
            .write()
            .await
            .insert((name.to_string(), record_type), message.to_string());
    }

    /// Map a resolver host name to the address `resolve_endpoint` returns.
    pub async fn resolve_host(&self, host: &str, address: &str) {
        self.hosts
            .write()
            .await
            .insert(host.to_string(), address.to_string());
    }

    pub async fn resolutions(&self) -> Vec<Endpoint> {
        self.resolutions.read().await.clone()
    }

    pub async fn calls(&self) -> Vec<(Endpoint, DnsQuery, Duration)> {
        self.calls.read().await.clone()
    }

    pub async fn questions(&self) -> Vec<String> {
        self.calls
            .read()
            .await
            .iter()
            .map(|(_, q, _)| format!("{} {}", q.domain, q.record_type))
            .collect()
    }
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn resolve_endpoint(&self, endpoint: &Endpoint) -> Result<Endpoint, DomainError> {
        self.resolutions.write().await.push(endpoint.clone());

        Ok(match self.hosts.read().await.get(&endpoint.host) {
            Some(address) => Endpoint::new(address.clone(), endpoint.port),
            None => endpoint.clone(),
        })
    }

    async fn exchange(
        &self,
        endpoint: &Endpoint,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<QueryAnswer, DomainError> {
        self.calls
            .write()
            .await
            .push((endpoint.clone(), query.clone(), timeout));

        let key = (query.domain.to_string(), query.record_type);

        if let Some(message) = self.failures.read().await.get(&key) {
            return Err(DomainError::Transport(message.clone()));
        }

        Ok(self
            .responses
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_else(|| QueryAnswer::status_only(ResponseStatus::NXDomain)))
    }
}

/// Exchange that never answers. Used to exercise cancellation.
pub struct HangingExchange;

#[async_trait]
impl DnsExchange for HangingExchange {
    async fn exchange(
        &self,
        _endpoint: &Endpoint,
        _query: &DnsQuery,
        _timeout: Duration,
    ) -> Result<QueryAnswer, DomainError> {
        std::future::pending::<()>().await;
        unreachable!()
    }
}

// ============================================================================
// Mock SystemResolverConfigProvider
// ============================================================================

pub struct MockResolverConfigProvider {
    config: Option<SystemResolverConfig>,
    loads: Arc<RwLock<u32>>,
}

impl MockResolverConfigProvider {
    pub fn with_servers(servers: &[&str]) -> Self {
        Self::with_config(SystemResolverConfig::with_servers(
            servers.iter().map(|s| s.to_string()).collect(),
        ))
    }

    pub fn with_config(config: SystemResolverConfig) -> Self {
        Self {
            config: Some(config),
            loads: Arc::new(RwLock::new(0)),
        }
    }

    /// Provider whose configuration cannot be read.
    pub fn unreadable() -> Self {
        Self {
            config: None,
            loads: Arc::new(RwLock::new(0)),
        }
    }

    pub async fn load_count(&self) -> u32 {
        *self.loads.read().await
    }
}

#[async_trait]
impl SystemResolverConfigProvider for MockResolverConfigProvider {
    async fn load(&self) -> Result<SystemResolverConfig, DomainError> {
        *self.loads.write().await += 1;
        self.config.clone().ok_or_else(|| {
            DomainError::Configuration("mock resolv.conf: permission denied".to_string())
        })
    }

    fn source(&self) -> &str {
        "mock resolv.conf"
    }
}

// ============================================================================
// Recording SweepReporter
// ============================================================================

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl SweepReporter for RecordingReporter {
    fn on_sweep_started(&self, endpoint: &Endpoint) {
        self.push(format!("started {}", endpoint));
    }

    fn on_query_started(&self, query: &DnsQuery) {
        self.push(format!("query {}", query));
    }

    fn on_query_status(&self, query: &DnsQuery, status: ResponseStatus) {
        self.push(format!("status {} {}", query, status));
    }

    fn on_record_received(&self, record: &AnswerRecord) {
        self.push(format!("record {} {}", record.record_type, record.data));
    }

    fn on_sweep_completed(&self, result: &SweepResult) {
        self.push(format!("completed {}", result.records.len()));
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn a_record(name: &str, ip: &str) -> AnswerRecord {
    AnswerRecord::new(name, RecordType::A, 300, ip)
}

pub fn mx_record(name: &str, exchange: &str) -> AnswerRecord {
    AnswerRecord::new(name, RecordType::MX, 300, format!("10 {}", exchange))
}

pub fn txt_record(name: &str, text: &str) -> AnswerRecord {
    AnswerRecord::new(name, RecordType::TXT, 300, format!("\"{}\"", text))
}

pub fn test_endpoint() -> Endpoint {
    Endpoint::new("192.0.2.53", 53)
}
