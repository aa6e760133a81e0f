use async_trait::async_trait;
use dnsweep_domain::{AnswerRecord, DnsQuery, DomainError, Endpoint, ResponseStatus};
use std::time::Duration;

/// What came back for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnswer {
    pub status: ResponseStatus,
    /// Answer section, in response order
    pub answers: Vec<AnswerRecord>,
}

impl QueryAnswer {
    pub fn new(status: ResponseStatus, answers: Vec<AnswerRecord>) -> Self {
        Self { status, answers }
    }

    pub fn success(answers: Vec<AnswerRecord>) -> Self {
        Self::new(ResponseStatus::NoError, answers)
    }

    pub fn status_only(status: ResponseStatus) -> Self {
        Self::new(status, Vec::new())
    }
}

/// One question, one round-trip, one answer (or a transport error).
///
/// Implementations must use a connection-oriented transport and set the
/// recursion-desired flag. They never retry.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    /// Pin the endpoint to the address every query of one sweep will use.
    /// Called once per sweep, before the first exchange.
    async fn resolve_endpoint(&self, endpoint: &Endpoint) -> Result<Endpoint, DomainError> {
        Ok(endpoint.clone())
    }

    async fn exchange(
        &self,
        endpoint: &Endpoint,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<QueryAnswer, DomainError>;
}
