use crate::ports::{DnsExchange, NoopReporter, SweepReporter};
use dnsweep_domain::resolver_config::DEFAULT_RESOLVER_TIMEOUT_SECS;
use dnsweep_domain::{AnswerRecord, DnsQuery, DomainError, Endpoint, SweepCatalog, SweepResult};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Sequential multi-type sweep of one domain against one resolver.
///
/// Questions go out one at a time in catalog order: every primary record
/// type, then every probe label crossed with every probe type. The first
/// transport failure aborts the sweep and drops whatever was collected.
/// A non-success response status only means "no records" for that question.
pub struct RunSweepUseCase {
    exchange: Arc<dyn DnsExchange>,
    reporter: Arc<dyn SweepReporter>,
    catalog: SweepCatalog,
    query_timeout: Duration,
    shutdown: CancellationToken,
}

impl RunSweepUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self {
            exchange,
            reporter: Arc::new(NoopReporter),
            catalog: SweepCatalog::default(),
            query_timeout: Duration::from_secs(DEFAULT_RESOLVER_TIMEOUT_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn SweepReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_catalog(mut self, catalog: SweepCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn execute(
        &self,
        domain: &str,
        endpoint: &Endpoint,
    ) -> Result<SweepResult, DomainError> {
        self.execute_with_timeout(domain, endpoint, self.query_timeout)
            .await
    }

    pub async fn execute_with_timeout(
        &self,
        domain: &str,
        endpoint: &Endpoint,
        timeout: Duration,
    ) -> Result<SweepResult, DomainError> {
        let primary = self.catalog.primary_questions(domain)?;
        let probes = self.catalog.probe_questions(domain)?;

        self.reporter.on_sweep_started(endpoint);

        let mut result = SweepResult::new(endpoint.clone());

        let target = match self.exchange.resolve_endpoint(endpoint).await {
            Ok(target) => target,
            Err(e) => {
                warn!(server = %endpoint, error = %e, "Cannot reach resolver");
                return Err(e);
            }
        };
        if target != *endpoint {
            debug!(server = %endpoint, address = %target, "Resolver address pinned");
        }

        for query in primary.iter().chain(probes.iter()) {
            if let Err(e) = self.ask(&target, query, timeout, &mut result.records).await {
                warn!(
                    query = %query,
                    server = %endpoint,
                    error = %e,
                    discarded = result.records.len(),
                    "Sweep aborted"
                );
                return Err(e);
            }
        }

        debug!(
            domain = domain,
            server = %endpoint,
            questions = primary.len() + probes.len(),
            records = result.records.len(),
            "Sweep completed"
        );

        self.reporter.on_sweep_completed(&result);
        Ok(result)
    }

    async fn ask(
        &self,
        endpoint: &Endpoint,
        query: &DnsQuery,
        timeout: Duration,
        records: &mut Vec<AnswerRecord>,
    ) -> Result<(), DomainError> {
        if self.shutdown.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        self.reporter.on_query_started(query);

        let answer = tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => return Err(DomainError::Cancelled),
            answer = self.exchange.exchange(endpoint, query, timeout) => answer?,
        };

        if !answer.status.is_success() {
            debug!(query = %query, status = %answer.status, "No records (non-success status)");
            self.reporter.on_query_status(query, answer.status);
            return Ok(());
        }

        debug!(query = %query, answers = answer.answers.len(), "Query answered");

        for record in answer.answers {
            self.reporter.on_record_received(&record);
            records.push(record);
        }

        Ok(())
    }
}
