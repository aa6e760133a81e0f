use super::{RunSweepUseCase, SelectEndpointUseCase};
use dnsweep_domain::{to_fqdn, DomainError, SweepResult};
use std::time::Duration;

/// Resolver selection followed by a sweep: the whole lookup in one call.
pub struct LookupDomainUseCase {
    selector: SelectEndpointUseCase,
    sweep: RunSweepUseCase,
    query_timeout: Option<Duration>,
}

impl LookupDomainUseCase {
    pub fn new(selector: SelectEndpointUseCase, sweep: RunSweepUseCase) -> Self {
        Self {
            selector,
            sweep,
            query_timeout: None,
        }
    }

    /// Fixed per-query timeout. Without one, the system resolver's own
    /// timeout applies.
    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub async fn execute(
        &self,
        domain: &str,
        override_server: Option<&str>,
    ) -> Result<SweepResult, DomainError> {
        // Reject bad input before touching the system configuration
        to_fqdn(domain)?;

        let (endpoint, resolver) = self.selector.execute_with_config(override_server).await?;
        let timeout = self
            .query_timeout
            .unwrap_or_else(|| Duration::from_secs(resolver.timeout_secs));

        self.sweep
            .execute_with_timeout(domain, &endpoint, timeout)
            .await
    }
}
