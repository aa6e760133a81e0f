use crate::ports::SystemResolverConfigProvider;
use dnsweep_domain::{DomainError, Endpoint, SystemResolverConfig};
use std::sync::Arc;
use tracing::debug;

/// Picks the resolver a sweep will talk to.
pub struct SelectEndpointUseCase {
    provider: Arc<dyn SystemResolverConfigProvider>,
    port_override: Option<u16>,
}

impl SelectEndpointUseCase {
    pub fn new(provider: Arc<dyn SystemResolverConfigProvider>) -> Self {
        Self {
            provider,
            port_override: None,
        }
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        self.port_override = port;
        self
    }

    pub async fn execute(&self, override_server: Option<&str>) -> Result<Endpoint, DomainError> {
        self.execute_with_config(override_server)
            .await
            .map(|(endpoint, _)| endpoint)
    }

    /// Like `execute`, also handing back the (possibly overridden) system
    /// configuration so callers can honour its timeout.
    ///
    /// The system configuration is always read, even with an override,
    /// because the port comes from it.
    pub async fn execute_with_config(
        &self,
        override_server: Option<&str>,
    ) -> Result<(Endpoint, SystemResolverConfig), DomainError> {
        let mut config = self.provider.load().await?;

        if let Some(server) = override_server.map(str::trim).filter(|s| !s.is_empty()) {
            config.servers = vec![server.to_string()];
        }

        let host = config.primary_server().ok_or_else(|| {
            DomainError::Configuration(format!(
                "no nameserver configured in {}",
                self.provider.source()
            ))
        })?;

        let endpoint = Endpoint::new(host, self.port_override.unwrap_or(config.port));

        debug!(
            server = %endpoint,
            source = self.provider.source(),
            overridden = override_server.is_some(),
            "Resolver endpoint selected"
        );

        Ok((endpoint, config))
    }
}
