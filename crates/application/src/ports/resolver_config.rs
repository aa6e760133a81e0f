use async_trait::async_trait;
use dnsweep_domain::{DomainError, SystemResolverConfig};

/// Source of the system's default resolver settings.
#[async_trait]
pub trait SystemResolverConfigProvider: Send + Sync {
    /// Read and parse the configuration. Unreadable or unparsable input is a
    /// `DomainError::Configuration`, never an empty default.
    async fn load(&self) -> Result<SystemResolverConfig, DomainError>;

    /// Where the configuration comes from, for error messages.
    fn source(&self) -> &str;
}
