use serde::{Deserialize, Serialize};

pub const DEFAULT_DNS_PORT: u16 = 53;
pub const DEFAULT_RESOLVER_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_RESOLVER_ATTEMPTS: u32 = 2;
pub const DEFAULT_RESOLVER_NDOTS: u32 = 1;

/// Resolver settings discovered from the local system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemResolverConfig {
    /// Nameserver addresses in file order
    pub servers: Vec<String>,
    pub port: u16,
    /// Search list (`search`, or the single `domain` entry)
    pub search: Vec<String>,
    pub ndots: u32,
    pub timeout_secs: u64,
    pub attempts: u32,
}

impl Default for SystemResolverConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            port: DEFAULT_DNS_PORT,
            search: Vec::new(),
            ndots: DEFAULT_RESOLVER_NDOTS,
            timeout_secs: DEFAULT_RESOLVER_TIMEOUT_SECS,
            attempts: DEFAULT_RESOLVER_ATTEMPTS,
        }
    }
}

impl SystemResolverConfig {
    pub fn with_servers(servers: Vec<String>) -> Self {
        Self {
            servers,
            ..Self::default()
        }
    }

    pub fn primary_server(&self) -> Option<&str> {
        self.servers.first().map(String::as_str)
    }
}
