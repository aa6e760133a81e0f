use async_trait::async_trait;
use dnsweep_application::ports::SystemResolverConfigProvider;
use dnsweep_domain::{DomainError, SystemResolverConfig};
use std::net::IpAddr;
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, warn};

const MAX_NDOTS: u32 = 15;

/// Parse resolv.conf(5) content.
///
/// Recognized directives: `nameserver`, `domain`, `search` and the
/// `ndots:`, `timeout:`, `attempts:` options. Anything else is skipped.
/// Nameservers must be IP addresses (an IPv6 zone suffix is allowed).
pub fn parse_resolv_conf(content: &str) -> SystemResolverConfig {
    let mut config = SystemResolverConfig::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = fields.split_first() else {
            continue;
        };

        match keyword {
            "nameserver" => match args.first() {
                Some(server) if is_ip_address(server) => config.servers.push(server.to_string()),
                Some(server) => warn!(server = *server, "Ignoring non-IP nameserver entry"),
                None => warn!("Ignoring nameserver line without an address"),
            },
            "domain" => {
                if let Some(domain) = args.first() {
                    config.search = vec![domain.to_string()];
                }
            }
            "search" => {
                config.search = args.iter().map(|s| s.to_string()).collect();
            }
            "options" => {
                for option in args {
                    apply_option(&mut config, option);
                }
            }
            _ => {}
        }
    }

    config
}

fn apply_option(config: &mut SystemResolverConfig, option: &str) {
    let Some((name, value)) = option.split_once(':') else {
        // Flags like `rotate` or `edns0` don't affect a sequential TCP sweep
        return;
    };

    let Ok(n) = value.parse::<u32>() else {
        warn!(option = option, "Ignoring resolver option with invalid value");
        return;
    };

    match name {
        "ndots" => config.ndots = n.min(MAX_NDOTS),
        "timeout" => config.timeout_secs = u64::from(n.max(1)),
        "attempts" => config.attempts = n.max(1),
        _ => {}
    }
}

fn is_ip_address(server: &str) -> bool {
    let without_zone = server.split('%').next().unwrap_or(server);
    IpAddr::from_str(without_zone).is_ok()
}

/// Reads the system resolver configuration from a resolv.conf file
/// (`/etc/resolv.conf` unless told otherwise).
pub struct ResolvConfReader {
    path: String,
}

impl ResolvConfReader {
    pub fn new() -> Self {
        Self {
            path: "/etc/resolv.conf".to_string(),
        }
    }

    /// Create a reader for a custom path (useful for testing)
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemResolverConfigProvider for ResolvConfReader {
    async fn load(&self) -> Result<SystemResolverConfig, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Configuration(format!("Failed to read {}: {}", self.path, e))
        })?;

        let config = parse_resolv_conf(&content);

        debug!(
            path = %self.path,
            servers = config.servers.len(),
            timeout_secs = config.timeout_secs,
            "Resolver configuration parsed"
        );

        Ok(config)
    }

    fn source(&self) -> &str {
        &self.path
    }
}
