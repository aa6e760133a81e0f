use serde::{Deserialize, Serialize};

/// Resolver discovery and per-query settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Resolver configuration file consulted when no server is given
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    /// Port override. When unset the resolver configuration's port is used.
    #[serde(default)]
    pub port: Option<u16>,

    /// Per-query timeout in milliseconds. When unset the resolver
    /// configuration's `options timeout:` value is used.
    #[serde(default)]
    pub query_timeout: Option<u64>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            resolv_conf: default_resolv_conf(),
            port: None,
            query_timeout: None,
        }
    }
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}
