use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, TcpTransport};
use async_trait::async_trait;
use dnsweep_application::ports::{DnsExchange, QueryAnswer};
use dnsweep_domain::{DnsQuery, DomainError, Endpoint};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

/// `DnsExchange` over TCP.
///
/// Each call builds a fresh recursive query, opens one connection to the
/// endpoint, reads one response and checks that its ID matches. Endpoints
/// given by host name are resolved on every call unless pinned first with
/// `resolve_endpoint`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpDnsExchange;

impl TcpDnsExchange {
    pub fn new() -> Self {
        Self
    }

    /// Turn an endpoint into a socket address. IP literals are used as is;
    /// host names go through the system resolver.
    pub async fn socket_addr(endpoint: &Endpoint) -> Result<SocketAddr, DomainError> {
        let host = endpoint.host.trim_start_matches('[').trim_end_matches(']');

        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, endpoint.port));
        }

        tokio::net::lookup_host((host, endpoint.port))
            .await
            .map_err(|e| {
                DomainError::Transport(format!("Cannot resolve server '{}': {}", endpoint.host, e))
            })?
            .next()
            .ok_or_else(|| {
                DomainError::Transport(format!("Server '{}' has no addresses", endpoint.host))
            })
    }
}

#[async_trait]
impl DnsExchange for TcpDnsExchange {
    /// Host names are looked up once here, so every query of a sweep goes to
    /// the same address.
    async fn resolve_endpoint(&self, endpoint: &Endpoint) -> Result<Endpoint, DomainError> {
        let addr = Self::socket_addr(endpoint).await?;
        Ok(Endpoint::new(addr.ip().to_string(), addr.port()))
    }

    async fn exchange(
        &self,
        endpoint: &Endpoint,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<QueryAnswer, DomainError> {
        let server_addr = Self::socket_addr(endpoint).await?;
        let (id, message_bytes) = MessageBuilder::build_query_with_id(query)?;

        let transport = TcpTransport::new(server_addr);
        let response = transport.send(&message_bytes, timeout).await?;

        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response ID {} does not match query ID {} from {}",
                parsed.id, id, server_addr
            )));
        }

        if parsed.truncated {
            warn!(
                query = %query,
                server = %server_addr,
                "Truncated response over {}",
                response.protocol_used
            );
        }

        debug!(
            query = %query,
            server = %server_addr,
            status = %parsed.status,
            answers = parsed.answers.len(),
            "Exchange completed"
        );

        Ok(QueryAnswer::new(parsed.status, parsed.answers))
    }
}
