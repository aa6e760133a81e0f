use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use dnsweep_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP (RFC 1035 §4.2.2): every message is preceded by its length
/// as a two-byte big-endian integer.
///
/// One connection per query; the connection is closed once the response has
/// been read.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Prefix a message with its two-byte length.
    pub fn frame(message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let len = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::Transport(format!(
                "DNS message of {} bytes exceeds TCP frame limit",
                message_bytes.len()
            ))
        })?;

        let mut framed = Vec::with_capacity(message_bytes.len() + 2);
        framed.extend_from_slice(&len.to_be_bytes());
        framed.extend_from_slice(message_bytes);
        Ok(framed)
    }

    async fn round_trip(&self, framed: &[u8]) -> io::Result<Vec<u8>> {
        let mut stream = TcpStream::connect(self.server_addr).await?;
        stream.set_nodelay(true)?;

        stream.write_all(framed).await?;
        stream.flush().await?;

        debug!(
            server = %self.server_addr,
            bytes_sent = framed.len(),
            "TCP query sent"
        );

        let mut len_buf = [0u8; 2];
        stream.read_exact(&mut len_buf).await?;
        let response_len = u16::from_be_bytes(len_buf) as usize;

        let mut response = vec![0u8; response_len];
        stream.read_exact(&mut response).await?;

        debug!(
            server = %self.server_addr,
            bytes_received = response_len,
            "TCP response received"
        );

        Ok(response)
    }

    fn map_io_error(&self, e: io::Error) -> DomainError {
        let server = self.server_addr.to_string();
        match e.kind() {
            io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
            io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof => DomainError::TransportConnectionReset { server },
            io::ErrorKind::TimedOut => DomainError::TransportTimeout { server },
            _ => DomainError::IoError(format!("TCP exchange with {} failed: {}", server, e)),
        }
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let framed = Self::frame(message_bytes)?;

        let bytes = tokio::time::timeout(timeout, self.round_trip(&framed))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| self.map_io_error(e))?;

        Ok(TransportResponse {
            bytes: Bytes::from(bytes),
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
