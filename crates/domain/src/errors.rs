use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Resolver configuration error: {0}")]
    Configuration(String),

    #[error("Query to {server} timed out")]
    TransportTimeout { server: String },

    #[error("Connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Sweep cancelled")]
    Cancelled,
}

impl DomainError {
    /// Failures of a single round-trip. These abort a sweep.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::Transport(_)
                | DomainError::InvalidDnsResponse(_)
                | DomainError::IoError(_)
        )
    }
}
