use super::{DomainError, RecordType};
use std::fmt;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// DNS question (fully-qualified name + record type).
/// Uses `Arc<str>` so the same question can be handed to the exchange and the
/// reporter without copying the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    /// Build a question from an already-normalized name.
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Build a question for `name`, normalizing it to trailing-dot form first.
    pub fn fqdn(name: &str, record_type: RecordType) -> Result<Self, DomainError> {
        Ok(Self::new(to_fqdn(name)?, record_type))
    }

    /// Question name without the root dot, for display.
    pub fn display_name(&self) -> &str {
        self.domain.strip_suffix('.').unwrap_or(&self.domain)
    }
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_name(), self.record_type)
    }
}

/// Normalize a domain name to fully-qualified (trailing-dot) form.
///
/// Casing is preserved. Empty names, empty labels, labels over 63 octets,
/// names over 253 octets and names containing whitespace are rejected.
pub fn to_fqdn(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    let bare = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if bare.is_empty() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' is not a domain name",
            name
        )));
    }

    if bare.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' exceeds {} characters",
            bare, MAX_NAME_LEN
        )));
    }

    for label in bare.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains an empty label",
                bare
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            )));
        }
        if label.chars().any(|c| c.is_whitespace()) {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' contains whitespace",
                label
            )));
        }
    }

    Ok(format!("{}.", bare))
}
