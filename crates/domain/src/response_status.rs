use serde::{Deserialize, Serialize};
use std::fmt;

/// Response code of a completed exchange.
///
/// Only `NoError` counts as success; every other code means "no records for
/// this question" and is never an error on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseStatus {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseStatus {
    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ResponseStatus::NoError,
            1 => ResponseStatus::FormErr,
            2 => ResponseStatus::ServFail,
            3 => ResponseStatus::NXDomain,
            4 => ResponseStatus::NotImp,
            5 => ResponseStatus::Refused,
            other => ResponseStatus::Other(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseStatus::NoError)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::NoError => write!(f, "NOERROR"),
            ResponseStatus::FormErr => write!(f, "FORMERR"),
            ResponseStatus::ServFail => write!(f, "SERVFAIL"),
            ResponseStatus::NXDomain => write!(f, "NXDOMAIN"),
            ResponseStatus::NotImp => write!(f, "NOTIMP"),
            ResponseStatus::Refused => write!(f, "REFUSED"),
            ResponseStatus::Other(code) => write!(f, "RCODE{}", code),
        }
    }
}
