use super::RecordType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One resource record from an answer section.
///
/// `data` holds the RDATA in presentation format, exactly as the wire decoder
/// rendered it. The sweep never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Owner name, fully qualified
    pub name: String,
    pub record_type: RecordType,
    /// Class mnemonic (almost always "IN")
    pub class: String,
    /// Time to live in seconds
    pub ttl: u32,
    pub data: String,
}

impl AnswerRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: "IN".to_string(),
            ttl,
            data: data.into(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.class, self.record_type, self.data
        )
    }
}
