use dnsweep_domain::{AnswerRecord, DomainError, ResponseStatus};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use tracing::debug;

use super::record_type_map::RecordTypeMapper;

/// The parts of a response the sweep cares about.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub status: ResponseStatus,

    pub truncated: bool,

    /// Answer section, in wire order
    pub answers: Vec<AnswerRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let status = Self::status_from_rcode(message.response_code());
        let answers: Vec<AnswerRecord> = message.answers().iter().map(Self::to_answer).collect();

        debug!(
            id = message.id(),
            rcode = %status,
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            status,
            truncated: message.truncated(),
            answers,
        })
    }

    fn to_answer(record: &Record) -> AnswerRecord {
        AnswerRecord::new(
            record.name().to_string(),
            RecordTypeMapper::from_hickory(record.record_type()),
            record.ttl(),
            record.data().to_string(),
        )
        .with_class(record.dns_class().to_string())
    }

    pub fn status_from_rcode(rcode: ResponseCode) -> ResponseStatus {
        match rcode {
            ResponseCode::NoError => ResponseStatus::NoError,
            ResponseCode::FormErr => ResponseStatus::FormErr,
            ResponseCode::ServFail => ResponseStatus::ServFail,
            ResponseCode::NXDomain => ResponseStatus::NXDomain,
            ResponseCode::NotImp => ResponseStatus::NotImp,
            ResponseCode::Refused => ResponseStatus::Refused,
            other => ResponseStatus::Other(u16::from(other)),
        }
    }
}
