use super::dns_query::to_fqdn;
use super::{AnswerRecord, DnsQuery, DomainError, Endpoint, RecordType};
use serde::{Deserialize, Serialize};

/// Record types asked of the target domain itself, in issuance order.
pub const DEFAULT_RECORD_TYPES: [RecordType; 10] = [
    RecordType::NS,
    RecordType::DNSKEY,
    RecordType::CAA,
    RecordType::A,
    RecordType::AAAA,
    RecordType::MX,
    RecordType::CNAME,
    RecordType::TXT,
    RecordType::SOA,
    RecordType::SPF,
];

/// Well-known labels probed under the target domain.
pub const DEFAULT_PROBE_LABELS: [&str; 2] = ["_dmarc", "_acme-challenge"];

/// Record types asked of every probe name.
pub const DEFAULT_PROBE_RECORD_TYPES: [RecordType; 1] = [RecordType::TXT];

/// The two ordered catalogs that drive a sweep.
///
/// Order matters: it is both the order questions go out and the order their
/// records appear in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepCatalog {
    pub record_types: Vec<RecordType>,
    pub probe_labels: Vec<String>,
    pub probe_record_types: Vec<RecordType>,
}

impl Default for SweepCatalog {
    fn default() -> Self {
        Self {
            record_types: DEFAULT_RECORD_TYPES.to_vec(),
            probe_labels: DEFAULT_PROBE_LABELS.iter().map(|l| l.to_string()).collect(),
            probe_record_types: DEFAULT_PROBE_RECORD_TYPES.to_vec(),
        }
    }
}

impl SweepCatalog {
    /// Questions about the domain itself, one per catalog type.
    pub fn primary_questions(&self, domain: &str) -> Result<Vec<DnsQuery>, DomainError> {
        let fqdn = to_fqdn(domain)?;
        Ok(self
            .record_types
            .iter()
            .map(|rt| DnsQuery::new(fqdn.as_str(), *rt))
            .collect())
    }

    /// Questions about `<label>.<domain>`: labels outer, types inner.
    pub fn probe_questions(&self, domain: &str) -> Result<Vec<DnsQuery>, DomainError> {
        let fqdn = to_fqdn(domain)?;
        let mut questions =
            Vec::with_capacity(self.probe_labels.len() * self.probe_record_types.len());

        for label in &self.probe_labels {
            let probe_name = to_fqdn(&format!("{}.{}", label, fqdn))?;
            for rt in &self.probe_record_types {
                questions.push(DnsQuery::new(probe_name.as_str(), *rt));
            }
        }

        Ok(questions)
    }

    /// Full plan: primary questions followed by probes.
    pub fn questions(&self, domain: &str) -> Result<Vec<DnsQuery>, DomainError> {
        let mut questions = self.primary_questions(domain)?;
        questions.extend(self.probe_questions(domain)?);
        Ok(questions)
    }

    pub fn len(&self) -> usize {
        self.record_types.len() + self.probe_labels.len() * self.probe_record_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a completed sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepResult {
    pub server_used: Endpoint,
    pub records: Vec<AnswerRecord>,
}

impl SweepResult {
    pub fn new(server_used: Endpoint) -> Self {
        Self {
            server_used,
            records: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records_of(&self, record_type: RecordType) -> impl Iterator<Item = &AnswerRecord> {
        self.records
            .iter()
            .filter(move |r| r.record_type == record_type)
    }
}
