use dnsweep_domain::{AnswerRecord, DnsQuery, Endpoint, ResponseStatus, SweepResult};

/// Progress callbacks for a sweep. All methods default to doing nothing.
pub trait SweepReporter: Send + Sync {
    fn on_sweep_started(&self, _endpoint: &Endpoint) {}

    fn on_query_started(&self, _query: &DnsQuery) {}

    /// The resolver answered with a non-success status.
    fn on_query_status(&self, _query: &DnsQuery, _status: ResponseStatus) {}

    fn on_record_received(&self, _record: &AnswerRecord) {}

    fn on_sweep_completed(&self, _result: &SweepResult) {}
}

/// Reporter that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl SweepReporter for NoopReporter {}
