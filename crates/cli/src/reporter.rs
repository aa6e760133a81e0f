use colored::Colorize;
use dnsweep_application::ports::SweepReporter;
use dnsweep_domain::{AnswerRecord, DnsQuery, Endpoint};

/// Prints sweep progress to stdout as it happens: the server in green, one
/// blue header per question and every record in white.
#[derive(Debug, Default)]
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    fn server_line(endpoint: &Endpoint) -> String {
        format!("DNS Server Used: {}", endpoint.host)
    }

    fn question_line(query: &DnsQuery) -> String {
        query.to_string()
    }
}

impl SweepReporter for TerminalReporter {
    fn on_sweep_started(&self, endpoint: &Endpoint) {
        println!("{}", Self::server_line(endpoint).green());
    }

    fn on_query_started(&self, query: &DnsQuery) {
        println!();
        println!("{}", Self::question_line(query).blue());
    }

    fn on_record_received(&self, record: &AnswerRecord) {
        println!("{}", record.to_string().white());
    }
}
