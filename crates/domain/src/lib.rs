//! dnsweep domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod endpoint;
pub mod errors;
pub mod resolver_config;
pub mod response_status;
pub mod sweep;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{to_fqdn, DnsQuery};
pub use dns_record::{AnswerRecord, RecordType};
pub use endpoint::Endpoint;
pub use errors::DomainError;
pub use resolver_config::SystemResolverConfig;
pub use response_status::ResponseStatus;
pub use sweep::{SweepCatalog, SweepResult};
