pub mod dns_exchange;
pub mod resolver_config;
pub mod sweep_reporter;

pub use dns_exchange::{DnsExchange, QueryAnswer};
pub use resolver_config::SystemResolverConfigProvider;
pub use sweep_reporter::{NoopReporter, SweepReporter};
