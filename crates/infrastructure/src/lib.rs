//! dnsweep infrastructure: DNS wire handling, TCP transport and system
//! resolver configuration.
pub mod dns;
pub mod system;
