pub mod sweep;

// Re-export use cases
pub use sweep::{LookupDomainUseCase, RunSweepUseCase, SelectEndpointUseCase};
