pub mod lookup_domain;
pub mod run_sweep;
pub mod select_endpoint;

pub use lookup_domain::LookupDomainUseCase;
pub use run_sweep::RunSweepUseCase;
pub use select_endpoint::SelectEndpointUseCase;
