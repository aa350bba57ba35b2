//! Port definitions for the validator registry.

pub mod inbound;
pub mod outbound;

pub use inbound::ValidatorRegistryApi;
pub use outbound::SetStore;
