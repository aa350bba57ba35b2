//! Adapter implementations of the commitment oracle.

pub mod registry;
pub mod statics;

pub use registry::RegistryCommitmentOracle;
pub use statics::StaticCommitments;
