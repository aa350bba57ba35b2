//! Domain layer: pure set logic, no I/O.

pub mod commitment;
pub mod entities;
pub mod errors;

pub use commitment::commitment_hash;
pub use entities::ValidatorSet;
pub use errors::RegistryError;
