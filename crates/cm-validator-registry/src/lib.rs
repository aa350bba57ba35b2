//! # Validator Set Registry
//!
//! Owns the per-domain `{threshold, members, commitment}` validator sets
//! that anchor quorum verification.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Set entities, commitment hashing, errors
//! - **Ports Layer** (`ports/`): Inbound registry API, outbound storage trait
//! - **Adapters Layer** (`adapters/`): In-memory set store
//! - **Service Layer** (`service.rs`): Owner-gated mutations with atomic
//!   commitment recomputation
//!
//! ## Security Notes
//!
//! - The commitment is recomputed under the mutation lock before the new set
//!   is published; readers never observe a stale commitment.
//! - The commitment hashes members in **insertion order**, not sorted order.
//!   Removing and re-adding a member changes the commitment even though the
//!   set is identical.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory::InMemorySetStore;
pub use config::{DomainSetConfig, RegistryConfig};
pub use domain::commitment::commitment_hash;
pub use domain::entities::ValidatorSet;
pub use domain::errors::RegistryError;
pub use ports::inbound::ValidatorRegistryApi;
pub use ports::outbound::SetStore;
pub use service::RegistryService;
