//! # Outbound Ports (Driven Ports / SPI)
//!
//! Storage trait implemented by adapters.

use crate::domain::entities::ValidatorSet;
use shared_types::Domain;

/// Persistence for per-domain validator sets.
///
/// `store` must publish the whole set atomically: a reader racing a writer
/// sees either the old set (with its old commitment) or the new one, never a
/// mix.
pub trait SetStore: Send + Sync {
    /// Load the set for a domain, if one is stored.
    fn load(&self, domain: Domain) -> Option<ValidatorSet>;

    /// Store (or replace) the set for a domain.
    fn store(&self, domain: Domain, set: ValidatorSet);

    /// All enrolled domains, in no particular order.
    fn domains(&self) -> Vec<Domain>;
}
