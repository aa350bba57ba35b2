//! # Outbound Ports (Driven Ports / SPI)

use shared_types::{Domain, Hash};

/// Read-only source of the trusted validator-set commitment per origin.
///
/// The verifier never reads full validator sets on the hot path; it only
/// needs the 32-byte commitment to check the caller-supplied list against.
pub trait CommitmentOracle: Send + Sync {
    /// The stored commitment for `domain`, or `None` if unconfigured.
    fn commitment_of(&self, domain: Domain) -> Option<Hash>;
}
