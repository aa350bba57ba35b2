//! # Outbound Ports (Driven Ports / SPI)

use shared_types::{Domain, Hash};

/// Read-only source of the trusted state/receipt root per origin domain.
///
/// How the root gets here (light client, committee attestation) is outside
/// this crate; the verifier only requires that it is trusted.
pub trait StateRootOracle: Send + Sync {
    /// The trusted root for `domain`, or `None` if unconfigured.
    fn root_of(&self, domain: Domain) -> Option<Hash>;
}
