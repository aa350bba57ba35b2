//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::ValidatorSet;
use crate::domain::errors::RegistryError;
use shared_types::{Address, Domain, Hash};

/// Primary Validator Registry API.
///
/// All mutations are gated on the registry owner and recompute the set
/// commitment before the change becomes visible. Implementations must be
/// thread-safe (`Send + Sync`).
pub trait ValidatorRegistryApi: Send + Sync {
    // =========================================================================
    // Mutations (owner-only)
    // =========================================================================

    /// Enroll a new origin domain with an empty validator set.
    fn enroll_domain(&self, caller: Address, domain: Domain) -> Result<(), RegistryError>;

    /// Add a validator to a domain's set.
    ///
    /// Rejects the zero address and duplicates. The new member is appended,
    /// so the commitment depends on the order validators were added.
    fn add_validator(
        &self,
        caller: Address,
        domain: Domain,
        validator: Address,
    ) -> Result<Hash, RegistryError>;

    /// Add several validators and set the threshold in one atomic step.
    ///
    /// Either every validator is admitted and the threshold applied, or the
    /// set is left untouched.
    fn add_validators(
        &self,
        caller: Address,
        domain: Domain,
        validators: &[Address],
        threshold: u8,
    ) -> Result<Hash, RegistryError>;

    /// Remove a validator from a domain's set.
    ///
    /// Fails if removal would leave fewer members than the threshold.
    fn remove_validator(
        &self,
        caller: Address,
        domain: Domain,
        validator: Address,
    ) -> Result<Hash, RegistryError>;

    /// Set a domain's quorum threshold. Must satisfy `1 <= t <= |members|`.
    fn set_threshold(
        &self,
        caller: Address,
        domain: Domain,
        threshold: u8,
    ) -> Result<Hash, RegistryError>;

    /// Hand the registry to a new owner.
    fn transfer_ownership(
        &self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RegistryError>;

    // =========================================================================
    // Reads
    // =========================================================================

    /// Whether `validator` is a member of `domain`'s set.
    fn is_validator(&self, domain: Domain, validator: &Address) -> bool;

    /// The ordered member list for a domain, if enrolled.
    fn members_of(&self, domain: Domain) -> Option<Vec<Address>>;

    /// The quorum threshold for a domain, if enrolled.
    fn threshold_of(&self, domain: Domain) -> Option<u8>;

    /// The current set commitment for a domain, if enrolled.
    fn commitment_of(&self, domain: Domain) -> Option<Hash>;

    /// The full `(members, threshold)` pair for a domain, if enrolled.
    fn validators_and_threshold(&self, domain: Domain) -> Option<(Vec<Address>, u8)>;

    /// Snapshot of a domain's full set.
    fn set_of(&self, domain: Domain) -> Option<ValidatorSet>;
}
