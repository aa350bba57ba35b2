//! # Registry-Backed Commitment Oracle
//!
//! Bridges the verifier to a live [`RegistryService`]. Reads go straight to
//! the registry's store, so a finished mutation is visible to the very next
//! verification call.

use crate::ports::outbound::CommitmentOracle;
use cm_validator_registry::{RegistryService, SetStore, ValidatorRegistryApi};
use shared_types::{Domain, Hash};
use std::sync::Arc;

/// Shared handle to a registry, usable as a commitment oracle.
pub struct RegistryCommitmentOracle<S: SetStore> {
    registry: Arc<RegistryService<S>>,
}

impl<S: SetStore> RegistryCommitmentOracle<S> {
    pub fn new(registry: Arc<RegistryService<S>>) -> Self {
        Self { registry }
    }
}

impl<S: SetStore> CommitmentOracle for RegistryCommitmentOracle<S> {
    fn commitment_of(&self, domain: Domain) -> Option<Hash> {
        ValidatorRegistryApi::commitment_of(self.registry.as_ref(), domain)
    }
}
