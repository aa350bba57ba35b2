//! # Static Commitment Oracle
//!
//! Fixed domain-to-commitment map for tooling and tests that do not need a
//! mutable registry behind the verifier.

use crate::ports::outbound::CommitmentOracle;
use shared_types::{Domain, Hash};
use std::collections::HashMap;

/// Immutable commitment table.
#[derive(Default, Clone, Debug)]
pub struct StaticCommitments {
    commitments: HashMap<Domain, Hash>,
}

impl StaticCommitments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, domain: Domain, commitment: Hash) -> Self {
        self.commitments.insert(domain, commitment);
        self
    }
}

impl CommitmentOracle for StaticCommitments {
    fn commitment_of(&self, domain: Domain) -> Option<Hash> {
        self.commitments.get(&domain).copied()
    }
}
