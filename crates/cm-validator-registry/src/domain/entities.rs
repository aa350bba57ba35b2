//! # Registry Entities

use super::commitment::commitment_hash;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash};

/// The per-domain validator set.
///
/// Invariants, upheld by the registry service on every mutation:
/// - `commitment == commitment_hash(threshold, members)` at all times
/// - `threshold <= members.len()` at all times
/// - members are unique and non-zero
///
/// `members` preserves insertion order; that order is part of the
/// commitment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSet {
    /// Minimum count of distinct member signatures required for quorum.
    pub threshold: u8,
    /// Ordered member addresses.
    pub members: Vec<Address>,
    /// Cached `commitment_hash(threshold, members)`.
    pub commitment: Hash,
}

impl ValidatorSet {
    /// A freshly enrolled, empty set (threshold zero until configured).
    pub fn empty() -> Self {
        let commitment = commitment_hash(0, &[]);
        Self {
            threshold: 0,
            members: Vec::new(),
            commitment,
        }
    }

    /// Build a set from parts, computing the commitment.
    pub fn new(threshold: u8, members: Vec<Address>) -> Self {
        let commitment = commitment_hash(threshold, &members);
        Self {
            threshold,
            members,
            commitment,
        }
    }

    pub fn contains(&self, validator: &Address) -> bool {
        self.members.contains(validator)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Refresh the cached commitment after a mutation. Callers must invoke
    /// this before the set becomes visible to readers.
    pub fn recompute_commitment(&mut self) {
        self.commitment = commitment_hash(self.threshold, &self.members);
    }
}
