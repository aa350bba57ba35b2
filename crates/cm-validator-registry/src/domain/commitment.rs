//! # Set Commitment
//!
//! A 32-byte hash binding a `(threshold, ordered member list)` pair. The
//! verification hot path stores only this commitment: the verifier accepts
//! an untrusted, caller-supplied member list and cheaply confirms it matches
//! the trusted set instead of reading the full set on every message.

use shared_crypto::keccak256;
use shared_types::{Address, Hash};

/// `keccak256(threshold || members[0] || ... || members[n-1])`.
///
/// Members are hashed in their current enumeration (insertion) order, not
/// sorted order: permuting the list changes the commitment even when the
/// set is identical.
pub fn commitment_hash(threshold: u8, members: &[Address]) -> Hash {
    let mut preimage = Vec::with_capacity(1 + members.len() * 20);
    preimage.push(threshold);
    for member in members {
        preimage.extend_from_slice(member);
    }
    keccak256(&preimage)
}
