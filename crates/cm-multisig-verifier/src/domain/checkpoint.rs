//! # Checkpoint Digests
//!
//! A checkpoint is a snapshot of an origin outbox merkle tree (root + leaf
//! count index) plus the id of one message claimed to be a leaf of it.
//! Validators sign a digest of the checkpoint; this module computes the
//! exact preimage they sign.

use shared_crypto::{eth_signed_message_hash, keccak256};
use shared_types::{Domain, Hash};

/// Protocol tag mixed into every domain separator.
pub const PROTOCOL_TAG: &[u8] = b"CROSSMESH";

/// An outbox tree snapshot plus one claimed leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    /// Origin chain identifier.
    pub origin: Domain,
    /// Origin-side mailbox contract, as a 32-byte word.
    pub origin_mailbox: [u8; 32],
    /// Root of the outbox merkle tree at this snapshot.
    pub root: Hash,
    /// Leaf index of the claimed message.
    pub index: u32,
    /// Id of the message claimed at `index`.
    pub message_id: Hash,
}

/// `keccak256(origin_be || mailbox || PROTOCOL_TAG)`.
///
/// Binds a validator signature to one `(origin chain, origin mailbox)` pair:
/// a signature valid for one mailbox cannot be replayed against another
/// mailbox on the same chain, or against a different chain.
pub fn domain_separator(origin: Domain, origin_mailbox: &[u8; 32]) -> Hash {
    let mut preimage = Vec::with_capacity(4 + 32 + PROTOCOL_TAG.len());
    preimage.extend_from_slice(&origin.to_be_bytes());
    preimage.extend_from_slice(origin_mailbox);
    preimage.extend_from_slice(PROTOCOL_TAG);
    keccak256(&preimage)
}

/// The digest validators sign for a checkpoint.
///
/// `personal_sign(keccak256(separator || root || index_be || message_id))`.
/// The personal-sign wrap keeps validator signatures compatible with
/// ordinary wallet signing infrastructure.
pub fn checkpoint_digest(checkpoint: &Checkpoint) -> Hash {
    let separator = domain_separator(checkpoint.origin, &checkpoint.origin_mailbox);
    let mut preimage = Vec::with_capacity(32 + 32 + 4 + 32);
    preimage.extend_from_slice(&separator);
    preimage.extend_from_slice(&checkpoint.root);
    preimage.extend_from_slice(&checkpoint.index.to_be_bytes());
    preimage.extend_from_slice(&checkpoint.message_id);
    eth_signed_message_hash(&keccak256(&preimage))
}

/// The digest signed by validator sets deployed before message ids were
/// added to the preimage.
///
/// Identical to [`checkpoint_digest`] except `message_id` is absent. The two
/// digests are permanently distinct trust domains, which is why this is a
/// separate function rather than a flag.
pub fn legacy_checkpoint_digest(checkpoint: &Checkpoint) -> Hash {
    let separator = domain_separator(checkpoint.origin, &checkpoint.origin_mailbox);
    let mut preimage = Vec::with_capacity(32 + 32 + 4);
    preimage.extend_from_slice(&separator);
    preimage.extend_from_slice(&checkpoint.root);
    preimage.extend_from_slice(&checkpoint.index.to_be_bytes());
    eth_signed_message_hash(&keccak256(&preimage))
}
