//! # Quorum Verification Service
//!
//! [`MessageVerifier`] implementations over a [`CommitmentOracle`].
//!
//! The `Err` branch of `verify` is reserved for structurally broken input
//! (unparseable metadata or message, unconfigured origin). Every proof-level
//! failure logs its [`QuorumError`] and collapses to `Ok(false)` so callers
//! never mistake "proof invalid" for "input unparseable".

use crate::domain::checkpoint::{checkpoint_digest, legacy_checkpoint_digest, Checkpoint};
use crate::domain::errors::QuorumError;
use crate::domain::merkle::branch_root;
use crate::domain::metadata::MultisigMetadata;
use crate::ports::outbound::CommitmentOracle;
use cm_validator_registry::commitment_hash;
use shared_crypto::recover_signer;
use shared_types::{Hash, Message, MessageVerifier, VerifierError};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

/// Quorum verifier for the current checkpoint digest.
pub struct MultisigVerifier<O: CommitmentOracle> {
    oracle: O,
}

/// Quorum verifier for validator sets that still sign the legacy digest
/// (no message id in the preimage). A permanently distinct trust domain
/// from [`MultisigVerifier`].
pub struct LegacyMultisigVerifier<O: CommitmentOracle> {
    oracle: O,
}

impl<O: CommitmentOracle> MultisigVerifier<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }
}

impl<O: CommitmentOracle> LegacyMultisigVerifier<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }
}

impl<O: CommitmentOracle> MessageVerifier for MultisigVerifier<O> {
    fn verify(&self, metadata: &[u8], message: &[u8]) -> Result<bool, VerifierError> {
        let message = Message::decode(message).map_err(VerifierError::MalformedMessage)?;
        let metadata = MultisigMetadata::decode(metadata)?;
        let stored = self
            .oracle
            .commitment_of(message.origin)
            .ok_or(VerifierError::UnknownDomain(message.origin))?;
        Ok(report(check_quorum(
            &metadata,
            &message,
            stored,
            checkpoint_digest,
        )))
    }
}

impl<O: CommitmentOracle> MessageVerifier for LegacyMultisigVerifier<O> {
    fn verify(&self, metadata: &[u8], message: &[u8]) -> Result<bool, VerifierError> {
        let message = Message::decode(message).map_err(VerifierError::MalformedMessage)?;
        let metadata = MultisigMetadata::decode_legacy(metadata)?;
        let stored = self
            .oracle
            .commitment_of(message.origin)
            .ok_or(VerifierError::UnknownDomain(message.origin))?;
        Ok(report(check_quorum(
            &metadata,
            &message,
            stored,
            legacy_checkpoint_digest,
        )))
    }
}

fn report(outcome: Result<(), QuorumError>) -> bool {
    match outcome {
        Ok(()) => {
            debug!("Quorum verification succeeded");
            true
        }
        Err(reason) => {
            warn!(%reason, "Quorum verification failed");
            false
        }
    }
}

/// The full quorum check, fail-closed at the first violation.
///
/// The message id in the digest is always the **real** id of the decoded
/// message, never a metadata-supplied one, so a valid signature set cannot
/// be attached to a different message's checkpoint.
pub fn check_quorum(
    metadata: &MultisigMetadata,
    message: &Message,
    stored_commitment: Hash,
    digest_fn: fn(&Checkpoint) -> Hash,
) -> Result<(), QuorumError> {
    let checkpoint = Checkpoint {
        origin: message.origin,
        origin_mailbox: metadata.origin_mailbox,
        root: metadata.root,
        index: metadata.index,
        message_id: message.id(),
    };
    let digest = digest_fn(&checkpoint);

    // Monotone signer cursor: each signature must match a claimed member at
    // or after the previous match. One signature per member, duplicates and
    // out-of-order signatures rejected, in O(threshold + members).
    let mut cursor = 0usize;
    for (index, signature) in metadata.signatures.iter().enumerate() {
        let recovered = recover_signer(&digest, signature)
            .map_err(|source| QuorumError::InvalidSignature { index, source })?;
        while cursor < metadata.members.len() && metadata.members[cursor] != recovered {
            cursor += 1;
        }
        if cursor >= metadata.members.len() {
            return Err(QuorumError::WrongSigner { index, recovered });
        }
        cursor += 1;
    }

    // Bind the claimed list back to the trusted set.
    let computed = commitment_hash(metadata.threshold, &metadata.members);
    if !bool::from(computed.ct_eq(&stored_commitment)) {
        return Err(QuorumError::CommitmentMismatch {
            computed,
            stored: stored_commitment,
        });
    }

    // Quorum over a checkpoint is meaningless unless the message is proven
    // to be one of its leaves.
    let recomputed = branch_root(&checkpoint.message_id, &metadata.branch, metadata.index);
    if !bool::from(recomputed.ct_eq(&metadata.root)) {
        return Err(QuorumError::NotInCheckpoint {
            computed: recomputed,
            root: metadata.root,
        });
    }

    Ok(())
}
