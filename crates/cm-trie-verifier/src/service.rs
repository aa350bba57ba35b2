//! # Trie Verification Service
//!
//! [`MessageVerifier`] over a [`StateRootOracle`]. A message verifies when
//! its proof's claimed root equals the trusted root for the origin, the
//! descent resolves the proof's key, and the resolved value is exactly the
//! message's id.
//!
//! As everywhere, `Err` means structurally broken input; descent failures
//! log their [`TrieError`] and collapse to `Ok(false)`.

use crate::domain::errors::TrieError;
use crate::domain::proof::TrieProof;
use crate::domain::trie::verify_inclusion;
use crate::ports::outbound::StateRootOracle;
use shared_types::{Hash, Message, MessageVerifier, VerifierError};
use tracing::{debug, warn};

pub struct TrieInclusionVerifier<O: StateRootOracle> {
    oracle: O,
}

impl<O: StateRootOracle> TrieInclusionVerifier<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    fn check(proof: &TrieProof, trusted: Hash, message_id: Hash) -> Result<(), TrieError> {
        if proof.root != trusted {
            return Err(TrieError::UntrustedRoot {
                claimed: proof.root,
                trusted,
            });
        }
        let value = verify_inclusion(&proof.root, &proof.key, &proof.nodes)?;
        if value != message_id {
            return Err(TrieError::ValueMismatch);
        }
        Ok(())
    }
}

impl<O: StateRootOracle> MessageVerifier for TrieInclusionVerifier<O> {
    fn verify(&self, metadata: &[u8], message: &[u8]) -> Result<bool, VerifierError> {
        let message = Message::decode(message).map_err(VerifierError::MalformedMessage)?;
        let proof = TrieProof::decode(metadata)?;
        let trusted = self
            .oracle
            .root_of(message.origin)
            .ok_or(VerifierError::UnknownDomain(message.origin))?;

        match Self::check(&proof, trusted, message.id()) {
            Ok(()) => {
                debug!(origin = message.origin, "Trie inclusion proof accepted");
                Ok(true)
            }
            Err(reason) => {
                warn!(origin = message.origin, %reason, "Trie inclusion proof rejected");
                Ok(false)
            }
        }
    }
}
