//! # Quorum Failure Reasons
//!
//! Proof-level failures. These never cross the `verify` boundary: the
//! service logs the reason and returns `Ok(false)`. Structural failures go
//! through `shared_types::VerifierError` instead.

use shared_crypto::CryptoError;
use shared_types::{Address, Hash};
use thiserror::Error;

/// Why a structurally valid metadata blob failed quorum verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuorumError {
    /// `signature[index]` recovered to an address that matches none of the
    /// claimed members still available to the monotone signer cursor.
    #[error(
        "signature {index} recovered {}, which matches no remaining claimed member",
        hex::encode(recovered)
    )]
    WrongSigner { index: usize, recovered: Address },

    /// `signature[index]` could not be recovered at all.
    #[error("signature {index} is invalid: {source}")]
    InvalidSignature { index: usize, source: CryptoError },

    /// The claimed member list does not hash to the trusted commitment.
    #[error(
        "commitment mismatch: claimed set hashes to {} but registry holds {}",
        hex::encode(computed),
        hex::encode(stored)
    )]
    CommitmentMismatch { computed: Hash, stored: Hash },

    /// The merkle branch does not place the message id under the signed
    /// root at the claimed index.
    #[error(
        "message not in checkpoint: branch recomputes {} but checkpoint root is {}",
        hex::encode(computed),
        hex::encode(root)
    )]
    NotInCheckpoint { computed: Hash, root: Hash },
}
