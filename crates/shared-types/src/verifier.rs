//! # Verifier Trait
//!
//! The single contract every proof-verification module exposes.

use crate::errors::VerifierError;

/// A module that decides whether an inbound message, carried with an
/// attached proof, is authentic enough to deliver.
///
/// ## Contract
///
/// - `Ok(true)`: the proof authenticates the message.
/// - `Ok(false)`: the proof is well-formed but does not authenticate the
///   message (bad signer, commitment mismatch, broken trie path, ...). The
///   precise reason is logged by the implementation.
/// - `Err(_)`: the input is structurally broken (malformed metadata or
///   message, missing configuration). Never conflated with `Ok(false)`.
///
/// ## Purity
///
/// Implementations must not mutate shared state: verification is
/// read-mostly, re-entrant, and parallelizable across independent calls.
pub trait MessageVerifier: Send + Sync {
    /// Verify `message` against the proof carried in `metadata`.
    fn verify(&self, metadata: &[u8], message: &[u8]) -> Result<bool, VerifierError>;
}
