//! # Trie Proof Errors
//!
//! Descent failures are distinguished for debuggability, but the service
//! collapses all of them to "verification failed" at the `verify` boundary.

use shared_types::Hash;
use thiserror::Error;

/// A malformed RLP item inside a proof node.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RlpError {
    /// The item's declared length runs past the end of the buffer.
    #[error("truncated RLP item at offset {offset}")]
    Truncated { offset: usize },

    /// A long-form length whose bytes do not fit in usize or carry a
    /// leading zero.
    #[error("invalid RLP length encoding at offset {offset}")]
    InvalidLength { offset: usize },

    /// Nesting beyond the supported depth.
    #[error("RLP list nesting exceeds depth limit")]
    TooDeep,

    /// Bytes remained after the top-level item.
    #[error("trailing bytes after RLP item at offset {offset}")]
    TrailingBytes { offset: usize },
}

/// Why a trie descent failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrieError {
    /// A node's hash does not match the reference that led to it.
    #[error(
        "node hash mismatch: expected {}, computed {}",
        hex::encode(expected),
        hex::encode(computed)
    )]
    HashMismatch { expected: Hash, computed: Hash },

    /// A node's partial path diverges from the lookup key.
    #[error("partial path diverges from the lookup key")]
    PathMismatch,

    /// A leaf was reached while lookup-key nibbles remained.
    #[error("leaf reached before the lookup key was exhausted")]
    NotExhausted,

    /// The node list ended before the key resolved to a value.
    #[error("proof nodes exhausted before the key resolved")]
    ProofIncomplete,

    /// A node is not valid RLP.
    #[error("undecodable proof node: {0}")]
    Rlp(#[from] RlpError),

    /// A node decodes but is neither a 17-item branch nor a 2-item
    /// leaf/extension, or carries an ill-formed child reference.
    #[error("invalid trie node: {reason}")]
    InvalidNode { reason: &'static str },

    /// The proof's claimed root is not the trusted root for the origin.
    #[error(
        "untrusted root: proof claims {}, trusted root is {}",
        hex::encode(claimed),
        hex::encode(trusted)
    )]
    UntrustedRoot { claimed: Hash, trusted: Hash },

    /// The proven value is not the expected one.
    #[error("proven value does not match the expected value")]
    ValueMismatch,
}
