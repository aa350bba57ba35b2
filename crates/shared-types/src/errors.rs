//! # Shared Errors
//!
//! Error types shared by the metadata codecs and the verifier trait.

use crate::entities::{Domain, ModuleId};
use thiserror::Error;

/// A bounds violation while reading an opaque byte buffer.
///
/// Malformed input is always detected before any cryptographic work and is
/// reported through this type rather than via a panic or slice fault.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ReadError {
    /// The read would run past the end of the buffer.
    #[error("out of bounds: need {wanted} bytes at offset {offset}, buffer is {len}")]
    OutOfBounds {
        offset: usize,
        wanted: usize,
        len: usize,
    },

    /// A length or count field carries a value the layout forbids.
    #[error("invalid field value at offset {offset}: {reason}")]
    InvalidField {
        offset: usize,
        reason: &'static str,
    },

    /// Trailing bytes remained after the layout was fully consumed.
    #[error("trailing bytes: {remaining} bytes left after offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },
}

/// Structural failure of a `verify` call.
///
/// These are the only errors a verifier surfaces to its caller; every
/// proof-level failure (bad signer, commitment mismatch, broken trie path)
/// collapses to `Ok(false)` so that "proof invalid" is never confused with
/// "input unparseable".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifierError {
    /// The metadata blob does not match the expected wire layout.
    #[error("malformed metadata: {0}")]
    MalformedMetadata(#[from] ReadError),

    /// The message bytes do not decode as an interchain message.
    #[error("malformed message: {0}")]
    MalformedMessage(ReadError),

    /// No validator set / trusted root is configured for the origin domain.
    #[error("no configuration for origin domain {0}")]
    UnknownDomain(Domain),

    /// Aggregation metadata referenced a module this verifier does not hold.
    #[error("metadata references unknown verifier module {}", hex_word(.0))]
    UnknownModule(ModuleId),
}

fn hex_word(word: &ModuleId) -> String {
    let mut out = String::with_capacity(64);
    for b in word {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
