//! # Trie Inclusion Verifier
//!
//! Independent alternate proof source: verifies that a key/value pair is
//! present in a foreign chain's state or receipt trie, given the trusted
//! root and an ordered list of RLP-encoded nodes from root to leaf.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): RLP codec, nibble paths, trie descent,
//!   proof wire codec
//! - **Ports Layer** (`ports/`): Outbound trusted-root oracle
//! - **Adapters Layer** (`adapters/`): Static root table
//! - **Service Layer** (`service.rs`): The `MessageVerifier` implementation
//!
//! ## Security Notes
//!
//! - Every node's hash is checked against the parent's reference before its
//!   contents are trusted.
//! - The proven value must equal the message's real id; proving some other
//!   value under the trusted root is worthless.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::statics::StaticRoots;
pub use domain::errors::{RlpError, TrieError};
pub use domain::nibbles::Nibbles;
pub use domain::proof::TrieProof;
pub use domain::rlp::{decode as rlp_decode, encode_bytes as rlp_encode_bytes, encode_list as rlp_encode_list, RlpValue};
pub use domain::trie::verify_inclusion;
pub use ports::outbound::StateRootOracle;
pub use service::TrieInclusionVerifier;
