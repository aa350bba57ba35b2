//! # Signature Quorum Verifier
//!
//! Decides whether an inbound interchain message carries a valid quorum of
//! validator signatures over a checkpoint that provably contains it.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Checkpoint digests, merkle branch
//!   recomputation, metadata codec, quorum errors
//! - **Ports Layer** (`ports/`): Outbound commitment oracle
//! - **Adapters Layer** (`adapters/`): Registry-backed and static oracles
//! - **Service Layer** (`service.rs`): The `MessageVerifier` implementations
//!
//! ## Security Notes
//!
//! - The digest is always computed from the message's **real** id, never a
//!   metadata-supplied one.
//! - The quorum loop walks signatures and claimed members with a single
//!   forward cursor: each signature must recover to a claimed member at or
//!   after the previous match, so duplicate and out-of-order signatures are
//!   rejected. Combined with the commitment check, at most one signature
//!   counts per trusted member, in O(threshold + members) recoveries.
//! - Every failure is fail-closed: the first bad signature aborts the call.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::registry::RegistryCommitmentOracle;
pub use adapters::statics::StaticCommitments;
pub use domain::checkpoint::{
    checkpoint_digest, domain_separator, legacy_checkpoint_digest, Checkpoint, PROTOCOL_TAG,
};
pub use domain::errors::QuorumError;
pub use domain::merkle::{branch_root, MerkleBranch, TREE_DEPTH};
pub use domain::metadata::MultisigMetadata;
pub use ports::outbound::CommitmentOracle;
pub use service::{check_quorum, LegacyMultisigVerifier, MultisigVerifier};
