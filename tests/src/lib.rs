//! # Crossmesh Test Suite
//!
//! Unified test crate for cross-subsystem verification flows:
//!
//! ```text
//! tests/src/integration/
//! ├── quorum_flow.rs       # registry + multisig verifier end to end
//! ├── aggregation_flow.rs  # real sub-verifiers composed under aggregation
//! └── trie_flow.rs         # trie proofs standing in for a signature quorum
//! ```
//!
//! Run with `cargo test -p cm-tests`.

#[cfg(test)]
pub mod integration;

#[cfg(test)]
pub mod harness;
