//! Port definitions for trie verification.

pub mod outbound;

pub use outbound::StateRootOracle;
