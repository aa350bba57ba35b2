//! Cross-subsystem verification flows.

pub mod aggregation_flow;
pub mod quorum_flow;
pub mod trie_flow;
