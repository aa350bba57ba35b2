//! Domain layer: pure RLP, nibble, and trie-descent logic.

pub mod errors;
pub mod nibbles;
pub mod proof;
pub mod rlp;
pub mod trie;
