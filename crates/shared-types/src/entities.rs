//! # Domain Entities
//!
//! Primitive types shared by every verification subsystem.

/// 32-byte hash (keccak256 output, merkle roots, message ids).
pub type Hash = [u8; 32];

/// Ethereum-style 20-byte account address.
pub type Address = [u8; 20];

/// Protocol-level numeric identifier for a source or destination chain.
pub type Domain = u32;

/// Identifier of a verifier module inside an aggregation metadata blob.
///
/// Module identifiers use the same 32-byte space as contract addresses on
/// the wire (20-byte addresses are right-aligned inside the word).
pub type ModuleId = [u8; 32];

/// The all-zero address, never a valid member of a validator set.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Widen a 20-byte address into a left-zero-padded 32-byte word.
pub fn address_to_word(addr: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(addr);
    word
}

/// Narrow a 32-byte word to an address, requiring the 12 padding bytes
/// to be zero.
pub fn address_from_word(word: &[u8; 32]) -> Option<Address> {
    if word[..12].iter().any(|&b| b != 0) {
        return None;
    }
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&word[12..]);
    Some(addr)
}
