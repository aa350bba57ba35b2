//! # Hashing
//!
//! keccak256 and the EIP-191 "sign arbitrary bytes" wrap used for checkpoint
//! digests. Validators sign with ordinary wallet infrastructure, so the
//! digest they see must carry the standard prefix.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Apply the EIP-191 personal-sign prefix to a 32-byte hash and re-hash.
///
/// `keccak256("\x19Ethereum Signed Message:\n32" || hash)`
pub fn eth_signed_message_hash(hash: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(b"\x19Ethereum Signed Message:\n32");
    hasher.update(hash);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty_vector() {
        // Well-known keccak256("") constant.
        let expected =
            hex::decode("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
                .unwrap();
        assert_eq!(keccak256(b""), expected[..]);
    }

    #[test]
    fn test_personal_sign_wrap_differs_from_plain() {
        let h = keccak256(b"checkpoint");
        assert_ne!(eth_signed_message_hash(&h), h);
    }

    #[test]
    fn test_personal_sign_wrap_deterministic() {
        let h = keccak256(b"checkpoint");
        assert_eq!(eth_signed_message_hash(&h), eth_signed_message_hash(&h));
    }
}
