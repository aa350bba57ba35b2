//! # Shared Crypto Crate
//!
//! Cryptographic primitives for Crossmesh message authentication: keccak256
//! hashing, the EIP-191 personal-sign digest convention, and recoverable
//! ECDSA over secp256k1.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values are
//!   rejected during recovery.
//! - **Constant-Time Checks**: Scalar-range comparisons use the `subtle`
//!   crate for side-channel resistance.
//! - ECDSA-over-secp256k1 with hash-then-sign is the only supported scheme.

pub mod ecdsa;
pub mod errors;
pub mod hashing;

pub use ecdsa::{
    address_from_pubkey, recover_signer, sign_digest, RecoverableSignature, SIGNATURE_LEN,
};
pub use errors::CryptoError;
pub use hashing::{eth_signed_message_hash, keccak256};
