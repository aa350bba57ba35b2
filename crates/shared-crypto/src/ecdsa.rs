//! # Recoverable ECDSA (secp256k1)
//!
//! Parsing, recovery, and signing of the 65-byte `r || s || v` signatures
//! validators produce over checkpoint digests.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: S must be at most half the curve
//!   order; high-S signatures are rejected.
//! - **Scalar Range Validation**: R and S must be in `[1, n-1]`.
//! - **Constant-Time Operations**: Range checks use the `subtle` crate.

use crate::errors::CryptoError;
use crate::hashing::keccak256;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use shared_types::{Address, Hash};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Length of a packed recoverable signature: 32B r, 32B s, 1B v.
pub const SIGNATURE_LEN: usize = 65;

/// secp256k1 curve order n.
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order (for the malleability check).
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// A recoverable ECDSA signature in Ethereum wire form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// R component (32 bytes).
    pub r: [u8; 32],
    /// S component (32 bytes).
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28).
    pub v: u8,
}

impl RecoverableSignature {
    /// Parse from the packed 65-byte wire form. Component validation is
    /// deferred to recovery so the caller can report it per signature index.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LEN]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Self {
            r,
            s,
            v: bytes[64],
        }
    }

    /// Pack into the 65-byte wire form.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// Recover the signer's address from a signature over a 32-byte digest.
///
/// Validations performed before recovery:
/// 1. R and S are in `[1, n-1]`
/// 2. S is in the lower half of the curve order (EIP-2)
/// 3. The recovery id is one of 0, 1, 27, 28
pub fn recover_signer(
    digest: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, CryptoError> {
    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(CryptoError::InvalidFormat);
    }
    if !is_low_s(&signature.s) {
        return Err(CryptoError::MalleableSignature);
    }
    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let sig = match Signature::from_slice(&sig_bytes) {
        Ok(s) => {
            sig_bytes.zeroize();
            s
        }
        Err(_) => {
            sig_bytes.zeroize();
            return Err(CryptoError::InvalidFormat);
        }
    };

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Derive the Ethereum-style address from a public key: the last 20 bytes
/// of keccak256 over the uncompressed point (without the 0x04 prefix).
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let encoded = public_key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Sign a 32-byte digest, producing a low-S normalized recoverable
/// signature with `v ∈ {27, 28}`.
///
/// This is the validator-side counterpart of [`recover_signer`], used by
/// checkpoint-signing tooling and by tests.
pub fn sign_digest(
    digest: &Hash,
    signing_key: &SigningKey,
) -> Result<RecoverableSignature, CryptoError> {
    let (sig, recid) = signing_key
        .sign_prehash_recoverable(digest)
        .map_err(|_| CryptoError::SigningFailed)?;

    let sig_bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    // Normalize S to the lower half; flipping S flips the recovery id.
    let v = if is_low_s(&s) {
        recid.to_byte() + 27
    } else {
        s = invert_s(&s);
        if recid.to_byte() == 0 {
            28
        } else {
            27
        }
    };

    Ok(RecoverableSignature { r, s, v })
}

/// Check that S is at most half the curve order (EIP-2).
///
/// Constant-time: the comparison runs in fixed time regardless of input.
fn is_low_s(s: &[u8; 32]) -> bool {
    (!ct_less_than(&SECP256K1_HALF_ORDER, s)).into()
}

/// Check that a scalar is in `[1, n-1]`.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }
    let below_order = ct_less_than(scalar, &SECP256K1_ORDER);
    (!is_zero & below_order).into()
}

/// Constant-time big-endian `a < b` over 32-byte values.
fn ct_less_than(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);
    for i in 0..32 {
        let not_decided = !(less | greater);
        let byte_less = Choice::from((a[i] < b[i]) as u8);
        let byte_greater = Choice::from((a[i] > b[i]) as u8);
        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }
    less
}

/// Compute `n - s`, turning a low-S value into its high-S twin and back.
fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;
    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }
    result
}

/// Parse a recovery id from the wire `v` byte (0, 1, 27, or 28).
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(CryptoError::InvalidRecoveryId(v)),
    };
    RecoveryId::try_from(id).map_err(|_| CryptoError::InvalidRecoveryId(v))
}
