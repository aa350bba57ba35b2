//! # Multisig Metadata Codec
//!
//! Byte-exact wire layout, offsets from the start of the blob:
//!
//! ```text
//! [0:32]    checkpoint root
//! [32:36]   checkpoint index, u32 BE   (legacy: [32:64], 32-byte BE word)
//! next 32   origin mailbox word
//! next 32*32  merkle branch, leaf-adjacent sibling first
//! next 1    claimed threshold
//! next t*65 signatures, 65 bytes each, in claimed-member-list order
//! rest      claimed member addresses, 32 bytes each, 20B right-aligned
//! ```
//!
//! Decoding performs only structural checks; nothing cryptographic happens
//! here. The encode half exists for relayer tooling and tests.

use super::merkle::{MerkleBranch, TREE_DEPTH};
use shared_crypto::{RecoverableSignature, SIGNATURE_LEN};
use shared_types::{address_from_word, address_to_word, Address, ByteReader, Hash, ReadError};

/// A decoded multisig metadata blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultisigMetadata {
    pub root: Hash,
    pub index: u32,
    pub origin_mailbox: [u8; 32],
    pub branch: MerkleBranch,
    pub threshold: u8,
    pub signatures: Vec<RecoverableSignature>,
    /// Claimed members, one address per signature plus any unsigned rest.
    pub members: Vec<Address>,
}

impl MultisigMetadata {
    /// Decode the current layout (4-byte index).
    pub fn decode(bytes: &[u8]) -> Result<Self, ReadError> {
        let mut reader = ByteReader::new(bytes);
        let root = reader.read_array::<32>()?;
        let index = reader.read_u32_be()?;
        Self::decode_tail(reader, root, index)
    }

    /// Decode the legacy layout, whose index occupies a full 32-byte word.
    /// The upper 28 bytes must be zero.
    pub fn decode_legacy(bytes: &[u8]) -> Result<Self, ReadError> {
        let mut reader = ByteReader::new(bytes);
        let root = reader.read_array::<32>()?;
        let index_offset = reader.pos();
        let word = reader.read_array::<32>()?;
        if word[..28].iter().any(|&b| b != 0) {
            return Err(ReadError::InvalidField {
                offset: index_offset,
                reason: "legacy index exceeds u32 range",
            });
        }
        let index = u32::from_be_bytes([word[28], word[29], word[30], word[31]]);
        Self::decode_tail(reader, root, index)
    }

    fn decode_tail(
        mut reader: ByteReader<'_>,
        root: Hash,
        index: u32,
    ) -> Result<Self, ReadError> {
        let origin_mailbox = reader.read_array::<32>()?;

        let mut branch = [[0u8; 32]; TREE_DEPTH];
        for level in branch.iter_mut() {
            *level = reader.read_array::<32>()?;
        }

        let threshold_offset = reader.pos();
        let threshold = reader.read_u8()?;
        if threshold == 0 {
            return Err(ReadError::InvalidField {
                offset: threshold_offset,
                reason: "threshold must be at least 1",
            });
        }

        let mut signatures = Vec::with_capacity(threshold as usize);
        for _ in 0..threshold {
            let raw = reader.read_array::<SIGNATURE_LEN>()?;
            signatures.push(RecoverableSignature::from_bytes(&raw));
        }

        let members_offset = reader.pos();
        let mut members = Vec::new();
        while !reader.is_empty() {
            let word_offset = reader.pos();
            let word = reader.read_array::<32>()?;
            let member = address_from_word(&word).ok_or(ReadError::InvalidField {
                offset: word_offset,
                reason: "member word has non-zero padding",
            })?;
            members.push(member);
        }
        if members.len() < threshold as usize {
            return Err(ReadError::InvalidField {
                offset: members_offset,
                reason: "fewer claimed members than threshold",
            });
        }
        reader.expect_end()?;

        Ok(Self {
            root,
            index,
            origin_mailbox,
            branch,
            threshold,
            signatures,
            members,
        })
    }

    /// Encode in the current layout.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.encode_prefix(&self.index.to_be_bytes());
        self.encode_tail(&mut out);
        out
    }

    /// Encode in the legacy layout (32-byte index word).
    pub fn encode_legacy(&self) -> Vec<u8> {
        let mut word = [0u8; 32];
        word[28..].copy_from_slice(&self.index.to_be_bytes());
        let mut out = self.encode_prefix(&word);
        self.encode_tail(&mut out);
        out
    }

    fn encode_prefix(&self, index_bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            32 + index_bytes.len()
                + 32
                + TREE_DEPTH * 32
                + 1
                + self.signatures.len() * SIGNATURE_LEN
                + self.members.len() * 32,
        );
        out.extend_from_slice(&self.root);
        out.extend_from_slice(index_bytes);
        out
    }

    fn encode_tail(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.origin_mailbox);
        for level in &self.branch {
            out.extend_from_slice(level);
        }
        out.push(self.threshold);
        for signature in &self.signatures {
            out.extend_from_slice(&signature.to_bytes());
        }
        for member in &self.members {
            out.extend_from_slice(&address_to_word(member));
        }
    }
}
