//! # Trie Proof Wire Codec
//!
//! Metadata layout, offsets from the start of the blob:
//!
//! ```text
//! [0:32]   claimed root
//! [32:36]  key length, u32 BE
//! next     key bytes
//! next 4   node count, u32 BE
//! per node: 4B length prefix, then the RLP-encoded node
//! ```

use shared_types::{ByteReader, Hash, ReadError};

/// Caps on attacker-controlled counts, far above anything a real trie
/// proof needs.
const MAX_KEY_LEN: usize = 1024;
const MAX_NODES: usize = 256;
const MAX_NODE_LEN: usize = 64 * 1024;

/// A decoded trie inclusion proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieProof {
    /// The root the proof claims to descend from.
    pub root: Hash,
    /// The trie key being proven.
    pub key: Vec<u8>,
    /// RLP-encoded nodes, root-first.
    pub nodes: Vec<Vec<u8>>,
}

impl TrieProof {
    pub fn decode(bytes: &[u8]) -> Result<Self, ReadError> {
        let mut reader = ByteReader::new(bytes);
        let root = reader.read_array::<32>()?;

        let key_len_offset = reader.pos();
        let key_len = reader.read_u32_be()? as usize;
        if key_len > MAX_KEY_LEN {
            return Err(ReadError::InvalidField {
                offset: key_len_offset,
                reason: "key length exceeds limit",
            });
        }
        let key = reader.read_bytes(key_len)?.to_vec();

        let count_offset = reader.pos();
        let count = reader.read_u32_be()? as usize;
        if count == 0 || count > MAX_NODES {
            return Err(ReadError::InvalidField {
                offset: count_offset,
                reason: "node count out of range",
            });
        }
        let mut nodes = Vec::with_capacity(count);
        for _ in 0..count {
            let len_offset = reader.pos();
            let len = reader.read_u32_be()? as usize;
            if len == 0 || len > MAX_NODE_LEN {
                return Err(ReadError::InvalidField {
                    offset: len_offset,
                    reason: "node length out of range",
                });
            }
            nodes.push(reader.read_bytes(len)?.to_vec());
        }
        reader.expect_end()?;

        Ok(Self { root, key, nodes })
    }

    pub fn encode(&self) -> Vec<u8> {
        let nodes_len: usize = self.nodes.iter().map(|n| 4 + n.len()).sum();
        let mut out = Vec::with_capacity(32 + 4 + self.key.len() + 4 + nodes_len);
        out.extend_from_slice(&self.root);
        out.extend_from_slice(&(self.key.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.key);
        out.extend_from_slice(&(self.nodes.len() as u32).to_be_bytes());
        for node in &self.nodes {
            out.extend_from_slice(&(node.len() as u32).to_be_bytes());
            out.extend_from_slice(node);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrieProof {
        TrieProof {
            root: [0xAA; 32],
            key: vec![0x12, 0x34],
            nodes: vec![vec![0xC0], vec![0x01, 0x02, 0x03]],
        }
    }

    #[test]
    fn test_roundtrip() {
        let proof = sample();
        assert_eq!(TrieProof::decode(&proof.encode()).unwrap(), proof);
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let mut proof = sample();
        proof.nodes.clear();
        assert!(matches!(
            TrieProof::decode(&proof.encode()),
            Err(ReadError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_truncated_rejected() {
        let encoded = sample().encode();
        assert!(matches!(
            TrieProof::decode(&encoded[..encoded.len() - 2]),
            Err(ReadError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut encoded = sample().encode();
        encoded.push(0);
        assert!(matches!(
            TrieProof::decode(&encoded),
            Err(ReadError::TrailingBytes { .. })
        ));
    }

    #[test]
    fn test_oversized_key_rejected() {
        let mut proof = sample();
        proof.key = vec![0; 2000];
        assert!(matches!(
            TrieProof::decode(&proof.encode()),
            Err(ReadError::InvalidField { .. })
        ));
    }
}
