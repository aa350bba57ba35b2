//! # Merkle-Patricia-Trie Descent
//!
//! Walks an ordered list of RLP-encoded nodes from the trusted root down
//! to a value. Each node must hash to the reference that led to it before
//! any of its contents are used.

use super::errors::TrieError;
use super::nibbles::Nibbles;
use super::rlp::{decode, RlpValue};
use shared_crypto::keccak256;
use shared_types::Hash;

const BRANCH_ITEMS: usize = 17;
const PAIR_ITEMS: usize = 2;

/// Resolve `key` under `root`, returning the proven value.
///
/// `nodes` is ordered root-first. Inline (shorter-than-hash) child nodes
/// are not accepted; every descent step must go through a 32-byte hash
/// reference, which is what proofs extracted node-by-node from a foreign
/// chain look like.
pub fn verify_inclusion(root: &Hash, key: &[u8], nodes: &[Vec<u8>]) -> Result<Vec<u8>, TrieError> {
    let path = Nibbles::from_bytes(key);
    let mut cursor = 0usize;
    let mut expected = *root;

    for node_bytes in nodes {
        let computed = keccak256(node_bytes);
        if computed != expected {
            return Err(TrieError::HashMismatch { expected, computed });
        }

        let node = decode(node_bytes)?;
        let items = node.as_list().ok_or(TrieError::InvalidNode {
            reason: "node is not a list",
        })?;

        match items.len() {
            BRANCH_ITEMS => {
                if cursor == path.len() {
                    // Key exhausted at a branch: its terminal slot is the value.
                    let value = items[16].as_bytes().ok_or(TrieError::InvalidNode {
                        reason: "branch value slot is a list",
                    })?;
                    return Ok(value.to_vec());
                }
                let child = items[path.at(cursor) as usize]
                    .as_bytes()
                    .ok_or(TrieError::InvalidNode {
                        reason: "inline child nodes are not supported",
                    })?;
                if child.is_empty() {
                    return Err(TrieError::PathMismatch);
                }
                expected = child.try_into().map_err(|_| TrieError::InvalidNode {
                    reason: "child reference is not a 32-byte hash",
                })?;
                cursor += 1;
            }
            PAIR_ITEMS => {
                let encoded_path = items[0].as_bytes().ok_or(TrieError::InvalidNode {
                    reason: "partial path is a list",
                })?;
                let (partial, is_leaf) =
                    Nibbles::decode_hex_prefix(encoded_path).ok_or(TrieError::InvalidNode {
                        reason: "undecodable hex-prefix path",
                    })?;
                if !path.starts_with_at(&partial, cursor) {
                    return Err(TrieError::PathMismatch);
                }
                cursor += partial.len();

                let payload = items[1].as_bytes().ok_or(TrieError::InvalidNode {
                    reason: "inline child nodes are not supported",
                })?;
                if is_leaf {
                    if cursor != path.len() {
                        return Err(TrieError::NotExhausted);
                    }
                    return Ok(payload.to_vec());
                }
                expected = payload.try_into().map_err(|_| TrieError::InvalidNode {
                    reason: "child reference is not a 32-byte hash",
                })?;
            }
            _ => {
                return Err(TrieError::InvalidNode {
                    reason: "node is neither a branch nor a pair",
                })
            }
        }
    }

    Err(TrieError::ProofIncomplete)
}
