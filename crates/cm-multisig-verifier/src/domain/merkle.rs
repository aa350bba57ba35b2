//! # Merkle Branch Recomputation
//!
//! Fixed-depth incremental merkle tree, 2^32 leaves. Only root
//! recomputation lives here; tree construction is origin-side.

use shared_crypto::keccak256;
use shared_types::Hash;

/// Depth of the outbox tree.
pub const TREE_DEPTH: usize = 32;

/// A sibling path from a leaf up to the root.
pub type MerkleBranch = [Hash; TREE_DEPTH];

/// Recompute the root implied by `leaf` sitting at `index` with sibling
/// path `branch`.
///
/// At level `L`, bit `L` of the index selects the pair order: a zero bit
/// means the running hash is the left child.
pub fn branch_root(leaf: &Hash, branch: &MerkleBranch, index: u32) -> Hash {
    let mut current = *leaf;
    for (level, sibling) in branch.iter().enumerate() {
        let mut pair = [0u8; 64];
        if (index >> level) & 1 == 0 {
            pair[..32].copy_from_slice(&current);
            pair[32..].copy_from_slice(sibling);
        } else {
            pair[..32].copy_from_slice(sibling);
            pair[32..].copy_from_slice(&current);
        }
        current = keccak256(&pair);
    }
    current
}
