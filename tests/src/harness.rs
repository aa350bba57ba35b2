//! Shared fixtures for the integration flows.

use cm_multisig_verifier::{branch_root, checkpoint_digest, Checkpoint, MultisigMetadata, TREE_DEPTH};
use cm_trie_verifier::{rlp_encode_bytes, rlp_encode_list, Nibbles, TrieProof};
use k256::ecdsa::SigningKey;
use shared_crypto::{address_from_pubkey, keccak256, sign_digest};
use shared_types::{Address, Hash, Message};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per process, honoring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub const ORIGIN: u32 = 1000;
pub const DESTINATION: u32 = 2000;
pub const MAILBOX: [u8; 32] = [0x4D; 32];
pub const LEAF_INDEX: u32 = 5;

pub struct TestValidator {
    pub key: SigningKey,
    pub address: Address,
}

/// Fresh validators, sorted ascending by address so metadata member lists
/// come out in signing order.
pub fn sorted_validators(count: usize) -> Vec<TestValidator> {
    let mut rng = rand::thread_rng();
    let mut out: Vec<TestValidator> = (0..count)
        .map(|_| {
            let key = SigningKey::random(&mut rng);
            let address = address_from_pubkey(key.verifying_key());
            TestValidator { key, address }
        })
        .collect();
    out.sort_by(|a, b| a.address.cmp(&b.address));
    out
}

pub fn members(set: &[TestValidator]) -> Vec<Address> {
    set.iter().map(|v| v.address).collect()
}

pub fn test_message(nonce: u32, body: &[u8]) -> Message {
    Message {
        version: 3,
        nonce,
        origin: ORIGIN,
        sender: [0x01; 32],
        destination: DESTINATION,
        recipient: [0x02; 32],
        body: body.to_vec(),
    }
}

/// An arbitrary branch and the root it implies for `message_id` at
/// [`LEAF_INDEX`].
pub fn branch_and_root(message_id: &Hash) -> ([Hash; TREE_DEPTH], Hash) {
    let mut branch = [[0u8; 32]; TREE_DEPTH];
    for (level, sibling) in branch.iter_mut().enumerate() {
        sibling[0] = level as u8;
        sibling[31] = 0x5A;
    }
    let root = branch_root(message_id, &branch, LEAF_INDEX);
    (branch, root)
}

/// Metadata claiming the full member list, signed by `signer_indices` (in
/// member-list order) over the current checkpoint digest.
pub fn signed_metadata(
    set: &[TestValidator],
    signer_indices: &[usize],
    threshold: u8,
    message: &Message,
) -> MultisigMetadata {
    let (branch, root) = branch_and_root(&message.id());
    let digest = checkpoint_digest(&Checkpoint {
        origin: message.origin,
        origin_mailbox: MAILBOX,
        root,
        index: LEAF_INDEX,
        message_id: message.id(),
    });
    MultisigMetadata {
        root,
        index: LEAF_INDEX,
        origin_mailbox: MAILBOX,
        branch,
        threshold,
        signatures: signer_indices
            .iter()
            .map(|&i| sign_digest(&digest, &set[i].key).unwrap())
            .collect(),
        members: members(set),
    }
}

/// A 3-level trie proof (extension, branch, leaf) binding key
/// `[0x12, 0x34]` to `value`.
pub fn trie_proof_for(value: &[u8]) -> TrieProof {
    let leaf = rlp_encode_list(&[
        rlp_encode_bytes(&Nibbles(vec![3, 4]).encode_hex_prefix(true)),
        rlp_encode_bytes(value),
    ]);
    let leaf_hash = keccak256(&leaf);

    let mut branch_items: Vec<Vec<u8>> = (0..17).map(|_| rlp_encode_bytes(&[])).collect();
    branch_items[2] = rlp_encode_bytes(&leaf_hash);
    let branch = rlp_encode_list(&branch_items);
    let branch_hash = keccak256(&branch);

    let extension = rlp_encode_list(&[
        rlp_encode_bytes(&Nibbles(vec![1]).encode_hex_prefix(false)),
        rlp_encode_bytes(&branch_hash),
    ]);
    let root = keccak256(&extension);

    TrieProof {
        root,
        key: vec![0x12, 0x34],
        nodes: vec![extension, branch, leaf],
    }
}
