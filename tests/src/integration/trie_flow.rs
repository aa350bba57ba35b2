//! Trie proofs as an independent proof source: the same message that
//! passes a signature quorum also verifies through a state-trie proof,
//! and the two fail independently.

use crate::harness::*;
use cm_trie_verifier::{StaticRoots, TrieError, TrieInclusionVerifier, TrieProof};
use cm_trie_verifier::verify_inclusion;
use shared_types::MessageVerifier;

#[test]
fn message_id_proven_in_foreign_state_trie() {
    init_tracing();
    let msg = test_message(11, b"alt proof path");
    let proof = trie_proof_for(&msg.id());
    let verifier = TrieInclusionVerifier::new(StaticRoots::new().with(ORIGIN, proof.root));
    assert_eq!(verifier.verify(&proof.encode(), &msg.encode()), Ok(true));
}

#[test]
fn proof_does_not_transfer_between_messages() {
    let proven = test_message(11, b"alt proof path");
    let other = test_message(12, b"different message");
    let proof = trie_proof_for(&proven.id());
    let verifier = TrieInclusionVerifier::new(StaticRoots::new().with(ORIGIN, proof.root));
    assert_eq!(verifier.verify(&proof.encode(), &other.encode()), Ok(false));
}

#[test]
fn descent_reports_specific_failures() {
    let msg = test_message(11, b"alt proof path");
    let TrieProof { root, key, nodes } = trie_proof_for(&msg.id());

    assert_eq!(
        verify_inclusion(&root, &key, &nodes),
        Ok(msg.id().to_vec())
    );

    // Corrupt one nibble of the key: divergence inside the leaf path.
    assert_eq!(
        verify_inclusion(&root, &[0x12, 0x35], &nodes),
        Err(TrieError::PathMismatch)
    );

    // Drop the leaf: the proof runs out before resolving.
    assert_eq!(
        verify_inclusion(&root, &key, &nodes[..2]),
        Err(TrieError::ProofIncomplete)
    );

    // Corrupt the branch node: its hash no longer matches the extension's
    // child reference.
    let mut corrupted = nodes.clone();
    corrupted[1][10] ^= 1;
    assert!(matches!(
        verify_inclusion(&root, &key, &corrupted),
        Err(TrieError::HashMismatch { .. })
    ));
}
