//! Registry and multisig verifier end to end: a live registry feeds the
//! commitment oracle, so set mutations immediately change what verifies.

use crate::harness::*;
use cm_multisig_verifier::{checkpoint_digest, Checkpoint, MultisigVerifier, RegistryCommitmentOracle};
use cm_validator_registry::{InMemorySetStore, RegistryService, ValidatorRegistryApi};
use shared_crypto::sign_digest;
use shared_types::{Address, MessageVerifier};
use std::sync::Arc;

const OWNER: Address = [0xAA; 20];

fn registry_with(set_members: &[Address], threshold: u8) -> Arc<RegistryService<InMemorySetStore>> {
    init_tracing();
    let registry = Arc::new(RegistryService::new(InMemorySetStore::new(), OWNER));
    registry.enroll_domain(OWNER, ORIGIN).unwrap();
    registry
        .add_validators(OWNER, ORIGIN, set_members, threshold)
        .unwrap();
    registry
}

#[test]
fn two_of_three_delivery_against_live_registry() {
    let set = sorted_validators(3);
    let registry = registry_with(&members(&set), 2);
    let verifier = MultisigVerifier::new(RegistryCommitmentOracle::new(registry));

    let msg = test_message(LEAF_INDEX, b"transfer 100 units");
    let metadata = signed_metadata(&set, &[0, 2], 2, &msg);
    assert_eq!(verifier.verify(&metadata.encode(), &msg.encode()), Ok(true));
}

#[test]
fn substituted_signature_over_other_message_fails() {
    let set = sorted_validators(3);
    let registry = registry_with(&members(&set), 2);
    let verifier = MultisigVerifier::new(RegistryCommitmentOracle::new(registry));

    let msg = test_message(LEAF_INDEX, b"transfer 100 units");
    let mut metadata = signed_metadata(&set, &[0, 2], 2, &msg);

    // The middle validator signed a checkpoint for a different message id;
    // that signature substituted into the quorum recovers to a stranger.
    let (_, root) = branch_and_root(&msg.id());
    let foreign_digest = checkpoint_digest(&Checkpoint {
        origin: ORIGIN,
        origin_mailbox: MAILBOX,
        root,
        index: LEAF_INDEX,
        message_id: [0xEE; 32],
    });
    metadata.signatures[1] = sign_digest(&foreign_digest, &set[1].key).unwrap();

    assert_eq!(
        verifier.verify(&metadata.encode(), &msg.encode()),
        Ok(false)
    );
}

#[test]
fn registry_mutation_invalidates_stale_metadata() {
    let set = sorted_validators(3);
    let registry = registry_with(&members(&set), 2);
    let verifier = MultisigVerifier::new(RegistryCommitmentOracle::new(Arc::clone(&registry)));

    let msg = test_message(LEAF_INDEX, b"payload");
    let metadata = signed_metadata(&set, &[0, 2], 2, &msg);
    assert_eq!(verifier.verify(&metadata.encode(), &msg.encode()), Ok(true));

    // Enrolling a fourth validator changes the commitment; metadata built
    // against the old set no longer binds.
    registry
        .add_validator(OWNER, ORIGIN, [0x77; 20])
        .unwrap();
    assert_eq!(
        verifier.verify(&metadata.encode(), &msg.encode()),
        Ok(false)
    );
}

#[test]
fn remove_and_readd_changes_what_verifies() {
    let set = sorted_validators(3);
    let registry = registry_with(&members(&set), 2);
    let verifier = MultisigVerifier::new(RegistryCommitmentOracle::new(Arc::clone(&registry)));

    let msg = test_message(LEAF_INDEX, b"payload");
    let metadata = signed_metadata(&set, &[0, 1], 2, &msg);
    assert_eq!(verifier.verify(&metadata.encode(), &msg.encode()), Ok(true));

    // Remove the first member and re-add it: same set, but it now sits at
    // the end of the enumeration, so the commitment changes.
    let first = set[0].address;
    registry.remove_validator(OWNER, ORIGIN, first).unwrap();
    registry.add_validator(OWNER, ORIGIN, first).unwrap();
    assert_eq!(
        verifier.verify(&metadata.encode(), &msg.encode()),
        Ok(false)
    );

    // Metadata claiming the new enumeration order binds again. Signatures
    // follow member-list order, so the re-added member signs last.
    let mut reordered = signed_metadata(&set, &[1, 0], 2, &msg);
    reordered.members = vec![set[1].address, set[2].address, first];
    assert_eq!(
        verifier.verify(&reordered.encode(), &msg.encode()),
        Ok(true)
    );
}

#[test]
fn message_from_unenrolled_domain_is_structural_error() {
    let set = sorted_validators(2);
    let registry = Arc::new(RegistryService::new(InMemorySetStore::new(), OWNER));
    let verifier = MultisigVerifier::new(RegistryCommitmentOracle::new(registry));

    let msg = test_message(LEAF_INDEX, b"payload");
    let metadata = signed_metadata(&set, &[0, 1], 2, &msg);
    assert!(verifier.verify(&metadata.encode(), &msg.encode()).is_err());
}
