//! Real sub-verifiers composed under the aggregation and optimistic
//! modules: a signature quorum AND an independent trie proof.

use crate::harness::*;
use cm_aggregation_verifier::{
    encode_metadata as encode_aggregation, AggregationVerifier, DeliveryStatus, OptimisticVerifier,
};
use cm_multisig_verifier::{MultisigVerifier, StaticCommitments};
use cm_trie_verifier::{StaticRoots, TrieInclusionVerifier};
use cm_validator_registry::commitment_hash;
use shared_types::{MessageVerifier, ModuleId};
use std::sync::Arc;

fn module(n: u8) -> ModuleId {
    let mut m = [0u8; 32];
    m[31] = n;
    m
}

struct Fixture {
    aggregator: AggregationVerifier,
    quorum_payload: Vec<u8>,
    trie_payload: Vec<u8>,
    message_bytes: Vec<u8>,
}

fn fixture() -> Fixture {
    init_tracing();
    let set = sorted_validators(3);
    let msg = test_message(LEAF_INDEX, b"bridge 50 units");

    let quorum_payload = signed_metadata(&set, &[0, 2], 2, &msg).encode();
    let quorum = MultisigVerifier::new(
        StaticCommitments::new().with(ORIGIN, commitment_hash(2, &members(&set))),
    );

    let proof = trie_proof_for(&msg.id());
    let trie = TrieInclusionVerifier::new(StaticRoots::new().with(ORIGIN, proof.root));

    Fixture {
        aggregator: AggregationVerifier::new(vec![
            (module(1), Arc::new(quorum) as Arc<dyn MessageVerifier>),
            (module(2), Arc::new(trie)),
        ]),
        quorum_payload,
        trie_payload: proof.encode(),
        message_bytes: msg.encode(),
    }
}

#[test]
fn both_proof_sources_pass() {
    let f = fixture();
    let metadata = encode_aggregation(&[
        (module(1), Some(&f.quorum_payload[..])),
        (module(2), Some(&f.trie_payload[..])),
    ]);
    assert_eq!(
        f.aggregator.verify(&metadata, &f.message_bytes),
        Ok(true)
    );
}

#[test]
fn one_failing_source_fails_the_aggregate() {
    let f = fixture();
    let mut bad_trie = f.trie_payload.clone();
    let last = bad_trie.len() - 1;
    bad_trie[last] ^= 1;
    let metadata = encode_aggregation(&[
        (module(1), Some(&f.quorum_payload[..])),
        (module(2), Some(&bad_trie[..])),
    ]);
    assert_eq!(
        f.aggregator.verify(&metadata, &f.message_bytes),
        Ok(false)
    );
}

#[test]
fn unconfigured_source_is_skipped() {
    let f = fixture();
    let metadata = encode_aggregation(&[
        (module(1), Some(&f.quorum_payload[..])),
        (module(2), None),
    ]);
    assert_eq!(
        f.aggregator.verify(&metadata, &f.message_bytes),
        Ok(true)
    );
}

#[test]
fn optimistic_flow_over_real_quorum() {
    init_tracing();
    let set = sorted_validators(3);
    let msg = test_message(LEAF_INDEX, b"optimistic delivery");
    let quorum = MultisigVerifier::new(
        StaticCommitments::new().with(ORIGIN, commitment_hash(2, &members(&set))),
    );
    let watchers = [[0x01; 20], [0x02; 20], [0x03; 20]].into_iter().collect();
    let optimistic = OptimisticVerifier::new(Arc::new(quorum), watchers, 2, 3600);

    let metadata = signed_metadata(&set, &[1, 2], 2, &msg).encode();
    assert_eq!(optimistic.pre_verify(&metadata, &msg.encode(), 100), Ok(true));
    assert_eq!(
        optimistic.status(&msg.id(), 100),
        Ok(DeliveryStatus::Pending)
    );

    optimistic.mark_fraudulent([0x01; 20], msg.id()).unwrap();
    optimistic.mark_fraudulent([0x03; 20], msg.id()).unwrap();
    assert_eq!(
        optimistic.status(&msg.id(), 100 + 3600),
        Ok(DeliveryStatus::Disputed)
    );
    assert!(!optimistic.verify_at(&msg.id(), 100 + 3600));
}
