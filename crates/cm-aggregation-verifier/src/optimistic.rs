//! # Optimistic Verification
//!
//! Provisionally accepts a primary verifier's verdict, then lets an
//! enrolled watcher quorum dispute it inside a fraud window. Deliveries
//! move through three states:
//!
//! - **Pending**: pre-verified, fraud window still open
//! - **Confirmed**: window elapsed without a watcher quorum disputing
//! - **Disputed**: the watcher quorum marked the delivery fraudulent
//!
//! Time is an explicit parameter everywhere. The caller owns the clock;
//! nothing here reads wall time, which keeps the state machine
//! deterministic and testable.

use crate::domain::errors::OptimisticError;
use parking_lot::RwLock;
use shared_types::{Address, Hash, Message, MessageVerifier, VerifierError};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{info, warn};

/// Where a pre-verified delivery stands at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryStatus {
    Pending,
    Confirmed,
    Disputed,
}

struct Record {
    pre_verified_at: u64,
    disputes: HashSet<Address>,
}

/// Optimistic wrapper around a primary verifier.
pub struct OptimisticVerifier {
    primary: Arc<dyn MessageVerifier>,
    watchers: HashSet<Address>,
    watcher_threshold: usize,
    fraud_window_secs: u64,
    /// One entry per pre-verified message. Settled entries stay until the
    /// caller evicts them with [`prune_settled`](Self::prune_settled).
    records: RwLock<HashMap<Hash, Record>>,
}

impl OptimisticVerifier {
    /// `watcher_threshold` disputes from distinct `watchers` within the
    /// fraud window move a delivery to `Disputed`.
    pub fn new(
        primary: Arc<dyn MessageVerifier>,
        watchers: HashSet<Address>,
        watcher_threshold: usize,
        fraud_window_secs: u64,
    ) -> Self {
        Self {
            primary,
            watchers,
            watcher_threshold,
            fraud_window_secs,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Run the primary verifier and, on success, open the fraud window for
    /// the message at instant `now`.
    ///
    /// Returns the primary verdict. Re-pre-verifying an already recorded
    /// message leaves the original window (and any disputes) untouched.
    pub fn pre_verify(
        &self,
        metadata: &[u8],
        message: &[u8],
        now: u64,
    ) -> Result<bool, VerifierError> {
        let verified = self.primary.verify(metadata, message)?;
        if !verified {
            return Ok(false);
        }
        let id = Message::decode(message)
            .map_err(VerifierError::MalformedMessage)?
            .id();
        self.records.write().entry(id).or_insert_with(|| {
            info!(message_id = %hex::encode(id), now, "Opened fraud window");
            Record {
                pre_verified_at: now,
                disputes: HashSet::new(),
            }
        });
        Ok(true)
    }

    /// Record a watcher's fraud mark against a pre-verified message.
    pub fn mark_fraudulent(
        &self,
        watcher: Address,
        message_id: Hash,
    ) -> Result<(), OptimisticError> {
        if !self.watchers.contains(&watcher) {
            return Err(OptimisticError::UnknownWatcher(watcher));
        }
        let mut records = self.records.write();
        let record = records
            .get_mut(&message_id)
            .ok_or(OptimisticError::NotPreVerified(message_id))?;
        if !record.disputes.insert(watcher) {
            return Err(OptimisticError::AlreadyMarked(watcher));
        }
        warn!(
            message_id = %hex::encode(message_id),
            watcher = %hex::encode(watcher),
            disputes = record.disputes.len(),
            "Fraud mark recorded"
        );
        Ok(())
    }

    /// The delivery's state at instant `now`.
    pub fn status(&self, message_id: &Hash, now: u64) -> Result<DeliveryStatus, OptimisticError> {
        let records = self.records.read();
        let record = records
            .get(message_id)
            .ok_or(OptimisticError::NotPreVerified(*message_id))?;
        if record.disputes.len() >= self.watcher_threshold {
            return Ok(DeliveryStatus::Disputed);
        }
        if now < record.pre_verified_at + self.fraud_window_secs {
            return Ok(DeliveryStatus::Pending);
        }
        Ok(DeliveryStatus::Confirmed)
    }

    /// Whether the message may be delivered at instant `now`: confirmed
    /// only. Never-pre-verified messages are simply not deliverable.
    pub fn verify_at(&self, message_id: &Hash, now: u64) -> bool {
        matches!(self.status(message_id, now), Ok(DeliveryStatus::Confirmed))
    }

    /// Drop every record that is settled at instant `now` (`Confirmed` or
    /// `Disputed`), returning how many were removed. Pending windows are
    /// kept.
    ///
    /// A pruned message is no longer deliverable through
    /// [`verify_at`](Self::verify_at), so callers prune only after acting on
    /// the settled outcome.
    pub fn prune_settled(&self, now: u64) -> usize {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|_, record| {
            record.disputes.len() < self.watcher_threshold
                && now < record.pre_verified_at + self.fraud_window_secs
        });
        let removed = before - records.len();
        if removed > 0 {
            info!(removed, remaining = records.len(), "Pruned settled fraud windows");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysTrue;

    impl MessageVerifier for AlwaysTrue {
        fn verify(&self, _metadata: &[u8], _message: &[u8]) -> Result<bool, VerifierError> {
            Ok(true)
        }
    }

    struct AlwaysFalse;

    impl MessageVerifier for AlwaysFalse {
        fn verify(&self, _metadata: &[u8], _message: &[u8]) -> Result<bool, VerifierError> {
            Ok(false)
        }
    }

    const WINDOW: u64 = 3600;

    fn watcher(n: u8) -> Address {
        let mut a = [0u8; 20];
        a[19] = n;
        a
    }

    fn message() -> Message {
        Message {
            version: 3,
            nonce: 9,
            origin: 1000,
            sender: [0x01; 32],
            destination: 2000,
            recipient: [0x02; 32],
            body: b"payload".to_vec(),
        }
    }

    fn optimistic(primary: Arc<dyn MessageVerifier>) -> OptimisticVerifier {
        let watchers = [watcher(1), watcher(2), watcher(3)].into_iter().collect();
        OptimisticVerifier::new(primary, watchers, 2, WINDOW)
    }

    #[test]
    fn test_confirms_after_quiet_window() {
        let verifier = optimistic(Arc::new(AlwaysTrue));
        let msg = message();
        assert_eq!(verifier.pre_verify(&[], &msg.encode(), 100), Ok(true));

        assert_eq!(
            verifier.status(&msg.id(), 100 + WINDOW - 1),
            Ok(DeliveryStatus::Pending)
        );
        assert!(!verifier.verify_at(&msg.id(), 100 + WINDOW - 1));

        assert_eq!(
            verifier.status(&msg.id(), 100 + WINDOW),
            Ok(DeliveryStatus::Confirmed)
        );
        assert!(verifier.verify_at(&msg.id(), 100 + WINDOW));
    }

    #[test]
    fn test_primary_rejection_opens_no_window() {
        let verifier = optimistic(Arc::new(AlwaysFalse));
        let msg = message();
        assert_eq!(verifier.pre_verify(&[], &msg.encode(), 100), Ok(false));
        assert_eq!(
            verifier.status(&msg.id(), 200),
            Err(OptimisticError::NotPreVerified(msg.id()))
        );
    }

    #[test]
    fn test_watcher_quorum_disputes() {
        let verifier = optimistic(Arc::new(AlwaysTrue));
        let msg = message();
        verifier.pre_verify(&[], &msg.encode(), 100).unwrap();

        verifier.mark_fraudulent(watcher(1), msg.id()).unwrap();
        // One mark is below the quorum of two.
        assert_eq!(
            verifier.status(&msg.id(), 100 + WINDOW),
            Ok(DeliveryStatus::Confirmed)
        );

        verifier.mark_fraudulent(watcher(2), msg.id()).unwrap();
        assert_eq!(
            verifier.status(&msg.id(), 100 + WINDOW),
            Ok(DeliveryStatus::Disputed)
        );
        assert!(!verifier.verify_at(&msg.id(), 100 + WINDOW));
    }

    #[test]
    fn test_stranger_cannot_mark() {
        let verifier = optimistic(Arc::new(AlwaysTrue));
        let msg = message();
        verifier.pre_verify(&[], &msg.encode(), 100).unwrap();
        assert_eq!(
            verifier.mark_fraudulent(watcher(9), msg.id()),
            Err(OptimisticError::UnknownWatcher(watcher(9)))
        );
    }

    #[test]
    fn test_one_mark_per_watcher() {
        let verifier = optimistic(Arc::new(AlwaysTrue));
        let msg = message();
        verifier.pre_verify(&[], &msg.encode(), 100).unwrap();
        verifier.mark_fraudulent(watcher(1), msg.id()).unwrap();
        assert_eq!(
            verifier.mark_fraudulent(watcher(1), msg.id()),
            Err(OptimisticError::AlreadyMarked(watcher(1)))
        );
    }

    #[test]
    fn test_prune_drops_settled_keeps_pending() {
        let verifier = optimistic(Arc::new(AlwaysTrue));
        let settled = message();
        let mut open = message();
        open.nonce += 1;
        verifier.pre_verify(&[], &settled.encode(), 100).unwrap();
        verifier.pre_verify(&[], &open.encode(), 100 + WINDOW / 2).unwrap();

        // At this instant the first window has elapsed, the second has not.
        let now = 100 + WINDOW;
        assert_eq!(verifier.prune_settled(now), 1);
        assert_eq!(
            verifier.status(&settled.id(), now),
            Err(OptimisticError::NotPreVerified(settled.id()))
        );
        assert_eq!(verifier.status(&open.id(), now), Ok(DeliveryStatus::Pending));

        // Disputed records are settled too.
        verifier.mark_fraudulent(watcher(1), open.id()).unwrap();
        verifier.mark_fraudulent(watcher(2), open.id()).unwrap();
        assert_eq!(verifier.prune_settled(now), 1);
        assert_eq!(
            verifier.status(&open.id(), now),
            Err(OptimisticError::NotPreVerified(open.id()))
        );
    }

    #[test]
    fn test_reverification_keeps_original_window() {
        let verifier = optimistic(Arc::new(AlwaysTrue));
        let msg = message();
        verifier.pre_verify(&[], &msg.encode(), 100).unwrap();
        verifier.pre_verify(&[], &msg.encode(), 100 + WINDOW).unwrap();
        // Window still anchored at the first pre-verification.
        assert_eq!(
            verifier.status(&msg.id(), 100 + WINDOW),
            Ok(DeliveryStatus::Confirmed)
        );
    }
}
