//! # Optimistic-Flow Errors

use shared_types::{Address, Hash};
use thiserror::Error;

/// Errors in the optimistic pre-verify / challenge flow.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptimisticError {
    /// The caller is not an enrolled watcher.
    #[error("{} is not an enrolled watcher", hex::encode(.0))]
    UnknownWatcher(Address),

    /// Each watcher gets one fraud mark per message.
    #[error("watcher {} already marked this message", hex::encode(.0))]
    AlreadyMarked(Address),

    /// No pre-verification is on record for the message.
    #[error("message {} was never pre-verified", hex::encode(.0))]
    NotPreVerified(Hash),
}
