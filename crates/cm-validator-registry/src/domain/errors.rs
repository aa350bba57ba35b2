//! # Registry Errors
//!
//! Mutation errors are returned synchronously with no partial state change.

use shared_types::{Address, Domain};
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The zero address is never a valid validator.
    #[error("Zero address is not a valid validator")]
    ZeroAddress,

    /// The validator is already a member of the domain's set.
    #[error("Validator {} is already a member", hex::encode(.0))]
    AlreadyMember(Address),

    /// The validator is not a member of the domain's set.
    #[error("Validator {} is not a member", hex::encode(.0))]
    NotMember(Address),

    /// Removing the member would leave fewer members than the threshold.
    #[error("Removal would leave {remaining} members below threshold {threshold}")]
    ThresholdViolation { remaining: usize, threshold: u8 },

    /// Threshold must satisfy `1 <= t <= |members|`.
    #[error("Threshold {threshold} out of range for {members} members")]
    OutOfRange { threshold: u8, members: usize },

    /// No validator set is enrolled for this domain.
    #[error("No validator set enrolled for domain {0}")]
    UnknownDomain(Domain),

    /// A domain can only be enrolled once.
    #[error("Domain {0} is already enrolled")]
    AlreadyEnrolled(Domain),

    /// The caller is not the registry owner.
    #[error("Caller {} is not the registry owner", hex::encode(.0))]
    NotOwner(Address),

    /// The supplied configuration is invalid.
    #[error("Invalid registry configuration: {0}")]
    InvalidConfig(String),
}
