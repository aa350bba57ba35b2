//! Port definitions for quorum verification.

pub mod outbound;

pub use outbound::CommitmentOracle;
