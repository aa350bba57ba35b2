//! # Aggregation Verifier
//!
//! Composes independent sub-verifiers over one metadata blob. Three
//! composition rules, each its own type rather than a conditional branch:
//!
//! - [`AggregationVerifier`]: logical AND over every configured sub-module
//! - [`ThresholdAggregationVerifier`]: M-of-K over the same metadata shape
//! - [`OptimisticVerifier`]: provisional acceptance of a primary verifier,
//!   challengeable by a watcher quorum inside a fraud window
//!
//! ## Security Notes
//!
//! - Sub-verifier calls are synchronous and read-only; nothing in this
//!   crate can mutate registry state.
//! - A structural failure in any sub-call aborts the whole aggregation;
//!   only clean `Ok(false)` results count as a failed sub-proof.

pub mod domain;
pub mod optimistic;
pub mod service;

pub use domain::errors::OptimisticError;
pub use domain::metadata::{encode_metadata, AggregationMetadata, ModuleRange, MODULE_ENTRY_LEN};
pub use optimistic::{DeliveryStatus, OptimisticVerifier};
pub use service::{AggregationVerifier, ThresholdAggregationVerifier};
