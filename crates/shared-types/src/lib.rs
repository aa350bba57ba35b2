//! # Shared Types Crate
//!
//! This crate contains the domain entities, the interchain message codec,
//! and the `MessageVerifier` trait shared by every verification subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Bounds-Checked Parsing**: Opaque byte buffers are only ever read
//!   through [`ByteReader`], which returns a typed error instead of panicking
//!   on malformed input.
//! - **Return-Value-Only Verification**: [`MessageVerifier`] implementations
//!   must not mutate shared state; they consume bytes and return an outcome.

pub mod entities;
pub mod errors;
pub mod message;
pub mod reader;
pub mod verifier;

pub use entities::*;
pub use errors::{ReadError, VerifierError};
pub use message::Message;
pub use reader::ByteReader;
pub use verifier::MessageVerifier;
