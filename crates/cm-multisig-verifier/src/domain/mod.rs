//! Domain layer: pure checkpoint, merkle, and metadata logic.

pub mod checkpoint;
pub mod errors;
pub mod merkle;
pub mod metadata;
