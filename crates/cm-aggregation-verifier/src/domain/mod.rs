//! Domain layer: metadata codec and optimistic-flow errors.

pub mod errors;
pub mod metadata;
