//! Adapter implementations of the state-root oracle.

pub mod statics;

pub use statics::StaticRoots;
