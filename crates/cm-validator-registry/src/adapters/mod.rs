//! Adapter implementations of the outbound ports.

pub mod memory;

pub use memory::InMemorySetStore;
