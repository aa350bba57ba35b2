//! # Static Root Oracle
//!
//! Fixed domain-to-root table for tooling and tests.

use crate::ports::outbound::StateRootOracle;
use shared_types::{Domain, Hash};
use std::collections::HashMap;

/// Immutable trusted-root table.
#[derive(Default, Clone, Debug)]
pub struct StaticRoots {
    roots: HashMap<Domain, Hash>,
}

impl StaticRoots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, domain: Domain, root: Hash) -> Self {
        self.roots.insert(domain, root);
        self
    }
}

impl StateRootOracle for StaticRoots {
    fn root_of(&self, domain: Domain) -> Option<Hash> {
        self.roots.get(&domain).copied()
    }
}
