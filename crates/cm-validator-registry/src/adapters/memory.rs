//! # In-Memory Set Store
//!
//! `RwLock<HashMap>` backed storage. The registry service serializes
//! mutations; this adapter only has to make each `store` atomic with
//! respect to readers, which the write lock gives us.

use crate::domain::entities::ValidatorSet;
use crate::ports::outbound::SetStore;
use parking_lot::RwLock;
use shared_types::Domain;
use std::collections::HashMap;

/// Thread-safe in-memory validator set storage.
#[derive(Default)]
pub struct InMemorySetStore {
    sets: RwLock<HashMap<Domain, ValidatorSet>>,
}

impl InMemorySetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SetStore for InMemorySetStore {
    fn load(&self, domain: Domain) -> Option<ValidatorSet> {
        self.sets.read().get(&domain).cloned()
    }

    fn store(&self, domain: Domain, set: ValidatorSet) {
        self.sets.write().insert(domain, set);
    }

    fn domains(&self) -> Vec<Domain> {
        self.sets.read().keys().copied().collect()
    }
}
