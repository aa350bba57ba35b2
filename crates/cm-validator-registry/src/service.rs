//! # Registry Service
//!
//! Owner-gated mutations over a [`SetStore`]. Every mutation recomputes the
//! set commitment and publishes the new set in a single `store` call, so
//! readers never observe a set whose cached commitment is stale.

use crate::domain::entities::ValidatorSet;
use crate::domain::errors::RegistryError;
use crate::ports::inbound::ValidatorRegistryApi;
use crate::ports::outbound::SetStore;
use parking_lot::{Mutex, RwLock};
use shared_types::{Address, Domain, Hash, ZERO_ADDRESS};
use tracing::{debug, info, warn};

/// The registry service.
///
/// Generic over the storage adapter so tests can swap in alternatives.
pub struct RegistryService<S: SetStore> {
    store: S,
    owner: RwLock<Address>,
    /// Serializes read-modify-write mutation sequences. Readers go straight
    /// to the store and are never blocked by this lock.
    mutation: Mutex<()>,
}

impl<S: SetStore> RegistryService<S> {
    pub fn new(store: S, owner: Address) -> Self {
        Self {
            store,
            owner: RwLock::new(owner),
            mutation: Mutex::new(()),
        }
    }

    pub fn owner(&self) -> Address {
        *self.owner.read()
    }

    /// Direct access to the backing store (commitment oracles borrow this).
    pub fn store(&self) -> &S {
        &self.store
    }

    fn require_owner(&self, caller: Address) -> Result<(), RegistryError> {
        if caller != *self.owner.read() {
            warn!(caller = %hex::encode(caller), "Rejected mutation from non-owner");
            return Err(RegistryError::NotOwner(caller));
        }
        Ok(())
    }

    fn load_enrolled(&self, domain: Domain) -> Result<ValidatorSet, RegistryError> {
        self.store
            .load(domain)
            .ok_or(RegistryError::UnknownDomain(domain))
    }

    /// Admit one validator into `set`, without publishing.
    fn admit(set: &mut ValidatorSet, validator: Address) -> Result<(), RegistryError> {
        if validator == ZERO_ADDRESS {
            return Err(RegistryError::ZeroAddress);
        }
        if set.contains(&validator) {
            return Err(RegistryError::AlreadyMember(validator));
        }
        set.members.push(validator);
        Ok(())
    }

    /// Recompute the commitment and publish the set.
    fn publish(&self, domain: Domain, mut set: ValidatorSet) -> Hash {
        set.recompute_commitment();
        let commitment = set.commitment;
        self.store.store(domain, set);
        commitment
    }
}

impl<S: SetStore> ValidatorRegistryApi for RegistryService<S> {
    fn enroll_domain(&self, caller: Address, domain: Domain) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        let _guard = self.mutation.lock();
        if self.store.load(domain).is_some() {
            return Err(RegistryError::AlreadyEnrolled(domain));
        }
        self.store.store(domain, ValidatorSet::empty());
        info!(domain, "Enrolled origin domain");
        Ok(())
    }

    fn add_validator(
        &self,
        caller: Address,
        domain: Domain,
        validator: Address,
    ) -> Result<Hash, RegistryError> {
        self.require_owner(caller)?;
        let _guard = self.mutation.lock();
        let mut set = self.load_enrolled(domain)?;
        Self::admit(&mut set, validator)?;
        let commitment = self.publish(domain, set);
        info!(
            domain,
            validator = %hex::encode(validator),
            commitment = %hex::encode(commitment),
            "Added validator"
        );
        Ok(commitment)
    }

    fn add_validators(
        &self,
        caller: Address,
        domain: Domain,
        validators: &[Address],
        threshold: u8,
    ) -> Result<Hash, RegistryError> {
        self.require_owner(caller)?;
        let _guard = self.mutation.lock();
        let mut set = self.load_enrolled(domain)?;
        for validator in validators {
            Self::admit(&mut set, *validator)?;
        }
        if threshold == 0 || threshold as usize > set.len() {
            return Err(RegistryError::OutOfRange {
                threshold,
                members: set.len(),
            });
        }
        set.threshold = threshold;
        let commitment = self.publish(domain, set);
        info!(
            domain,
            added = validators.len(),
            threshold,
            commitment = %hex::encode(commitment),
            "Added validators and set threshold"
        );
        Ok(commitment)
    }

    fn remove_validator(
        &self,
        caller: Address,
        domain: Domain,
        validator: Address,
    ) -> Result<Hash, RegistryError> {
        self.require_owner(caller)?;
        let _guard = self.mutation.lock();
        let mut set = self.load_enrolled(domain)?;
        let position = set
            .members
            .iter()
            .position(|m| *m == validator)
            .ok_or(RegistryError::NotMember(validator))?;
        let remaining = set.len() - 1;
        if remaining < set.threshold as usize {
            return Err(RegistryError::ThresholdViolation {
                remaining,
                threshold: set.threshold,
            });
        }
        set.members.remove(position);
        let commitment = self.publish(domain, set);
        info!(
            domain,
            validator = %hex::encode(validator),
            commitment = %hex::encode(commitment),
            "Removed validator"
        );
        Ok(commitment)
    }

    fn set_threshold(
        &self,
        caller: Address,
        domain: Domain,
        threshold: u8,
    ) -> Result<Hash, RegistryError> {
        self.require_owner(caller)?;
        let _guard = self.mutation.lock();
        let mut set = self.load_enrolled(domain)?;
        if threshold == 0 || threshold as usize > set.len() {
            return Err(RegistryError::OutOfRange {
                threshold,
                members: set.len(),
            });
        }
        set.threshold = threshold;
        let commitment = self.publish(domain, set);
        info!(domain, threshold, "Set quorum threshold");
        Ok(commitment)
    }

    fn transfer_ownership(
        &self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        if new_owner == ZERO_ADDRESS {
            return Err(RegistryError::ZeroAddress);
        }
        *self.owner.write() = new_owner;
        info!(new_owner = %hex::encode(new_owner), "Transferred registry ownership");
        Ok(())
    }

    fn is_validator(&self, domain: Domain, validator: &Address) -> bool {
        self.store
            .load(domain)
            .map(|set| set.contains(validator))
            .unwrap_or(false)
    }

    fn members_of(&self, domain: Domain) -> Option<Vec<Address>> {
        self.store.load(domain).map(|set| set.members)
    }

    fn threshold_of(&self, domain: Domain) -> Option<u8> {
        self.store.load(domain).map(|set| set.threshold)
    }

    fn commitment_of(&self, domain: Domain) -> Option<Hash> {
        let commitment = self.store.load(domain).map(|set| set.commitment);
        debug!(domain, found = commitment.is_some(), "Commitment lookup");
        commitment
    }

    fn validators_and_threshold(&self, domain: Domain) -> Option<(Vec<Address>, u8)> {
        self.store
            .load(domain)
            .map(|set| (set.members, set.threshold))
    }

    fn set_of(&self, domain: Domain) -> Option<ValidatorSet> {
        self.store.load(domain)
    }
}
