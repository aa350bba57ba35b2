//! # Registry Configuration
//!
//! Serde-friendly bootstrap configuration. Addresses are hex strings with
//! an optional `0x` prefix.

use crate::adapters::memory::InMemorySetStore;
use crate::domain::errors::RegistryError;
use crate::ports::inbound::ValidatorRegistryApi;
use crate::service::RegistryService;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Domain};

/// One origin domain's initial validator set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DomainSetConfig {
    pub domain: Domain,
    pub threshold: u8,
    /// 20-byte addresses as hex strings, in commitment order.
    pub validators: Vec<String>,
}

/// Full registry bootstrap configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// 20-byte owner address as a hex string.
    pub owner: String,
    #[serde(default)]
    pub domains: Vec<DomainSetConfig>,
}

impl RegistryConfig {
    /// Build an in-memory registry from this configuration.
    pub fn build(&self) -> Result<RegistryService<InMemorySetStore>, RegistryError> {
        let owner = parse_address(&self.owner)?;
        let service = RegistryService::new(InMemorySetStore::new(), owner);
        for entry in &self.domains {
            let validators = entry
                .validators
                .iter()
                .map(|v| parse_address(v))
                .collect::<Result<Vec<_>, _>>()?;
            service.enroll_domain(owner, entry.domain)?;
            service.add_validators(owner, entry.domain, &validators, entry.threshold)?;
        }
        Ok(service)
    }
}

fn parse_address(s: &str) -> Result<Address, RegistryError> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(stripped)
        .map_err(|e| RegistryError::InvalidConfig(format!("bad hex address '{s}': {e}")))?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| RegistryError::InvalidConfig(format!("address '{s}' is not 20 bytes")))
}
