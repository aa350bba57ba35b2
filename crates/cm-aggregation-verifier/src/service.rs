//! # Aggregation Services
//!
//! AND and M-of-K composition over a fixed roster of sub-verifiers. The
//! metadata table must list the roster's modules in roster order; each
//! entry either carries a payload range or a zero range meaning "not
//! configured for this delivery".

use crate::domain::metadata::AggregationMetadata;
use shared_types::{MessageVerifier, ModuleId, ReadError, VerifierError};
use std::sync::Arc;
use tracing::{debug, warn};

type Roster = Vec<(ModuleId, Arc<dyn MessageVerifier>)>;

/// Logical AND: every configured sub-module must verify.
pub struct AggregationVerifier {
    modules: Roster,
}

/// M-of-K: at least `threshold` configured sub-modules must verify.
///
/// Deliberately a distinct type from [`AggregationVerifier`] rather than a
/// threshold parameter on it; the two have different failure semantics and
/// callers should not be able to drift between them by misconfiguration.
pub struct ThresholdAggregationVerifier {
    modules: Roster,
    threshold: usize,
}

impl AggregationVerifier {
    pub fn new(modules: Roster) -> Self {
        Self { modules }
    }
}

impl ThresholdAggregationVerifier {
    pub fn new(modules: Roster, threshold: usize) -> Self {
        Self { modules, threshold }
    }
}

impl MessageVerifier for AggregationVerifier {
    fn verify(&self, metadata: &[u8], message: &[u8]) -> Result<bool, VerifierError> {
        let (successes, configured) = run_submodules(&self.modules, metadata, message)?;
        let verified = successes == configured;
        if !verified {
            warn!(successes, configured, "Aggregation quorum incomplete");
        }
        Ok(verified)
    }
}

impl MessageVerifier for ThresholdAggregationVerifier {
    fn verify(&self, metadata: &[u8], message: &[u8]) -> Result<bool, VerifierError> {
        let (successes, configured) = run_submodules(&self.modules, metadata, message)?;
        if configured < self.threshold {
            return Err(VerifierError::MalformedMetadata(ReadError::InvalidField {
                offset: 0,
                reason: "fewer configured modules than the aggregation threshold",
            }));
        }
        let verified = successes >= self.threshold;
        if !verified {
            warn!(
                successes,
                threshold = self.threshold,
                "Aggregation threshold not met"
            );
        }
        Ok(verified)
    }
}

/// Run every configured sub-module, returning `(successes, configured)`.
///
/// Structural failures abort the whole call: an `Err` from a sub-module is
/// never counted as a mere failed proof.
fn run_submodules(
    modules: &Roster,
    metadata: &[u8],
    message: &[u8],
) -> Result<(usize, usize), VerifierError> {
    let table = AggregationMetadata::decode(metadata, modules.len())?;
    if table.configured_count() == 0 {
        return Err(VerifierError::MalformedMetadata(ReadError::InvalidField {
            offset: 0,
            reason: "aggregation metadata configures no modules",
        }));
    }

    let mut successes = 0usize;
    let mut configured = 0usize;
    for ((expected_id, verifier), entry) in modules.iter().zip(table.entries()) {
        if entry.module != *expected_id {
            return Err(VerifierError::UnknownModule(entry.module));
        }
        if !entry.is_configured() {
            continue;
        }
        configured += 1;
        let verified = verifier.verify(table.payload(entry), message)?;
        debug!(
            module = %hex::encode(entry.module),
            verified,
            "Sub-module verdict"
        );
        if verified {
            successes += 1;
        }
    }
    Ok((successes, configured))
}
