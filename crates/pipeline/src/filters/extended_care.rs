//! Early drop-off and late pickup, both inferred from schedule text.

use crate::inference::InferencePolicy;
use crate::traits::Filter;
use catalog::Entry;

/// Keeps camps that offer early drop-off under the given policy.
pub struct EarlyDropoffFilter {
    policy: InferencePolicy,
}

impl EarlyDropoffFilter {
    pub fn new(policy: InferencePolicy) -> Self {
        Self { policy }
    }
}

impl Filter for EarlyDropoffFilter {
    fn name(&self) -> &str {
        "EarlyDropoffFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.policy.early_dropoff(&entry.schedule)
    }
}

/// Keeps camps that offer late pickup.
///
/// Only meaningful for policies that infer late pickup; under any other
/// policy nothing matches, which is why the pipeline never adds it there.
pub struct LatePickupFilter {
    policy: InferencePolicy,
}

impl LatePickupFilter {
    pub fn new(policy: InferencePolicy) -> Self {
        Self { policy }
    }
}

impl Filter for LatePickupFilter {
    fn name(&self) -> &str {
        "LatePickupFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.policy.late_pickup(&entry.schedule).unwrap_or(false)
    }
}
