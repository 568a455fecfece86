use serde::Serialize;

use opgate_core::error::{OpgateError, Result};
use opgate_core::BackendProfile;

use crate::policy::{Decision, Reason, SelectionPolicy};

/// Selection a report was produced with.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionSummary {
    pub operator_allowlist: Option<String>,
    pub force_schema_registration: bool,
    pub backend_profile: BackendProfile,
}

/// Decisions for a whole manifest plus counts.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub selection: SelectionSummary,
    pub included: usize,
    pub excluded: usize,
    pub unresolved: usize,
    pub decisions: Vec<Decision>,
}

impl Report {
    pub fn new(policy: &SelectionPolicy, decisions: Vec<Decision>) -> Self {
        let included = decisions.iter().filter(|d| d.included).count();
        let unresolved = decisions
            .iter()
            .filter(|d| d.reason == Reason::Unresolved)
            .count();
        Self {
            selection: SelectionSummary {
                operator_allowlist: policy.allowlist().map(str::to_string),
                force_schema_registration: policy.force_schema_registration(),
                backend_profile: policy.backend_profile(),
            },
            included,
            excluded: decisions.len() - included,
            unresolved,
            decisions,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut s = serde_json::to_string_pretty(self)
            .map_err(|e| OpgateError::Internal(format!("serialize report failed: {e}")))?;
        s.push('\n');
        Ok(s)
    }
}
