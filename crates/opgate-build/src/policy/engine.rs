use opgate_core::{
    schema_operator_name, BackendProfile, DispatchKey, OperatorNameView, Selection,
};
use tracing::{debug, warn};

use crate::config::SelectionConfig;
use crate::manifest::Registration;

use super::decision::{Decision, Reason};

/// Owned selective-build configuration.
/// Construct once from the config, then evaluate any number of registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    allowlist: Option<String>,
    force_schema_registration: bool,
    backend_profile: BackendProfile,
}

impl SelectionPolicy {
    pub fn new(
        operators: Option<&[String]>,
        force_schema_registration: bool,
        backend_profile: BackendProfile,
    ) -> Self {
        let delimiter = char::from(opgate_core::DELIMITER).to_string();
        Self {
            allowlist: operators.map(|ops| ops.join(delimiter.as_str())),
            force_schema_registration,
            backend_profile,
        }
    }

    pub fn from_config(cfg: &SelectionConfig) -> Self {
        Self::new(
            cfg.operators.as_deref(),
            cfg.force_schema_registration,
            cfg.backend_profile,
        )
    }

    /// `;`-joined allowlist, the value for `OPGATE_OPERATOR_ALLOWLIST`.
    pub fn allowlist(&self) -> Option<&str> {
        self.allowlist.as_deref()
    }

    pub fn force_schema_registration(&self) -> bool {
        self.force_schema_registration
    }

    pub fn backend_profile(&self) -> BackendProfile {
        self.backend_profile
    }

    /// Borrowed view for the core's const checks.
    pub fn selection(&self) -> Selection<'_> {
        Selection {
            operator_allowlist: self.allowlist.as_deref(),
            force_schema_registration: self.force_schema_registration,
            backend_profile: self.backend_profile,
        }
    }

    /// Cargo features of `opgate-core` that reproduce this policy.
    pub fn cargo_features(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.force_schema_registration {
            out.push("opgate-core/force-schema-registration");
        }
        if self.backend_profile == BackendProfile::Constrained {
            out.push("opgate-core/constrained-backends");
        }
        out
    }

    /// Decide one registration.
    ///
    /// Anything the policy cannot resolve (a name without `::`, an unknown
    /// dispatch key) is included with [`Reason::Unresolved`]. A registration
    /// without a dispatch key is judged by its schema alone.
    pub fn evaluate(&self, reg: &Registration) -> Decision {
        let operator = OperatorNameView::parse(schema_operator_name(&reg.schema))
            .name
            .to_string();
        let reason = self.reason(&operator, reg);
        let decision = Decision {
            schema: reg.schema.clone(),
            operator,
            dispatch_key: reg.dispatch_key.clone(),
            included: reason.includes(),
            reason,
        };
        debug!(
            operator = %decision.operator,
            dispatch_key = ?decision.dispatch_key,
            included = decision.included,
            reason = ?decision.reason,
            "registration decided"
        );
        decision
    }

    pub fn evaluate_all<'a, I>(&self, regs: I) -> Vec<Decision>
    where
        I: IntoIterator<Item = &'a Registration>,
    {
        regs.into_iter().map(|r| self.evaluate(r)).collect()
    }

    fn reason(&self, operator: &str, reg: &Registration) -> Reason {
        let sel = self.selection();

        let schema_reason = match sel.checked_admits_schema(&reg.schema) {
            None => {
                warn!(schema = %reg.schema, "operator name has no namespace; keeping registration");
                return Reason::Unresolved;
            }
            Some(false) => return Reason::NotListed,
            Some(true) if self.force_schema_registration => Reason::Forced,
            Some(true) if self.allowlist.is_none() => Reason::Unrestricted,
            Some(true) => Reason::Listed,
        };

        let Some(key) = reg.dispatch_key.as_deref() else {
            return schema_reason;
        };
        match key.parse::<DispatchKey>() {
            Ok(k) if sel.admits_backend(k) => schema_reason,
            Ok(_) => Reason::BackendExcluded,
            Err(_) => {
                warn!(%operator, dispatch_key = %key, "unknown dispatch key; keeping registration");
                Reason::Unresolved
            }
        }
    }
}
