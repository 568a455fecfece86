use serde::Serialize;

/// Why a registration was included or excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// No operator allowlist configured.
    Unrestricted,
    /// Base operator name is on the allowlist.
    Listed,
    /// Forced schema registration is on.
    Forced,
    /// Base operator name is not on the allowlist.
    NotListed,
    /// Operator admitted but the dispatch key is outside the backend profile.
    BackendExcluded,
    /// Operator name or dispatch key could not be resolved; kept in the build.
    Unresolved,
}

impl Reason {
    pub fn includes(self) -> bool {
        !matches!(self, Reason::NotListed | Reason::BackendExcluded)
    }
}

/// Outcome for one registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub schema: String,
    /// Base operator name (`ns::name`), overload stripped.
    pub operator: String,
    pub dispatch_key: Option<String>,
    pub included: bool,
    pub reason: Reason,
}
