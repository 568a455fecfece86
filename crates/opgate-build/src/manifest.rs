//! Registration manifest: the schema/dispatch-key pairs a library registers.
//!
//! ```yaml
//! registrations:
//!   - schema: "aten::add.Tensor(Tensor self, Tensor other) -> Tensor"
//!     dispatch_key: CPU
//!   - schema: "aten::relu(Tensor self) -> Tensor"
//! ```
//!
//! Dispatch keys stay strings here; unknown keys are resolved (fail-open) by
//! the policy, not rejected at load time.

use std::fs;

use serde::Deserialize;

use opgate_core::error::{OpgateError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub registrations: Vec<Registration>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registration {
    pub schema: String,
    #[serde(default)]
    pub dispatch_key: Option<String>,
}

impl Manifest {
    pub fn validate(&self) -> Result<()> {
        if self.registrations.is_empty() {
            return Err(OpgateError::BadConfig(
                "registrations must not be empty".into(),
            ));
        }
        if let Some(r) = self.registrations.iter().find(|r| r.schema.trim().is_empty()) {
            return Err(OpgateError::BadConfig(format!(
                "empty schema in registration (dispatch_key {:?})",
                r.dispatch_key
            )));
        }
        Ok(())
    }
}

pub fn load_from_file(path: &str) -> Result<Manifest> {
    let s = fs::read_to_string(path)
        .map_err(|e| OpgateError::Io(format!("read manifest {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<Manifest> {
    let m: Manifest = serde_yaml::from_str(s)
        .map_err(|e| OpgateError::BadConfig(format!("invalid manifest yaml: {e}")))?;
    m.validate()?;
    Ok(m)
}
