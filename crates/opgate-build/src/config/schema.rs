use std::collections::BTreeSet;

use serde::Deserialize;

use opgate_core::error::{OpgateError, Result};
use opgate_core::name::has_namespace;
use opgate_core::{BackendProfile, DELIMITER};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionConfig {
    pub version: u32,

    /// Base operator names. Absent means every operator is admitted;
    /// an empty list admits none.
    #[serde(default)]
    pub operators: Option<Vec<String>>,

    #[serde(default)]
    pub force_schema_registration: bool,

    #[serde(default)]
    pub backend_profile: BackendProfile,
}

impl SelectionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(OpgateError::UnsupportedVersion(self.version));
        }

        let Some(operators) = &self.operators else {
            return Ok(());
        };

        let mut seen = BTreeSet::new();
        for op in operators {
            validate_operator(op)?;
            if !seen.insert(op.as_str()) {
                return Err(OpgateError::BadConfig(format!("duplicate operator: {op}")));
            }
        }
        Ok(())
    }
}

fn validate_operator(op: &str) -> Result<()> {
    if !has_namespace(op) {
        return Err(OpgateError::InvalidOperatorName(op.to_string()));
    }
    if op.as_bytes().contains(&DELIMITER) {
        return Err(OpgateError::BadConfig(format!(
            "operator {op} contains the reserved ';' delimiter"
        )));
    }
    // the allowlist holds base names; overloads are stripped before lookup
    if op.contains('.') {
        return Err(OpgateError::BadConfig(format!(
            "operator {op} names an overload; list the base name only"
        )));
    }
    Ok(())
}
