//! Selection config loader (strict parsing).

pub mod schema;

use std::fs;

use opgate_core::error::{OpgateError, Result};

pub use schema::SelectionConfig;

pub fn load_from_file(path: &str) -> Result<SelectionConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| OpgateError::Io(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SelectionConfig> {
    let cfg: SelectionConfig = serde_yaml::from_str(s)
        .map_err(|e| OpgateError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
