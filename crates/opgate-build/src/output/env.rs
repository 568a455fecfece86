//! Build environment for compiling `opgate-core` with a selection.
//!
//! The allowlist reaches the core through `OPGATE_OPERATOR_ALLOWLIST`; the two
//! flags are cargo features. `cargo-config` output belongs in
//! `.cargo/config.toml`, which sets the variable for every crate in the build.
//! Shell output also exports `OPGATE_FEATURES`, meant for
//! `cargo build --features "$OPGATE_FEATURES"`.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use serde::Serialize;

use opgate_core::error::{OpgateError, Result};
use opgate_core::OPERATOR_ALLOWLIST_ENV;

use crate::policy::SelectionPolicy;

/// Env var holding the comma-joined cargo features for the selection.
pub const FEATURES_ENV: &str = "OPGATE_FEATURES";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EnvFormat {
    /// POSIX shell `export` / `unset` lines.
    Shell,
    /// `[env]` table for `.cargo/config.toml`.
    CargoConfig,
}

/// `.cargo/config.toml` subset written by `cargo-config`.
#[derive(Debug, Serialize)]
struct CargoConfig<'a> {
    env: BTreeMap<&'static str, &'a str>,
}

pub fn render_env(policy: &SelectionPolicy, format: EnvFormat) -> Result<String> {
    match format {
        EnvFormat::Shell => {
            let mut out = String::new();
            // writing into a String cannot fail
            let _ = write_shell(&mut out, policy);
            Ok(out)
        }
        EnvFormat::CargoConfig => render_cargo_config(policy),
    }
}

fn write_shell(out: &mut String, policy: &SelectionPolicy) -> fmt::Result {
    match policy.allowlist() {
        Some(list) => writeln!(out, "export {OPERATOR_ALLOWLIST_ENV}={}", shell_quote(list))?,
        None => writeln!(out, "unset {OPERATOR_ALLOWLIST_ENV}")?,
    }
    let features = policy.cargo_features().join(",");
    writeln!(out, "export {FEATURES_ENV}={}", shell_quote(&features))
}

fn render_cargo_config(policy: &SelectionPolicy) -> Result<String> {
    let mut env = BTreeMap::new();
    if let Some(list) = policy.allowlist() {
        env.insert(OPERATOR_ALLOWLIST_ENV, list);
    }
    let table = toml::to_string(&CargoConfig { env })
        .map_err(|e| OpgateError::Internal(format!("serialize cargo config failed: {e}")))?;

    let mut out = build_command_comment(policy);
    if policy.allowlist().is_none() {
        out.push_str(&format!("# {OPERATOR_ALLOWLIST_ENV} unset: every operator admitted\n"));
    }
    out.push_str(&table);
    Ok(out)
}

fn build_command_comment(policy: &SelectionPolicy) -> String {
    let features = policy.cargo_features();
    if features.is_empty() {
        "# cargo build\n".to_string()
    } else {
        format!("# cargo build --features {}\n", features.join(","))
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
