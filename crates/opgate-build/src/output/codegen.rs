//! Rust source with one `const` decision per registration.
//!
//! Meant for `include!` from a build script's `OUT_DIR`, so registration code
//! can branch on plain `const bool`s.

use std::fmt::{self, Write};

use crate::policy::{Decision, SelectionPolicy};

const HEADER: &str = "// @generated by opgate codegen. Do not edit.\n";

pub fn render_rust(policy: &SelectionPolicy, decisions: &[Decision]) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_rust(&mut out, policy, decisions);
    out
}

fn write_rust(out: &mut String, policy: &SelectionPolicy, decisions: &[Decision]) -> fmt::Result {
    out.push_str(HEADER);
    writeln!(out)?;
    writeln!(
        out,
        "pub const OPERATOR_ALLOWLIST: Option<&str> = {};",
        option_literal(policy.allowlist())
    )?;
    writeln!(
        out,
        "pub const FORCE_SCHEMA_REGISTRATION: bool = {};",
        policy.force_schema_registration()
    )?;
    writeln!(
        out,
        "pub const BACKEND_PROFILE: &str = {:?};",
        policy.backend_profile().as_str()
    )?;
    writeln!(out)?;
    writeln!(out, "/// (schema, dispatch key, included)")?;
    writeln!(out, "pub const REGISTRATIONS: &[(&str, Option<&str>, bool)] = &[")?;
    for d in decisions {
        writeln!(
            out,
            "    ({:?}, {}, {}),",
            d.schema,
            option_literal(d.dispatch_key.as_deref()),
            d.included
        )?;
    }
    writeln!(out, "];")
}

// `{:?}` on str yields a valid Rust string literal
fn option_literal(v: Option<&str>) -> String {
    match v {
        Some(s) => format!("Some({s:?})"),
        None => "None".to_string(),
    }
}
