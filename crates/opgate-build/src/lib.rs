//! opgate build step.
//!
//! Resolves selective-build decisions before the operator library is compiled:
//! loads a selection config and a registration manifest, decides every
//! registration with the core's const checks, and renders the results as a
//! JSON report, build environment, or generated Rust constants. Consumed by the
//! `opgate` binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod manifest;
pub mod output;
pub mod policy;

use tracing::info;

use crate::manifest::Manifest;
use crate::output::Report;
use crate::policy::SelectionPolicy;

/// Decide every registration in `manifest` under `policy`.
pub fn build_report(policy: &SelectionPolicy, manifest: &Manifest) -> Report {
    let decisions = policy.evaluate_all(&manifest.registrations);
    let report = Report::new(policy, decisions);
    info!(
        profile = policy.backend_profile().as_str(),
        forced = policy.force_schema_registration(),
        included = report.included,
        excluded = report.excluded,
        unresolved = report.unresolved,
        "selection evaluated"
    );
    report
}
