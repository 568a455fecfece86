//! End-to-end decisions over the fixture config and manifest.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pretty_assertions::assert_eq;

use opgate_build::manifest::Registration;
use opgate_build::output::{render_env, render_rust, EnvFormat};
use opgate_build::policy::{Reason, SelectionPolicy};
use opgate_build::{build_report, config, manifest};
use opgate_core::{BackendProfile, DispatchKey, Selection};

fn fixture_report() -> opgate_build::output::Report {
    let cfg = config::load_from_file("tests/fixtures/selection.yaml").unwrap();
    let m = manifest::load_from_file("tests/fixtures/registrations.yaml").unwrap();
    build_report(&SelectionPolicy::from_config(&cfg), &m)
}

#[test]
fn fixture_decisions() {
    let report = fixture_report();
    let got: Vec<(&str, Option<&str>, bool, Reason)> = report
        .decisions
        .iter()
        .map(|d| (d.operator.as_str(), d.dispatch_key.as_deref(), d.included, d.reason))
        .collect();

    assert_eq!(
        got,
        vec![
            ("aten::add", Some("CPU"), true, Reason::Listed),
            ("aten::add", Some("CUDA"), false, Reason::BackendExcluded),
            ("aten::relu", None, true, Reason::Listed),
            ("aten::mul", Some("CPU"), false, Reason::NotListed),
            ("aten::add", Some("Quantum"), true, Reason::Unresolved),
            ("legacy_op", Some("CPU"), true, Reason::Unresolved),
        ]
    );
    assert_eq!(report.included, 4);
    assert_eq!(report.excluded, 2);
    assert_eq!(report.unresolved, 2);
    assert_eq!(
        report.selection.operator_allowlist.as_deref(),
        Some("aten::add;aten::relu")
    );
}

#[test]
fn report_json_shape() {
    let json: serde_json::Value = serde_json::from_str(&fixture_report().to_json().unwrap()).unwrap();
    assert_eq!(json["selection"]["backend_profile"], "constrained");
    assert_eq!(json["included"], 4);
    assert_eq!(json["decisions"][1]["reason"], "backend_excluded");
    assert_eq!(json["decisions"][2]["dispatch_key"], serde_json::Value::Null);
}

#[test]
fn policy_agrees_with_core_selection() {
    let ops = vec!["aten::add".to_string(), "aten::sub".to_string()];
    let policy = SelectionPolicy::new(Some(ops.as_slice()), false, BackendProfile::Constrained);
    let core = Selection {
        operator_allowlist: Some("aten::add;aten::sub"),
        force_schema_registration: false,
        backend_profile: BackendProfile::Constrained,
    };

    let schemas = [
        "aten::add.Tensor(Tensor self, Tensor other) -> Tensor",
        "aten::sub(Tensor self, Tensor other) -> Tensor",
        "aten::mul.Scalar(Tensor self, Scalar other) -> Tensor",
        "aten::addmm(Tensor self, Tensor mat1, Tensor mat2) -> Tensor",
    ];
    for schema in schemas {
        for key in DispatchKey::ALL {
            let reg = Registration {
                schema: schema.to_string(),
                dispatch_key: Some(key.as_str().to_string()),
            };
            let expected = core.admits_schema(schema) && core.admits_backend(key);
            assert_eq!(policy.evaluate(&reg).included, expected, "{schema} / {key}");
        }
    }
}

#[test]
fn env_and_codegen_from_fixture() {
    let cfg = config::load_from_file("tests/fixtures/selection.yaml").unwrap();
    let policy = SelectionPolicy::from_config(&cfg);

    let rendered = render_env(&policy, EnvFormat::CargoConfig).unwrap();
    assert!(rendered.starts_with("# cargo build --features opgate-core/constrained-backends\n"));
    let table: toml::Table = rendered.parse().unwrap();
    assert_eq!(
        table["env"]["OPGATE_OPERATOR_ALLOWLIST"].as_str(),
        Some("aten::add;aten::relu")
    );

    let report = build_report(&policy, &manifest::load_from_file("tests/fixtures/registrations.yaml").unwrap());
    assert_eq!(report.selection.operator_allowlist.as_deref(), policy.allowlist());
    let src = render_rust(&policy, &report.decisions);
    assert_eq!(src.matches(", true),").count(), 4);
    assert_eq!(src.matches(", false),").count(), 2);
}
