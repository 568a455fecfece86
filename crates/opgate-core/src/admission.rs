//! Operator, schema and backend admission.
//!
//! [`Selection`] holds the three build-time parameters and evaluates admission
//! for any of them. [`Selection::BUILD`] is the selection this crate was
//! compiled with; the free functions are shorthands over it.

use crate::allowlist::contains;
use crate::backend::{BackendProfile, DispatchKey};
use crate::name::{has_namespace, schema_operator_name, OperatorNameView};

/// Env var carrying the `;`-joined operator allowlist at compile time.
pub const OPERATOR_ALLOWLIST_ENV: &str = "OPGATE_OPERATOR_ALLOWLIST";

/// Operator allowlist this crate was compiled with. `None` admits everything.
pub const OPERATOR_ALLOWLIST: Option<&str> = option_env!("OPGATE_OPERATOR_ALLOWLIST");

/// Whether this crate was compiled with forced schema registration.
pub const FORCE_SCHEMA_REGISTRATION: bool = cfg!(feature = "force-schema-registration");

/// One selective-build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// `;`-joined base operator names; `None` admits every operator.
    pub operator_allowlist: Option<&'a str>,
    /// Admit every schema regardless of the allowlist.
    pub force_schema_registration: bool,
    pub backend_profile: BackendProfile,
}

impl Selection<'static> {
    /// Selection fixed at compile time for this build.
    pub const BUILD: Selection<'static> = Selection {
        operator_allowlist: OPERATOR_ALLOWLIST,
        force_schema_registration: FORCE_SCHEMA_REGISTRATION,
        backend_profile: BackendProfile::ACTIVE,
    };

    /// Admits every operator, schema and backend.
    pub const UNRESTRICTED: Selection<'static> = Selection {
        operator_allowlist: None,
        force_schema_registration: false,
        backend_profile: BackendProfile::Unrestricted,
    };
}

impl<'a> Selection<'a> {
    /// Whether `qualified_name` (`ns::name[.overload]`) is admitted.
    ///
    /// Overloads are stripped before lookup: listing `aten::add` admits
    /// `aten::add.Tensor` and every other overload.
    ///
    /// # Panics
    /// When `qualified_name` has no `::`. In const context this is a compile
    /// error at the offending registration site.
    pub const fn admits_operator(&self, qualified_name: &str) -> bool {
        assert!(
            has_namespace(qualified_name),
            "operator name must be namespace-qualified (namespace::name)"
        );
        match self.operator_allowlist {
            None => true,
            Some(list) => contains(list, OperatorNameView::parse(qualified_name).name),
        }
    }

    /// Non-panicking [`admits_operator`](Self::admits_operator): `None` when
    /// the name has no namespace and admission cannot be decided.
    pub const fn checked_admits_operator(&self, qualified_name: &str) -> Option<bool> {
        if !has_namespace(qualified_name) {
            return None;
        }
        Some(self.admits_operator(qualified_name))
    }

    /// Whether the operator named by `schema` (text before the first `(`) is
    /// admitted. Forced schema registration admits everything.
    pub const fn admits_schema(&self, schema: &str) -> bool {
        if self.force_schema_registration {
            return true;
        }
        self.admits_operator(schema_operator_name(schema))
    }

    /// Non-panicking [`admits_schema`](Self::admits_schema).
    pub const fn checked_admits_schema(&self, schema: &str) -> Option<bool> {
        if self.force_schema_registration {
            return Some(true);
        }
        self.checked_admits_operator(schema_operator_name(schema))
    }

    pub const fn admits_backend(&self, key: DispatchKey) -> bool {
        self.backend_profile.admits(key)
    }
}

/// Whether `qualified_name` is admitted by this build's allowlist.
///
/// ```
/// const ADD: bool = opgate_core::is_operator_admitted("aten::add.Tensor");
/// # let _ = ADD;
/// ```
pub const fn is_operator_admitted(qualified_name: &str) -> bool {
    Selection::BUILD.admits_operator(qualified_name)
}

/// Whether the operator behind `schema` is admitted by this build.
pub const fn is_schema_admitted(schema: &str) -> bool {
    Selection::BUILD.admits_schema(schema)
}

/// Whether kernels for `key` may be registered in this build.
pub const fn is_backend_admitted(key: DispatchKey) -> bool {
    Selection::BUILD.admits_backend(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD_SUB: Selection<'static> = Selection {
        operator_allowlist: Some("aten::add;aten::sub"),
        force_schema_registration: false,
        backend_profile: BackendProfile::Unrestricted,
    };

    #[test]
    fn overloads_are_stripped() {
        assert!(ADD_SUB.admits_operator("aten::add"));
        assert!(ADD_SUB.admits_operator("aten::add.Tensor"));
        assert!(ADD_SUB.admits_operator("aten::add.out"));
        assert!(!ADD_SUB.admits_operator("aten::mul.Tensor"));
        assert!(!ADD_SUB.admits_operator("aten::addmm"));
    }

    #[test]
    fn no_allowlist_admits_everything() {
        let sel = Selection::UNRESTRICTED;
        assert!(sel.admits_operator("aten::anything.overload"));
        assert!(sel.admits_schema("custom::op(Tensor x) -> Tensor"));
    }

    #[test]
    fn empty_allowlist_admits_nothing_named() {
        let sel = Selection {
            operator_allowlist: Some(""),
            ..Selection::UNRESTRICTED
        };
        assert!(!sel.admits_operator("aten::add"));
    }

    #[test]
    fn schema_prefix_is_used() {
        let add = Selection {
            operator_allowlist: Some("aten::add"),
            ..Selection::UNRESTRICTED
        };
        let sub = Selection {
            operator_allowlist: Some("aten::sub"),
            ..Selection::UNRESTRICTED
        };
        let schema = "aten::add.Tensor(Tensor self, Tensor other) -> Tensor";
        assert!(add.admits_schema(schema));
        assert!(!sub.admits_schema(schema));
    }

    #[test]
    fn schema_without_arguments_is_a_name() {
        assert!(ADD_SUB.admits_schema("aten::sub.Scalar"));
        assert!(!ADD_SUB.admits_schema("aten::mul"));
    }

    #[test]
    fn overload_before_paren_does_not_change_decision() {
        assert_eq!(
            ADD_SUB.admits_schema("aten::add(Tensor, Tensor) -> Tensor"),
            ADD_SUB.admits_schema("aten::add.Tensor(Tensor, Tensor) -> Tensor"),
        );
    }

    #[test]
    fn forced_schema_registration_bypasses_allowlist() {
        let sel = Selection {
            operator_allowlist: Some("aten::add"),
            force_schema_registration: true,
            ..Selection::UNRESTRICTED
        };
        assert!(sel.admits_schema("aten::mul(Tensor self) -> Tensor"));
        // operator checks are not forced
        assert!(!sel.admits_operator("aten::mul"));
    }

    #[test]
    #[should_panic(expected = "namespace-qualified")]
    fn missing_namespace_panics() {
        ADD_SUB.admits_operator("add");
    }

    #[test]
    fn checked_variants_report_unresolved() {
        assert_eq!(ADD_SUB.checked_admits_operator("add"), None);
        assert_eq!(ADD_SUB.checked_admits_schema("add(Tensor) -> Tensor"), None);
        assert_eq!(ADD_SUB.checked_admits_operator("aten::add.Tensor"), Some(true));
        assert_eq!(ADD_SUB.checked_admits_schema("aten::mul(Tensor)"), Some(false));
    }

    #[test]
    fn build_selection_reflects_compile_time_config() {
        assert_eq!(Selection::BUILD.operator_allowlist, OPERATOR_ALLOWLIST);
        assert_eq!(Selection::BUILD.backend_profile, BackendProfile::ACTIVE);
        match OPERATOR_ALLOWLIST {
            None => {
                assert!(is_operator_admitted("aten::add.Tensor"));
                assert!(is_operator_admitted("whatever::op"));
            }
            Some(list) => {
                assert_eq!(
                    is_operator_admitted("aten::add.Tensor"),
                    contains(list, "aten::add")
                );
                assert_eq!(
                    is_operator_admitted("aten::sub"),
                    contains(list, "aten::sub")
                );
            }
        }
        if FORCE_SCHEMA_REGISTRATION {
            assert!(is_schema_admitted("not_listed::op(Tensor) -> Tensor"));
        }
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let schema = "aten::sub.Tensor(Tensor self, Tensor other) -> Tensor";
        let first = ADD_SUB.admits_schema(schema);
        for _ in 0..8 {
            assert_eq!(ADD_SUB.admits_schema(schema), first);
        }
        assert_eq!(is_backend_admitted(DispatchKey::CPU), is_backend_admitted(DispatchKey::CPU));
    }

    const _: () = assert!(ADD_SUB.admits_schema("aten::add.Tensor(Tensor self) -> Tensor"));
    const _: () = assert!(!ADD_SUB.admits_schema("aten::mul.Tensor(Tensor self) -> Tensor"));
}
