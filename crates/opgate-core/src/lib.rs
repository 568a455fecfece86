//! opgate core: compile-time operator and backend admission for selective builds.
//!
//! Every check in this crate is a `const fn` over borrowed text. Registration
//! call sites evaluate them inside `const { }` conditions (see [`select!`]) so a
//! rejected operator's registration, and everything only it references, never
//! reaches the linker.
//!
//! # Build-time configuration
//! - `OPGATE_OPERATOR_ALLOWLIST` (env, optional): `;`-joined base operator
//!   names, e.g. `aten::add;aten::sub`. Unset means every operator is admitted.
//! - feature `force-schema-registration`: admit every schema.
//! - feature `constrained-backends` (alias `mobile`): only the constrained
//!   backend table is admitted.
//!
//! # Defensive guarantees
//! `unwrap`, `expect` and `panic!` are compile-denied here. The only abort is the
//! namespace assertion in [`is_operator_admitted`], which fires at compile time
//! when evaluated in const context.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod admission;
pub mod allowlist;
pub mod backend;
pub mod error;
pub mod name;

mod macros;

pub use admission::{
    is_backend_admitted, is_operator_admitted, is_schema_admitted, Selection,
    FORCE_SCHEMA_REGISTRATION, OPERATOR_ALLOWLIST, OPERATOR_ALLOWLIST_ENV,
};
pub use allowlist::{contains, DELIMITER};
pub use backend::{BackendProfile, DispatchKey};
pub use name::{schema_operator_name, OperatorNameView};

/// Shared result type.
pub use error::{OpgateError, Result};
