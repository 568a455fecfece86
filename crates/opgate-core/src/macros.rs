//! Registration gating.
//!
//! Each macro wraps a registration block in an `if const { .. }` condition.
//! The condition is folded during compilation, so a rejected block and every
//! item only it references are left out of the binary. All macros evaluate to
//! `Option<T>` of the block's value: `None` means the block was compiled out.
//!
//! Schema and key arguments must be constant expressions. A call site whose
//! schema is only known at runtime cannot use these macros and stays
//! registered unconditionally.

/// Compile `$body` only if the operator named by `$schema` is admitted.
///
/// ```
/// let registered = opgate_core::select_schema!("aten::add.Tensor(Tensor self, Tensor other) -> Tensor", {
///     "add"
/// });
/// # let _ = registered;
/// ```
#[macro_export]
macro_rules! select_schema {
    ($schema:expr, $body:block) => {
        if const { $crate::is_schema_admitted($schema) } {
            ::core::option::Option::Some($body)
        } else {
            ::core::option::Option::None
        }
    };
}

/// Compile `$body` only if kernels for `$key` are admitted.
#[macro_export]
macro_rules! select_backend {
    ($key:expr, $body:block) => {
        if const { $crate::is_backend_admitted($key) } {
            ::core::option::Option::Some($body)
        } else {
            ::core::option::Option::None
        }
    };
}

/// Compile `$body` only if both the schema's operator and `$key` are admitted.
///
/// ```
/// use opgate_core::{select, DispatchKey};
///
/// let kernel = select!("aten::relu(Tensor self) -> Tensor", DispatchKey::CPU, { 1 });
/// # let _ = kernel;
/// ```
#[macro_export]
macro_rules! select {
    ($schema:expr, $key:expr, $body:block) => {
        if const { $crate::is_schema_admitted($schema) && $crate::is_backend_admitted($key) } {
            ::core::option::Option::Some($body)
        } else {
            ::core::option::Option::None
        }
    };
}
