//! Operator names and schema prefixes as borrowed, const-parsed views.

use crate::allowlist::{find_byte, find_seq};

/// Namespace separator inside a qualified operator name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// `namespace::name[.overload]` split into base name and overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorNameView<'a> {
    /// `namespace::name`, everything before the first `.`.
    pub name: &'a str,
    /// Text after the first `.`; empty when there is no overload.
    pub overload_name: &'a str,
}

impl<'a> OperatorNameView<'a> {
    pub const fn parse(full_name: &'a str) -> Self {
        match find_byte(full_name.as_bytes(), 0, b'.') {
            Some(dot) => {
                let (name, rest) = split_str_at(full_name, dot);
                let (_, overload_name) = split_str_at(rest, 1);
                Self {
                    name,
                    overload_name,
                }
            }
            None => Self {
                name: full_name,
                overload_name: "",
            },
        }
    }
}

/// True when `name` contains the `::` namespace separator.
pub const fn has_namespace(name: &str) -> bool {
    find_seq(name.as_bytes(), NAMESPACE_SEPARATOR.as_bytes()).is_some()
}

/// Operator-name field of a schema: everything before the first `(`, or the
/// whole schema when it has no argument list.
pub const fn schema_operator_name(schema: &str) -> &str {
    match find_byte(schema.as_bytes(), 0, b'(') {
        Some(paren) => split_str_at(schema, paren).0,
        None => schema,
    }
}

/// `str::split_at` for const callers. `mid` always sits on an ASCII delimiter,
/// so both halves are valid UTF-8; the fallback keeps the whole string.
const fn split_str_at(s: &str, mid: usize) -> (&str, &str) {
    let (head, tail) = s.as_bytes().split_at(mid);
    match (core::str::from_utf8(head), core::str::from_utf8(tail)) {
        (Ok(head), Ok(tail)) => (head, tail),
        _ => (s, ""),
    }
}
