//! Top-level facade crate for opgate.
//!
//! Re-exports the const admission checks and the build step so users can depend
//! on a single crate.

pub use opgate_core::{select, select_backend, select_schema};

pub mod core {
    pub use opgate_core::*;
}

pub mod build {
    pub use opgate_build::*;
}
