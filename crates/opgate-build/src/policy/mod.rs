//! Policy layer: selection config compiled into a decision engine.
//!
//! The engine evaluates through `opgate_core::Selection`, the same const code
//! the compiled library runs, so reported decisions match what the build does.

pub mod decision;
pub mod engine;

pub use decision::{Decision, Reason};
pub use engine::SelectionPolicy;
