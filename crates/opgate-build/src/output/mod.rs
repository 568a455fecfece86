//! Build-step outputs: JSON report, env/cargo config, generated Rust source.

pub mod codegen;
pub mod env;
pub mod report;

use std::fs;
use std::io::Write;
use std::path::Path;

use opgate_core::error::{OpgateError, Result};

pub use codegen::render_rust;
pub use env::{render_env, EnvFormat};
pub use report::Report;

/// Write `contents` to `out`, or to stdout when no path is given.
pub fn write_output(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => fs::write(path, contents)
            .map_err(|e| OpgateError::Io(format!("write {} failed: {e}", path.display()))),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| OpgateError::Io(format!("write stdout failed: {e}")))
        }
    }
}
