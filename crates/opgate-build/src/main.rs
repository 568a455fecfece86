//! opgate: selective-build decisions for operator registration.
//!
//! - `report`: JSON decision per registration
//! - `env`: environment / cargo config that compiles `opgate-core` with the selection
//! - `codegen`: Rust constants, one boolean per registration

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use opgate_build::output::{self, EnvFormat};
use opgate_build::policy::SelectionPolicy;
use opgate_build::{build_report, config, manifest};
use opgate_core::Result;

#[derive(Parser)]
#[command(name = "opgate")]
#[command(about = "Selective operator build decisions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide every registration in a manifest and print a JSON report.
    Report {
        /// Selection config (YAML)
        #[arg(short, long)]
        config: String,

        /// Registration manifest (YAML)
        #[arg(short, long)]
        manifest: String,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Print the build environment for a selection.
    Env {
        #[arg(short, long)]
        config: String,

        #[arg(long, value_enum, default_value_t = EnvFormat::Shell)]
        format: EnvFormat,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Generate Rust constants for every registration in a manifest.
    Codegen {
        #[arg(short, long)]
        config: String,

        #[arg(short, long)]
        manifest: String,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "{e}");
            eprintln!("opgate: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Report {
            config,
            manifest,
            out,
        } => {
            let policy = SelectionPolicy::from_config(&config::load_from_file(&config)?);
            let manifest = manifest::load_from_file(&manifest)?;
            let report = build_report(&policy, &manifest);
            output::write_output(out.as_deref(), &report.to_json()?)
        }
        Commands::Env {
            config,
            format,
            out,
        } => {
            let cfg = config::load_from_file(&config)?;
            let policy = SelectionPolicy::from_config(&cfg);
            output::write_output(out.as_deref(), &output::render_env(&policy, format)?)
        }
        Commands::Codegen {
            config,
            manifest,
            out,
        } => {
            let policy = SelectionPolicy::from_config(&config::load_from_file(&config)?);
            let manifest = manifest::load_from_file(&manifest)?;
            let report = build_report(&policy, &manifest);
            let src = output::render_rust(&policy, &report.decisions);
            output::write_output(out.as_deref(), &src)?;
            if let Some(path) = &out {
                tracing::info!(path = %path.display(), registrations = report.decisions.len(), "wrote generated constants");
            }
            Ok(())
        }
    }
}
