//! CLI command definitions and dispatch for the `charsmith` binary.
//!
//! Uses clap derive macros for argument parsing. Running the binary with no
//! subcommand starts the character wizard straight away.

pub mod check;
pub mod create;
pub mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Create Eliza character files interactively.
#[derive(Parser)]
#[command(name = "charsmith", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed log output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Directory the character file is written to (default: current directory).
    #[arg(long, global = true, env = "CHARSMITH_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the character creation wizard (the default).
    #[command(alias = "new")]
    Create,

    /// Verify that a character file parses and summarize what is still unfilled.
    Check {
        /// Path to a `.character.json` file.
        file: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Tracing filter directives for the requested verbosity.
    pub fn log_directives(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,charsmith=debug,charsmith_core=debug,charsmith_infra=debug",
            _ => "trace",
        }
    }
}
