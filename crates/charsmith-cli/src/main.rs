//! charsmith CLI entry point.
//!
//! Binary name: `charsmith`
//!
//! Parses CLI arguments, sets up tracing and configuration, then runs the
//! character wizard or the requested subcommand.

mod cli;

use clap::Parser;
use clap_complete::generate;
use console::style;

use charsmith_infra::config::{load_global_config, resolve_output_dir};
use charsmith_infra::filesystem::resolve_data_dir;
use charsmith_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or config
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "charsmith", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(cli.log_directives(), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = dispatch(cli).await;
    shutdown_tracing();
    result
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None | Some(Commands::Create) => {
            let data_dir = resolve_data_dir();
            let config = load_global_config(&data_dir).await;
            let output_dir = resolve_output_dir(&config, cli.output_dir);
            tracing::debug!(output_dir = %output_dir.display(), "resolved output directory");

            if let Err(e) = cli::create::create_character(&output_dir, cli.json).await {
                eprintln!("{} {e:#}", style("Error creating character:").red().bold());
                shutdown_tracing();
                std::process::exit(1);
            }
        }

        Some(Commands::Check { file }) => {
            cli::check::check_character(&file, cli.json).await?;
        }

        Some(Commands::Completions { .. }) => unreachable!("handled in main"),
    }

    Ok(())
}
