mod cli;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use uispond_core::Poller;

use crate::cli::{Cli, Command, ConfigAction};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Poll(args) => {
            let runtime = build_runtime_config(&cli.global)?;
            tracing::debug!(output = ?args.output, "running one poll cycle");

            let poller = Poller::new(&runtime)?;
            let access_points = poller.poll().await;

            output::print_output(&output::render(args.output, &access_points));
            Ok(())
        }

        Command::Config(args) => match args.action {
            ConfigAction::Show => {
                let mut cfg = merged_config(&cli.global);
                if cfg.token.is_some() {
                    cfg.token = Some("<redacted>".into());
                }
                let rendered =
                    toml::to_string_pretty(&cfg).map_err(uispond_config::ConfigError::from)?;
                output::print_output(rendered.trim_end());
                Ok(())
            }
            ConfigAction::Path => {
                output::print_output(&uispond_config::config_path().display().to_string());
                Ok(())
            }
        },

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "uispond", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// File/env configuration with CLI flag overrides applied on top.
fn merged_config(global: &cli::GlobalOpts) -> uispond_config::Config {
    let mut cfg = uispond_config::load_config_or_default();
    if let Some(ref url) = global.controller {
        cfg.controller = Some(url.clone());
    }
    if let Some(ref var) = global.token_env {
        cfg.token_env = Some(var.clone());
    }
    if let Some(ref source) = global.neighbour_source {
        cfg.neighbour_source = source.clone();
    }
    if global.insecure {
        cfg.insecure = true;
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }
    cfg
}

/// Build the runtime `UispConfig` from config file, env, and CLI flags.
fn build_runtime_config(global: &cli::GlobalOpts) -> Result<uispond_core::UispConfig, CliError> {
    let cfg = merged_config(global);

    if cfg.controller.is_none() {
        return Err(CliError::NoController {
            path: uispond_config::config_path().display().to_string(),
        });
    }

    uispond_config::to_uisp_config(&cfg).map_err(CliError::from)
}
