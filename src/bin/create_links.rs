use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use deploy_links::cli::{handlers, Cli, Commands, Ui};
use deploy_links::config::LinkerSettings;
use deploy_links::error::Result;

fn main() -> ExitCode {
    // Only `create` or `remove` is accepted; anything else, help included, is a usage error.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            Ui::plain().usage();
            return ExitCode::FAILURE;
        }
    };

    let ui = Ui::plain();
    let settings = match LinkerSettings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            ui.error(&error);
            return ExitCode::from(error.exit_code());
        }
    };

    if let Err(e) = init_logging(settings.verbose) {
        eprintln!("{}", e);
    }

    let ui = Ui::new(settings.colored);
    match run_app(cli.command, &settings, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            ui.error(&error);
            ExitCode::from(error.exit_code())
        }
    }
}

fn run_app(command: Commands, settings: &LinkerSettings, ui: &Ui) -> Result<()> {
    debug!(root = %settings.root.display(), command = ?command, "resolved settings");

    handlers::dispatch(command, settings, ui)
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "deploy_links=debug,create_links=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
