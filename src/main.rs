use anyhow::Result;
use clap::Parser;
use std::path::Path;

mod cli;

use crate::cli::{handlers, Args, CliCommand};
use rust_passforge::core::Config;
use rust_passforge::logging;

fn main() -> Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = logging::init(&config) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }
    config.log_warnings();
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Generate { policy, count }) => handlers::handle_generate(&policy, count, &config, args.json),
        Some(CliCommand::Quick { preset, exclude_ambiguous }) => {
            handlers::handle_quick(preset, exclude_ambiguous, &config, args.json)
        }
        Some(CliCommand::Evaluate { password }) => handlers::handle_evaluate(password, args.json),
        None => cli::menu::run_cli_menu(&config),
    }
}
