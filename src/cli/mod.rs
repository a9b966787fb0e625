// src/cli/mod.rs
use clap::{Args as ClapArgs, Parser};

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords and score their strength", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (starts the interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Character-class flags shared by the generating subcommands.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Password length (defaults to the configured length, PASSFORGE_DEFAULT_LENGTH)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude ambiguous characters (O, 0, o, I, l, 1); PASSFORGE_EXCLUDE_AMBIGUOUS turns this on by default
    #[arg(long)]
    pub exclude_ambiguous: bool,
}
