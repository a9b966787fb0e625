// src/cli/commands.rs
use clap::Subcommand;
use rust_passforge::models::QuickPreset;

use super::PolicyArgs;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords from explicit character-class flags
    Generate {
        #[command(flatten)]
        policy: PolicyArgs,

        /// Number of passwords to generate
        #[arg(long, short)]
        count: Option<usize>,
    },

    /// Generate a password from a preset
    Quick {
        /// Preset strength
        #[arg(value_enum)]
        preset: QuickPreset,

        /// Exclude ambiguous characters (O, 0, o, I, l, 1)
        #[arg(long)]
        exclude_ambiguous: bool,
    },

    /// Evaluate the strength of a password
    Evaluate {
        /// Password to evaluate (prompted for with hidden input when omitted)
        password: Option<String>,
    },
}
