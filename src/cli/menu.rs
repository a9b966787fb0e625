// src/cli/menu.rs
use anyhow::Result;
use console::style;
use inquire::{Confirm, InquireError, Select, Text};

use rust_passforge::core::Config;
use rust_passforge::generators::PasswordGenerator;
use rust_passforge::models::{GenerationPolicy, QuickPreset};
use rust_passforge::strength;

use super::handlers::{
    apply_class_fallback, print_batch, print_generated, print_strength, prompt_password_to_evaluate, GeneratedPassword,
};

const QUICK: &str = "⚡  Quick password (weak/medium/strong)";
const CUSTOM: &str = "🛠️  Custom password";
const MULTIPLE: &str = "📋  Multiple passwords";
const EVALUATE: &str = "🔍  Evaluate an existing password";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("{}", style("╔══════════════════════════════════════╗").cyan());
    println!("{}", style("║        🦀 RUST PASSFORGE 🔐          ║").cyan());
    println!("{}", style("╚══════════════════════════════════════╝").cyan());
    println!("Password generation and strength analysis.\n");

    let mut generator = PasswordGenerator::new();

    loop {
        let options = vec![QUICK, CUSTOM, MULTIPLE, EVALUATE, EXIT];
        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable();

        let outcome = match selection {
            Ok(Some(QUICK)) => quick_password(&mut generator, config),
            Ok(Some(CUSTOM)) => custom_password(&mut generator, config),
            Ok(Some(MULTIPLE)) => multiple_passwords(&mut generator, config),
            Ok(Some(EVALUATE)) => evaluate_password(),
            Ok(Some(_)) | Ok(None) => break,
            Err(e) => Err(e.into()),
        };

        match outcome {
            Ok(()) => {}
            Err(e) if is_cancellation(&e) => break,
            Err(e) => {
                log::error!("Menu action failed: {}", e);
                eprintln!("❌ {:#}", e);
            }
        }

        let _ = Text::new("Press enter to return to the menu...").prompt();
    }

    println!("Thanks for using Rust Passforge. Goodbye!");
    Ok(())
}

fn is_cancellation(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled) | Some(InquireError::OperationInterrupted)
    )
}

fn quick_password(generator: &mut PasswordGenerator, config: &Config) -> Result<()> {
    let presets = vec![QuickPreset::Weak, QuickPreset::Medium, QuickPreset::Strong];
    let preset = Select::new("Choose a level:", presets).prompt()?;
    let exclude_ambiguous = Confirm::new("Exclude ambiguous characters (O/0, l/1, etc.)?")
        .with_default(config.default_exclude_ambiguous)
        .prompt()?;

    let password = generator.generate_password(&preset.policy(exclude_ambiguous))?;
    print_generated(GeneratedPassword::new(password), false)
}

fn custom_password(generator: &mut PasswordGenerator, config: &Config) -> Result<()> {
    let policy = ask_custom_policy(config)?;
    let password = generator.generate_password(&policy)?;
    print_generated(GeneratedPassword::new(password), false)
}

fn multiple_passwords(generator: &mut PasswordGenerator, config: &Config) -> Result<()> {
    let policy = ask_custom_policy(config)?;
    let count = prompt_number(
        &format!("How many passwords? (1-{})", config.max_batch_count),
        5.min(config.max_batch_count),
        1,
        config.max_batch_count,
    )?;

    let passwords = generator.generate_many(&policy, count)?;
    print_batch(passwords, false)
}

fn evaluate_password() -> Result<()> {
    let password = prompt_password_to_evaluate()?;

    println!();
    print_strength(&strength::evaluate(&password), true);
    Ok(())
}

fn ask_custom_policy(config: &Config) -> Result<GenerationPolicy, InquireError> {
    println!("== Custom configuration ==");

    let length = prompt_number(
        &format!(
            "Password length ({}-{}, 12+ recommended):",
            config.min_password_length, config.max_password_length
        ),
        config.default_password_length,
        config.min_password_length,
        config.max_password_length,
    )?;

    let include_lowercase = Confirm::new("Include lowercase letters?").with_default(true).prompt()?;
    let include_uppercase = Confirm::new("Include uppercase letters?").with_default(true).prompt()?;
    let include_digits = Confirm::new("Include digits (0-9)?").with_default(true).prompt()?;
    let include_symbols = Confirm::new("Include symbols (!@#$, etc.)?").with_default(true).prompt()?;
    let exclude_ambiguous = Confirm::new("Exclude ambiguous characters (O/0, l/1, etc.)?")
        .with_default(config.default_exclude_ambiguous)
        .prompt()?;

    let mut policy = GenerationPolicy {
        length,
        include_lowercase,
        include_uppercase,
        include_digits,
        include_symbols,
        exclude_ambiguous,
    };

    if apply_class_fallback(&mut policy) {
        println!("{}", style("No character type selected. Lowercase letters will be used.").yellow());
    }

    Ok(policy)
}

// Re-prompt until the answer parses and falls inside [min, max]
fn prompt_number(message: &str, default: usize, min: usize, max: usize) -> Result<usize, InquireError> {
    let default = default.to_string();
    loop {
        let input = Text::new(message).with_default(&default).prompt()?;
        match input.trim().parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => println!("{}", style(format!("Please enter a number between {} and {}.", min, max)).yellow()),
        }
    }
}
