// src/cli/handlers.rs
use anyhow::{bail, Context, Result};
use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, Password, PasswordDisplayMode};
use serde::Serialize;

use rust_passforge::core::Config;
use rust_passforge::generators::{self, PasswordGenerator};
use rust_passforge::models::{GenerationPolicy, QuickPreset, StrengthResult};
use rust_passforge::strength;
use rust_passforge::utils::{format_details, format_numbered, strength_label, style_for_level};

use super::PolicyArgs;

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthResult,
}

impl GeneratedPassword {
    pub fn new(password: String) -> Self {
        let strength = strength::evaluate(&password);
        Self { password, strength }
    }
}

/// Turn CLI flags into a policy, enforcing the configured length bounds.
pub fn build_policy(args: &PolicyArgs, config: &Config) -> Result<GenerationPolicy> {
    let length = args.length.unwrap_or(config.default_password_length);
    if !config.length_in_range(length) {
        bail!(
            "Password length must be between {} and {} (got {})",
            config.min_password_length,
            config.max_password_length,
            length
        );
    }

    let mut policy = GenerationPolicy {
        length,
        include_lowercase: !args.no_lowercase,
        include_uppercase: !args.no_uppercase,
        include_digits: !args.no_digits,
        include_symbols: !args.no_symbols,
        exclude_ambiguous: args.exclude_ambiguous || config.default_exclude_ambiguous,
    };

    if apply_class_fallback(&mut policy) {
        eprintln!("⚠️  No character type selected. Using lowercase letters.");
    }

    Ok(policy)
}

/// Enable lowercase when no class is selected. Returns true if the fallback kicked in.
pub fn apply_class_fallback(policy: &mut GenerationPolicy) -> bool {
    if policy.has_any_class() {
        return false;
    }
    log::warn!("No character class selected, defaulting to lowercase");
    policy.include_lowercase = true;
    true
}

pub fn handle_generate(args: &PolicyArgs, count: Option<usize>, config: &Config, json: bool) -> Result<()> {
    let policy = build_policy(args, config)?;
    let mut generator = PasswordGenerator::new();

    match count {
        None => {
            let password = generator
                .generate_password(&policy)
                .context("Failed to generate password")?;
            print_generated(GeneratedPassword::new(password), json)
        }
        Some(count) => {
            if !config.count_in_range(count) {
                bail!("Password count must be between 1 and {} (got {})", config.max_batch_count, count);
            }
            let passwords = generator
                .generate_many(&policy, count)
                .context("Failed to generate passwords")?;
            print_batch(passwords, json)
        }
    }
}

pub fn handle_quick(preset: QuickPreset, exclude_ambiguous: bool, config: &Config, json: bool) -> Result<()> {
    let policy = preset.policy(exclude_ambiguous || config.default_exclude_ambiguous);
    log::info!("Quick generation with preset {:?}", preset);
    let password = generators::generate_password(&policy).context("Failed to generate password")?;
    print_generated(GeneratedPassword::new(password), json)
}

pub fn handle_evaluate(password: Option<String>, json: bool) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password_to_evaluate()?,
    };

    let result = strength::evaluate(&password);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_strength(&result, true);
    }
    Ok(())
}

/// Hidden-input prompt for a password to score. Blank answers are re-asked.
pub fn prompt_password_to_evaluate() -> Result<String, InquireError> {
    Password::new("Password to evaluate (it is not stored anywhere):")
        .with_display_mode(PasswordDisplayMode::Hidden)
        .without_confirmation()
        .with_validator(validate_not_blank)
        .prompt()
}

pub fn validate_not_blank(input: &str) -> Result<Validation, CustomUserError> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid("The value cannot be empty.".into()))
    } else {
        Ok(Validation::Valid)
    }
}

pub fn print_generated(generated: GeneratedPassword, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    println!("\n🔐 Generated password:");
    println!("{}", generated.password);
    println!("\nEvaluation of the generated password:");
    print_strength(&generated.strength, false);
    Ok(())
}

pub fn print_batch(passwords: Vec<String>, json: bool) -> Result<()> {
    if json {
        let generated: Vec<GeneratedPassword> = passwords.into_iter().map(GeneratedPassword::new).collect();
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    println!("\n🔐 Generated passwords:");
    for line in format_numbered(&passwords) {
        println!("{}", line);
    }
    Ok(())
}

pub fn print_strength(result: &StrengthResult, with_details: bool) {
    println!("Level: {}", style_for_level(result.level, strength_label(result)));
    if with_details && !result.description.is_empty() {
        println!("\nDetails:");
        println!("{}", format_details(result));
    }
}
