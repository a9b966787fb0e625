// src/utils/format.rs
use console::{style, StyledObject};

use crate::models::{StrengthLevel, StrengthResult};

// Plain "level (score/100)" label
pub fn strength_label(result: &StrengthResult) -> String {
    format!("{} ({}/100)", result.level, result.score)
}

// Colour a string by strength level
pub fn style_for_level<D>(level: StrengthLevel, value: D) -> StyledObject<D> {
    match level {
        StrengthLevel::VeryWeak => style(value).red(),
        StrengthLevel::Weak => style(value).yellow().dim(),
        StrengthLevel::Medium => style(value).yellow(),
        StrengthLevel::Strong => style(value).green(),
        StrengthLevel::VeryStrong => style(value).cyan(),
    }
}

// Rule lines as bullets, one per line
pub fn format_details(result: &StrengthResult) -> String {
    result
        .description
        .iter()
        .map(|line| format!("• {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

// Numbered batch listing, "01: ..." style
pub fn format_numbered(passwords: &[String]) -> Vec<String> {
    let width = passwords.len().to_string().len().max(2);
    passwords
        .iter()
        .enumerate()
        .map(|(i, password)| format!("{:0width$}: {}", i + 1, password, width = width))
        .collect()
}
