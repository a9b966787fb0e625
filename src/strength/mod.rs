// src/strength/mod.rs
//! Heuristic password strength scoring.
//!
//! Scoring is a single pass: length band, character variety, then flat
//! penalties for simple sequences and heavy repetition. The total is
//! clamped to 0-100 and mapped onto a [`StrengthLevel`].
use std::collections::HashMap;

use crate::models::{StrengthLevel, StrengthResult};

const SEQUENCE_PENALTY: i32 = 15;
const REPETITION_PENALTY: i32 = 10;

/// Score `password`. Never fails; an empty password scores 0.
pub fn evaluate(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            level: StrengthLevel::VeryWeak,
            score: 0,
            description: vec!["empty password.".to_string()],
        };
    }

    let chars: Vec<char> = password.chars().collect();
    let mut score: i32 = 0;
    let mut description = Vec::new();

    // Length
    let (points, line) = length_band(chars.len());
    score += points;
    description.push(line.to_string());

    // Variety
    if let Some((points, line)) = variety_band(&chars) {
        score += points;
        description.push(line.to_string());
    }

    if has_sequence(&chars) {
        score -= SEQUENCE_PENALTY;
        description.push("contains simple sequences (e.g. abc, 123).".to_string());
    }

    if has_heavy_repetition(&chars) {
        score -= REPETITION_PENALTY;
        description.push("contains many repeated characters.".to_string());
    }

    let score = score.clamp(0, 100) as u8;
    let level = StrengthLevel::from_score(score);
    log::debug!("Evaluated password: score={}, level={}", score, level);

    StrengthResult {
        level,
        score,
        description,
    }
}

fn length_band(length: usize) -> (i32, &'static str) {
    match length {
        0..=5 => (5, "very short (fewer than 6 characters)."),
        6..=9 => (15, "acceptable length (6-9 characters)."),
        10..=13 => (25, "good length (10-13 characters)."),
        _ => (35, "excellent length (14+ characters)."),
    }
}

/// ASCII decimal digits only; numeric signs like '½' count as symbols.
fn is_decimal_digit(c: char) -> bool {
    c.to_digit(10).is_some()
}

fn variety_band(chars: &[char]) -> Option<(i32, &'static str)> {
    let has_lower = chars.iter().any(|c| c.is_lowercase());
    let has_upper = chars.iter().any(|c| c.is_uppercase());
    let has_digit = chars.iter().any(|c| is_decimal_digit(*c));
    let has_symbol = chars.iter().any(|c| !c.is_alphabetic() && !is_decimal_digit(*c));

    let variety = [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|present| **present)
        .count();

    match variety {
        1 => Some((5, "uses only one type of character.")),
        2 => Some((15, "uses two types of characters.")),
        3 => Some((25, "good mix of characters.")),
        4 => Some((35, "excellent mix (uppercase, lowercase, digits and symbols).")),
        _ => None,
    }
}

/// True if any three consecutive characters are a strictly ascending or descending run.
/// Only the first match matters; the penalty is flat.
fn has_sequence(chars: &[char]) -> bool {
    chars.windows(3).any(|window| {
        let a = window[0] as i64;
        let b = window[1] as i64;
        let c = window[2] as i64;
        (b == a + 1 && c == b + 1) || (b == a - 1 && c == b - 1)
    })
}

/// True if a single character makes up more than half the password.
fn has_heavy_repetition(chars: &[char]) -> bool {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in chars {
        *counts.entry(*c).or_insert(0) += 1;
    }
    counts.values().any(|&count| count > chars.len() / 2)
}
