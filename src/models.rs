// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters that are easy to confuse with one another when read back.
pub const AMBIGUOUS_CHARS: &str = "O0oIl1";

/// One of the four fixed ASCII character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Resolution order used by the generator's coverage step.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Digit => "0123456789",
            CharacterClass::Symbol => "!@#$%^&*()-_=+[]{};:,.<>/?|",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// The class members, minus the ambiguous set when `exclude_ambiguous` is set.
    pub fn members(&self, exclude_ambiguous: bool) -> Vec<char> {
        self.chars()
            .chars()
            .filter(|c| !exclude_ambiguous || !AMBIGUOUS_CHARS.contains(*c))
            .collect()
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Digit => write!(f, "digit"),
            CharacterClass::Symbol => write!(f, "symbol"),
        }
    }
}

// Password generation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 12,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationPolicy {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Digit => self.include_digits,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    /// Active classes in resolution order.
    pub fn active_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    pub fn has_any_class(&self) -> bool {
        self.include_lowercase || self.include_uppercase || self.include_digits || self.include_symbols
    }
}

/// Canned policies offered by the quick-generation menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QuickPreset {
    Weak,
    Medium,
    Strong,
}

impl QuickPreset {
    pub fn length(&self) -> usize {
        match self {
            QuickPreset::Weak => 8,
            QuickPreset::Medium => 12,
            QuickPreset::Strong => 16,
        }
    }

    pub fn policy(&self, exclude_ambiguous: bool) -> GenerationPolicy {
        GenerationPolicy {
            length: self.length(),
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: *self != QuickPreset::Weak,
            exclude_ambiguous,
        }
    }
}

impl fmt::Display for QuickPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuickPreset::Weak => write!(f, "Weak ({} characters)", self.length()),
            QuickPreset::Medium => write!(f, "Medium ({} characters)", self.length()),
            QuickPreset::Strong => write!(f, "Strong ({} characters)", self.length()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a clamped 0-100 score onto a level.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => StrengthLevel::VeryWeak,
            20..=39 => StrengthLevel::Weak,
            40..=59 => StrengthLevel::Medium,
            60..=79 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::VeryWeak => write!(f, "very weak"),
            StrengthLevel::Weak => write!(f, "weak"),
            StrengthLevel::Medium => write!(f, "medium"),
            StrengthLevel::Strong => write!(f, "strong"),
            StrengthLevel::VeryStrong => write!(f, "very strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub level: StrengthLevel,
    /// Score in 0..=100
    pub score: u8,
    /// Triggered rule lines, in evaluation order.
    pub description: Vec<String>,
}

impl StrengthResult {
    /// Rule lines joined one per line, trailing whitespace trimmed.
    pub fn summary(&self) -> String {
        self.description.join("\n").trim_end().to_string()
    }
}
