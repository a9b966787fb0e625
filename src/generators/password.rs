// src/generators/password.rs
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use super::{GeneratorError, Result};
use crate::crypto;
use crate::models::{CharacterClass, GenerationPolicy};

/// Character pools for one policy, after ambiguous-character exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAlphabet {
    /// Active classes in resolution order. A class may be empty after exclusion.
    pub classes: Vec<(CharacterClass, Vec<char>)>,
    /// Union of all active classes.
    pub full: Vec<char>,
}

impl ResolvedAlphabet {
    /// Validate `policy` and build its pools. Consumes no randomness.
    pub fn resolve(policy: &GenerationPolicy) -> Result<Self> {
        if policy.length == 0 {
            return Err(GeneratorError::Argument("password length must be greater than zero".to_string()));
        }

        let active = policy.active_classes();
        if active.is_empty() {
            return Err(GeneratorError::Policy("no character class selected".to_string()));
        }

        let classes: Vec<(CharacterClass, Vec<char>)> = active
            .into_iter()
            .map(|class| (class, class.members(policy.exclude_ambiguous)))
            .collect();

        let full: Vec<char> = classes.iter().flat_map(|(_, members)| members.iter().copied()).collect();
        if full.is_empty() {
            return Err(GeneratorError::Policy(
                "no characters remain after excluding ambiguous characters".to_string(),
            ));
        }

        Ok(Self { classes, full })
    }

    pub fn contains(&self, c: char) -> bool {
        self.full.contains(&c)
    }

    /// Classes that still have members, i.e. the ones the coverage step draws from.
    pub fn covered_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.classes
            .iter()
            .filter(|(_, members)| !members.is_empty())
            .map(|(class, _)| *class)
    }
}

/// Password generator over an injectable secure random source.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    pub fn generate_password(&mut self, policy: &GenerationPolicy) -> Result<String> {
        let alphabet = ResolvedAlphabet::resolve(policy)?;
        log::debug!(
            "Generating password: length={}, classes={}, alphabet={}",
            policy.length,
            alphabet.classes.len(),
            alphabet.full.len()
        );
        self.build(policy.length, &alphabet)
    }

    pub fn generate_many(&mut self, policy: &GenerationPolicy, count: usize) -> Result<Vec<String>> {
        if count == 0 {
            return Err(GeneratorError::Argument("password count must be greater than zero".to_string()));
        }

        let alphabet = ResolvedAlphabet::resolve(policy)?;
        log::debug!("Generating {} passwords of length {}", count, policy.length);

        (0..count).map(|_| self.build(policy.length, &alphabet)).collect()
    }

    fn build(&mut self, length: usize, alphabet: &ResolvedAlphabet) -> Result<String> {
        let mut buffer: Vec<char> = Vec::with_capacity(length);

        // One representative per non-empty class while there is room
        for (_, members) in alphabet.classes.iter().filter(|(_, members)| !members.is_empty()) {
            if buffer.len() >= length {
                break;
            }
            buffer.push(crypto::random_char(&mut self.rng, members)?);
        }

        while buffer.len() < length {
            buffer.push(crypto::random_char(&mut self.rng, &alphabet.full)?);
        }

        crypto::shuffle(&mut self.rng, &mut buffer)?;

        Ok(buffer.into_iter().collect())
    }
}

/// Generate one password from the operating system's CSPRNG.
pub fn generate_password(policy: &GenerationPolicy) -> Result<String> {
    PasswordGenerator::new().generate_password(policy)
}

/// Generate `count` independent passwords from the operating system's CSPRNG.
pub fn generate_many(policy: &GenerationPolicy, count: usize) -> Result<Vec<String>> {
    PasswordGenerator::new().generate_many(policy, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::testing::ReplayRng;
    use crate::models::AMBIGUOUS_CHARS;

    fn digits_only(length: usize) -> GenerationPolicy {
        GenerationPolicy {
            length,
            include_lowercase: false,
            include_uppercase: false,
            include_digits: true,
            include_symbols: false,
            exclude_ambiguous: false,
        }
    }

    #[test]
    fn test_resolve_rejects_empty_policy() {
        let policy = GenerationPolicy {
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
            ..GenerationPolicy::default()
        };
        let err = ResolvedAlphabet::resolve(&policy).unwrap_err();
        assert!(err.is_policy());
        assert_eq!(err.to_string(), "Policy error: no character class selected");
    }

    #[test]
    fn test_resolve_rejects_zero_length() {
        let err = ResolvedAlphabet::resolve(&digits_only(0)).unwrap_err();
        assert!(err.is_argument());
    }

    #[test]
    fn test_resolve_excludes_from_each_class() {
        let policy = GenerationPolicy {
            exclude_ambiguous: true,
            ..GenerationPolicy::default()
        };
        let alphabet = ResolvedAlphabet::resolve(&policy).unwrap();
        assert_eq!(alphabet.full.len(), 26 + 26 + 10 + 27 - AMBIGUOUS_CHARS.len());
        for (_, members) in &alphabet.classes {
            assert!(members.iter().all(|c| !AMBIGUOUS_CHARS.contains(*c)));
        }
        assert_eq!(alphabet.covered_classes().count(), 4);
    }

    #[test]
    fn test_deterministic_draw_sequence() {
        // coverage: '3'; fill: '5', '7', '9'; shuffle: j = 0, 0, 0
        let mut generator = PasswordGenerator::with_rng(ReplayRng::new(&[3, 5, 7, 9, 0, 0, 0]));
        let password = generator.generate_password(&digits_only(4)).unwrap();
        assert_eq!(password, "5793");
        assert_eq!(generator.into_rng().consumed, 7);
    }

    #[test]
    fn test_short_length_covers_first_classes_only() {
        let policy = GenerationPolicy {
            length: 2,
            ..GenerationPolicy::default()
        };
        // lowercase 'a', uppercase 'A', then a single shuffle step keeping the order
        let mut generator = PasswordGenerator::with_rng(ReplayRng::new(&[0, 0, 1]));
        assert_eq!(generator.generate_password(&policy).unwrap(), "aA");
        assert_eq!(generator.into_rng().consumed, 3);
    }

    #[test]
    fn test_errors_consume_no_randomness() {
        let mut generator = PasswordGenerator::with_rng(ReplayRng::new(&[]));
        assert!(generator.generate_password(&digits_only(0)).unwrap_err().is_argument());
        assert!(generator.generate_many(&digits_only(8), 0).unwrap_err().is_argument());

        let empty = GenerationPolicy {
            include_digits: false,
            ..digits_only(8)
        };
        assert!(generator.generate_many(&empty, 3).unwrap_err().is_policy());
        assert_eq!(generator.into_rng().consumed, 0);
    }

    #[test]
    fn test_generate_with_os_rng() {
        let policy = GenerationPolicy::default();
        let password = generate_password(&policy).unwrap();
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(|c| CharacterClass::Symbol.contains(c)));
    }

    #[test]
    fn test_generate_many_count() {
        let passwords = generate_many(&digits_only(6), 5).unwrap();
        assert_eq!(passwords.len(), 5);
        assert!(passwords.iter().all(|p| p.len() == 6 && p.chars().all(|c| c.is_ascii_digit())));
    }
}
