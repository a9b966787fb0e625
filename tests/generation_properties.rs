use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rust_passforge::generators::ResolvedAlphabet;
use rust_passforge::models::AMBIGUOUS_CHARS;
use rust_passforge::{generate_many, generate_password, CharacterClass, GenerationPolicy, PasswordGenerator};

fn all_policies(length: usize) -> Vec<GenerationPolicy> {
    (1u8..16)
        .flat_map(|mask| {
            [false, true].into_iter().map(move |exclude_ambiguous| GenerationPolicy {
                length,
                include_lowercase: mask & 1 != 0,
                include_uppercase: mask & 2 != 0,
                include_digits: mask & 4 != 0,
                include_symbols: mask & 8 != 0,
                exclude_ambiguous,
            })
        })
        .collect()
}

#[test]
fn output_has_requested_length_and_alphabet() {
    let mut generator = PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(7));
    for length in [1, 2, 3, 4, 8, 16, 64] {
        for policy in all_policies(length) {
            let alphabet = ResolvedAlphabet::resolve(&policy).unwrap();
            for _ in 0..20 {
                let password = generator.generate_password(&policy).unwrap();
                assert_eq!(password.chars().count(), length);
                assert!(password.chars().all(|c| alphabet.contains(c)), "{:?} -> {}", policy, password);
            }
        }
    }
}

#[test]
fn every_active_class_is_covered_when_length_allows() {
    let mut generator = PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(11));
    for policy in all_policies(4) {
        let alphabet = ResolvedAlphabet::resolve(&policy).unwrap();
        for _ in 0..200 {
            let password = generator.generate_password(&policy).unwrap();
            for class in alphabet.covered_classes() {
                assert!(
                    password.chars().any(|c| class.contains(c)),
                    "{} missing from {} under {:?}",
                    class,
                    password,
                    policy
                );
            }
        }
    }
}

#[test]
fn ambiguous_characters_never_appear_when_excluded() {
    let policy = GenerationPolicy {
        length: 64,
        exclude_ambiguous: true,
        ..GenerationPolicy::default()
    };
    for password in generate_many(&policy, 50).unwrap() {
        assert!(password.chars().all(|c| !AMBIGUOUS_CHARS.contains(c)), "{}", password);
    }
}

#[test]
fn empty_policy_is_a_policy_error() {
    let policy = GenerationPolicy {
        include_lowercase: false,
        include_uppercase: false,
        include_digits: false,
        include_symbols: false,
        ..GenerationPolicy::default()
    };
    assert!(generate_password(&policy).unwrap_err().is_policy());
    assert!(generate_many(&policy, 3).unwrap_err().is_policy());
}

#[test]
fn generate_many_returns_count_independent_passwords() {
    let policy = GenerationPolicy::default();
    let passwords = generate_many(&policy, 25).unwrap();
    assert_eq!(passwords.len(), 25);
    assert!(passwords.iter().all(|p| p.chars().count() == policy.length));

    let mut unique = passwords.clone();
    unique.sort();
    unique.dedup();
    assert!(unique.len() > 1);
}

#[test]
fn positions_are_shuffled() {
    // With one digit guaranteed among lowercase fill, the digit must not always sit first.
    let policy = GenerationPolicy {
        length: 8,
        include_lowercase: true,
        include_uppercase: false,
        include_digits: true,
        include_symbols: false,
        exclude_ambiguous: false,
    };
    let mut generator = PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(3));
    let mut first_is_lowercase = 0;
    for _ in 0..500 {
        let password = generator.generate_password(&policy).unwrap();
        if password.chars().next().map_or(false, |c| CharacterClass::Lowercase.contains(c)) {
            first_is_lowercase += 1;
        }
    }
    assert!(first_is_lowercase > 0 && first_is_lowercase < 500);
}
