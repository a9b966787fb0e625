// src/crypto.rs
//! Unbiased selection helpers over a cryptographically secure source.
//!
//! All draws go through [`random_index`], which maps 32-bit words into
//! `[0, n)` by rejection sampling instead of a bare modulo.
use rand_core::{CryptoRng, RngCore};

use crate::generators::{GeneratorError, Result};

/// Size of the 32-bit word space the source is sampled from.
const WORD_SPACE: u64 = 1 << 32;

/// Largest multiple of `n` that fits in the word space. Words at or above it are redrawn.
fn rejection_limit(n: u64) -> u64 {
    WORD_SPACE - (WORD_SPACE % n)
}

/// Draw a uniform index in `[0, n)`.
pub fn random_index<R>(rng: &mut R, n: usize) -> Result<usize>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if n == 0 {
        return Err(GeneratorError::Argument("cannot sample from an empty range".to_string()));
    }

    let n = n as u64;
    if n > WORD_SPACE {
        return Err(GeneratorError::Argument(format!("range {} exceeds 32-bit sampling", n)));
    }

    let limit = rejection_limit(n);
    loop {
        let value = rng.next_u32() as u64;
        if value < limit {
            return Ok((value % n) as usize);
        }
    }
}

/// Pick one character uniformly from `set`.
pub fn random_char<R>(rng: &mut R, set: &[char]) -> Result<char>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if set.is_empty() {
        return Err(GeneratorError::Argument("character set cannot be empty".to_string()));
    }
    let index = random_index(rng, set.len())?;
    Ok(set[index])
}

/// Fisher-Yates: walk from the last index down to 1, swapping with a uniform partner in `[0, i]`.
pub fn shuffle<R, T>(rng: &mut R, buffer: &mut [T]) -> Result<()>
where
    R: RngCore + CryptoRng + ?Sized,
{
    for i in (1..buffer.len()).rev() {
        let j = random_index(rng, i + 1)?;
        buffer.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use rand_core::{impls, CryptoRng, Error, RngCore};
    use std::collections::VecDeque;

    /// Replays a fixed queue of words and records how many were consumed.
    pub struct ReplayRng {
        words: VecDeque<u32>,
        pub consumed: usize,
    }

    impl ReplayRng {
        pub fn new(words: &[u32]) -> Self {
            Self {
                words: words.iter().copied().collect(),
                consumed: 0,
            }
        }
    }

    impl RngCore for ReplayRng {
        fn next_u32(&mut self) -> u32 {
            self.consumed += 1;
            self.words.pop_front().expect("replay source exhausted")
        }

        fn next_u64(&mut self) -> u64 {
            impls::next_u64_via_u32(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            impls::fill_bytes_via_next(self, dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ReplayRng {}
}
