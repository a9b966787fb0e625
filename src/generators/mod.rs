// src/generators/mod.rs
use thiserror::Error;

mod password;

pub use password::{generate_many, generate_password, PasswordGenerator, ResolvedAlphabet};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// No usable character class, before or after ambiguous-character exclusion.
    #[error("Policy error: {0}")]
    Policy(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

impl GeneratorError {
    pub fn is_policy(&self) -> bool {
        matches!(self, GeneratorError::Policy(_))
    }

    pub fn is_argument(&self) -> bool {
        matches!(self, GeneratorError::Argument(_))
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
