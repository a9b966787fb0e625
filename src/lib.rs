//! Password generation under character-class policies, plus heuristic
//! strength scoring.
//!
//! ```no_run
//! use rust_passforge::{evaluate, generate_password, GenerationPolicy};
//!
//! let password = generate_password(&GenerationPolicy::default())?;
//! let strength = evaluate(&password);
//! println!("{} -> {}", password, strength.level);
//! # Ok::<(), rust_passforge::GeneratorError>(())
//! ```
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;
pub mod utils;

pub use generators::{generate_many, generate_password, GeneratorError, PasswordGenerator};
pub use models::{CharacterClass, GenerationPolicy, QuickPreset, StrengthLevel, StrengthResult};
pub use strength::evaluate;
