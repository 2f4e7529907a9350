//! Entropy-heuristic password strength analysis
//!
//! This library estimates password strength from the character classes in
//! use, derives a brute-force crack-time estimate, and detects weak
//! dictionary words both in plain text and behind simple leet
//! substitutions.
//!
//! # Features
//!
//! - `async` (default): Enables async analysis dispatch with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the interactive `pwd-entropy` terminal analyzer
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to a weak-word dictionary file
//!   (default: `./assets/common-words.txt`); a built-in word list is used
//!   until one is loaded
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_entropy::analyze_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = analyze_password(&password);
//!
//! println!("Entropy: {:.2} bits", result.entropy);
//! println!("Estimated Crack Time: {}", result.crack_time);
//! println!("Strength: {}", result.strength);
//! for warning in &result.warnings {
//!     println!("- {warning}");
//! }
//! ```

// Internal modules
mod analyzer;
mod crack_time;
mod dictionary;
mod entropy;
mod sections;
mod types;

// Public API
pub use analyzer::{analyze_password, analyze_password_with_rate};
pub use crack_time::{DEFAULT_GUESSES_PER_SECOND, estimate_crack_time, format_duration};
pub use dictionary::{
    DEFAULT_WORDS, DictionaryError, contains_common_word, init_dictionary,
    init_dictionary_from_path, leet_substitute,
};
pub use entropy::{CharsetProfile, estimate_entropy};
pub use types::{AnalysisResult, StrengthVerdict};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
