//! Obfuscation section - flags dictionary words disguised by leet
//! substitutions.

use secrecy::{ExposeSecret, SecretString};

use super::SectionWarning;
use crate::dictionary::{contains_common_word, leet_substitute};

/// Flags passwords whose de-obfuscated form contains a weak word.
///
/// Only fires when a substitution actually changed something, so passwords
/// already flagged for a plain dictionary word are not flagged twice for
/// the same text.
pub fn obfuscation_section(password: &SecretString) -> SectionWarning {
    let plain = password.expose_secret().to_lowercase();
    let decoded = leet_substitute(password.expose_secret());
    if decoded != plain && contains_common_word(&decoded) {
        return Some("Contains obfuscated dictionary word".to_string());
    }
    None
}
