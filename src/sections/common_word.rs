//! Common-word section - flags passwords containing a dictionary word.

use secrecy::{ExposeSecret, SecretString};

use super::SectionWarning;
use crate::dictionary::contains_common_word;

/// Flags passwords that contain a weak word as a substring.
pub fn common_word_section(password: &SecretString) -> SectionWarning {
    if contains_common_word(password.expose_secret()) {
        return Some("Contains common word".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_common_word_section_plain_match() {
        crate::dictionary::reset_dictionary_for_testing();

        let pwd = SecretString::new("password123".to_string().into());
        assert_eq!(
            common_word_section(&pwd),
            Some("Contains common word".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_common_word_section_case_insensitive() {
        crate::dictionary::reset_dictionary_for_testing();

        let pwd = SecretString::new("MyQwertyKey".to_string().into());
        assert!(common_word_section(&pwd).is_some());
    }

    #[test]
    #[serial]
    fn test_common_word_section_clean_password() {
        crate::dictionary::reset_dictionary_for_testing();

        let pwd = SecretString::new("CorrectHorseBatteryStaple".to_string().into());
        assert_eq!(common_word_section(&pwd), None);
    }
}
