//! Length section - flags very short passwords.

use secrecy::{ExposeSecret, SecretString};

use super::SectionWarning;

const MIN_LENGTH: usize = 8;

/// Flags passwords shorter than eight characters.
pub fn length_section(password: &SecretString) -> SectionWarning {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some("Password is very short".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert_eq!(
            length_section(&pwd),
            Some("Password is very short".to_string())
        );
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(length_section(&pwd).is_some());
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // eight two-byte characters are still eight characters
        let pwd = SecretString::new("éééééééé".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }
}
