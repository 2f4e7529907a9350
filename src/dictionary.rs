//! Weak-word dictionary and leet de-obfuscation.
//!
//! Detection always works against a built-in word list; an external file
//! can extend it once at startup.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static COMMON_WORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Words flagged when no dictionary file has been loaded.
pub const DEFAULT_WORDS: [&str; 7] = [
    "password", "admin", "user", "login", "welcome", "qwerty", "abc123",
];

/// Characters commonly substituted for letters, and the letters they stand
/// in for.
const LEET_MAP: [(char, char); 9] = [
    ('0', 'o'),
    ('1', 'l'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
    ('@', 'a'),
    ('$', 's'),
    ('!', 'i'),
];

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Returns the dictionary file path.
///
/// Priority:
/// 1. Environment variable `PWD_DICTIONARY_PATH`
/// 2. Default path `./assets/common-words.txt`
pub fn get_dictionary_path() -> PathBuf {
    std::env::var("PWD_DICTIONARY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-words.txt"))
}

/// Loads the weak-word dictionary from an external file.
///
/// Until this succeeds, detection falls back to [`DEFAULT_WORDS`], so
/// calling it is optional.
///
/// # Environment Variable
///
/// Set `PWD_DICTIONARY_PATH` to specify a custom dictionary file location.
/// If not set, defaults to `./assets/common-words.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_dictionary() -> Result<usize, DictionaryError> {
    let path = get_dictionary_path();
    init_dictionary_from_path(&path)
}

/// Loads the weak-word dictionary from a specific file path.
///
/// One lowercased word per line; blank lines are skipped. Idempotent: once
/// a dictionary is loaded, later calls return the loaded count without
/// touching the file.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_dictionary_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, DictionaryError> {
    {
        let guard = COMMON_WORDS.read().unwrap();
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: FileNotFound {:?}", path);
        return Err(DictionaryError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: Empty file {:?}", path);
        return Err(DictionaryError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = COMMON_WORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Dictionary initialized: {} words from {:?}", count, path);

    Ok(count)
}

/// Checks whether `text` contains any dictionary word as a substring.
///
/// Case-insensitive, and deliberately not anchored to word boundaries:
/// `"password123"` matches `"password"`.
pub fn contains_common_word(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let guard = COMMON_WORDS.read().unwrap();
    match guard.as_ref() {
        Some(words) => words.iter().any(|w| lowered.contains(w.as_str())),
        None => DEFAULT_WORDS.iter().any(|w| lowered.contains(w)),
    }
}

/// Reverses common letter substitutions in a lowercased copy of `text`.
///
/// Characters outside the substitution table pass through unchanged, so the
/// result has the same length as the input.
pub fn leet_substitute(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            LEET_MAP
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect()
}

/// Resets the dictionary for testing purposes.
#[cfg(test)]
pub fn reset_dictionary_for_testing() {
    let mut guard = COMMON_WORDS.write().unwrap();
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_dictionary_path_default() {
        remove_env("PWD_DICTIONARY_PATH");

        let path = get_dictionary_path();
        assert_eq!(path, PathBuf::from("./assets/common-words.txt"));
    }

    #[test]
    #[serial]
    fn test_get_dictionary_path_from_env() {
        let custom_path = "/custom/path/words.txt";
        set_env("PWD_DICTIONARY_PATH", custom_path);

        let path = get_dictionary_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_DICTIONARY_PATH");
    }

    #[test]
    #[serial]
    fn test_init_dictionary_file_not_found() {
        reset_dictionary_for_testing();
        set_env("PWD_DICTIONARY_PATH", "/nonexistent/path/words.txt");

        let result = init_dictionary();
        assert!(matches!(result, Err(DictionaryError::FileNotFound(_))));

        remove_env("PWD_DICTIONARY_PATH");
    }

    #[test]
    #[serial]
    fn test_init_dictionary_empty_file() {
        reset_dictionary_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_DICTIONARY_PATH", path);

        let result = init_dictionary();
        assert!(matches!(result, Err(DictionaryError::EmptyFile)));

        remove_env("PWD_DICTIONARY_PATH");
    }

    #[test]
    #[serial]
    fn test_init_dictionary_success() {
        reset_dictionary_for_testing();
        let temp_file = setup_with_tempfile(&["hunter2", "letmein"]);

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_DICTIONARY_PATH", path);

        let result = init_dictionary();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 2);

        remove_env("PWD_DICTIONARY_PATH");
        reset_dictionary_for_testing();
    }

    #[test]
    #[serial]
    fn test_loaded_words_extend_detection() {
        reset_dictionary_for_testing();
        let temp_file = setup_with_tempfile(&["letmein"]);

        let _ = init_dictionary_from_path(temp_file.path());

        assert!(contains_common_word("xxletmein99"));
        assert!(contains_common_word("LetMeIn"));

        reset_dictionary_for_testing();
    }

    #[test]
    #[serial]
    fn test_contains_common_word_defaults() {
        reset_dictionary_for_testing();

        assert!(contains_common_word("password"));
        assert!(contains_common_word("mypassword123"));
        assert!(contains_common_word("PASSWORD"));
        assert!(!contains_common_word("correct horse battery staple"));
    }

    #[test]
    #[serial]
    fn test_contains_common_word_substring_not_word_boundary() {
        reset_dictionary_for_testing();

        // containment is deliberate: no word boundaries
        assert!(contains_common_word("passwordabc"));
        assert!(contains_common_word("xadminx"));
    }

    #[test]
    fn test_leet_substitute_basic() {
        assert_eq!(leet_substitute("p4ssw0rd"), "password");
        assert_eq!(leet_substitute("P@$$w0rd"), "password");
        assert_eq!(leet_substitute("l33t"), "leet");
    }

    #[test]
    fn test_leet_substitute_unmapped_passthrough() {
        assert_eq!(leet_substitute("abc xyz"), "abc xyz");
        assert_eq!(leet_substitute("ABC"), "abc");
        assert_eq!(leet_substitute("98%"), "98%");
    }

    #[test]
    fn test_leet_substitute_empty() {
        assert_eq!(leet_substitute(""), "");
    }
}
