//! Interactive terminal analyzer: prompts for a password without echoing
//! it, then prints the analysis report.

use std::io::{self, Write};

use crossterm::event::{Event, KeyCode, KeyModifiers, read};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use pwd_entropy::{AnalysisResult, analyze_password, init_dictionary};
use secrecy::SecretString;

/// Guard that ensures raw mode is disabled when dropped.
struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { was_enabled: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.was_enabled {
            let _ = disable_raw_mode();
            self.was_enabled = false;
        }
    }
}

/// Reads a password from the terminal without echoing it.
///
/// Enter submits, Backspace edits, Ctrl+C aborts with an `Interrupted`
/// error. Requires an interactive terminal for raw mode.
fn read_password(prompt: &str) -> io::Result<SecretString> {
    print!("{prompt}");
    io::stdout().flush()?;

    let guard = RawModeGuard::new()?;

    let mut input = String::new();
    loop {
        match read()? {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "cancelled"));
                }
                KeyCode::Enter => break,
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            },
            _ => {}
        }
    }

    // Disable raw mode BEFORE printing the newline
    drop(guard);
    println!();

    Ok(SecretString::new(input.into()))
}

fn print_report(result: &AnalysisResult) {
    println!();
    println!("--- Password Analysis ---");
    println!("Entropy: {:.2} bits", result.entropy);
    println!("Estimated Crack Time: {}", result.crack_time);
    println!("Strength: {}", result.strength);
    if !result.warnings.is_empty() {
        println!("Warnings:");
        for warning in &result.warnings {
            println!("- {warning}");
        }
    }
}

fn main() {
    // A dictionary file is optional; the built-in word list covers the rest.
    if std::env::var("PWD_DICTIONARY_PATH").is_ok() {
        if let Err(e) = init_dictionary() {
            eprintln!("Failed to load dictionary: {e}");
            std::process::exit(1);
        }
    }

    let password = match read_password("Enter your password: ") {
        Ok(password) => password,
        Err(e) => {
            eprintln!("Failed to read password: {e}");
            std::process::exit(1);
        }
    };

    let result = analyze_password(&password);
    print_report(&result);
}
