//! Password analyzer - main analysis pipeline.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::crack_time::{DEFAULT_GUESSES_PER_SECOND, estimate_crack_time};
use crate::entropy::estimate_entropy;
use crate::sections::{
    SectionWarning, common_word_section, length_section, obfuscation_section,
};
use crate::types::{AnalysisResult, StrengthVerdict};

/// Analyzes a password at the default guess rate of 10^10/s.
///
/// Pure and total: always returns a result, including for the empty string.
///
/// # Arguments
/// * `password` - The password to analyze
///
/// # Returns
/// An [`AnalysisResult`] with entropy, crack time, verdict and warnings.
pub fn analyze_password(password: &SecretString) -> AnalysisResult {
    analyze_password_with_rate(password, DEFAULT_GUESSES_PER_SECOND)
}

/// Analyzes a password assuming a caller-chosen attacker guess rate.
///
/// The rate only affects the crack-time string; entropy, verdict and
/// warnings are rate-independent.
pub fn analyze_password_with_rate(
    password: &SecretString,
    guesses_per_second: f64,
) -> AnalysisResult {
    let entropy = estimate_entropy(password.expose_secret());
    let crack_time = estimate_crack_time(entropy, guesses_per_second);

    // Orchestrator: execute sections in sequence; warning order is fixed
    let sections: [fn(&SecretString) -> SectionWarning; 3] =
        [length_section, common_word_section, obfuscation_section];

    let mut warnings = Vec::new();
    for section_fn in sections {
        if let Some(warning) = section_fn(password) {
            warnings.push(warning);
        }
    }

    AnalysisResult {
        entropy,
        crack_time,
        strength: StrengthVerdict::from_entropy(entropy),
        warnings,
    }
}

/// Async version that sends the analysis result via channel.
///
/// Waits out a short debounce window first; cancelling the token during
/// that window suppresses the analysis and nothing is sent.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("analysis cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(Duration::from_millis(300)) => {}
    }

    let result = analyze_password(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
