//! Crack-time estimation and duration formatting.

/// Assumed attacker guess rate for the default analysis.
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 1e10;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Estimates how long exhausting the keyspace would take and formats it.
///
/// `seconds = 2^entropy / guesses_per_second`. Beyond roughly 1024 bits the
/// power is not representable in an `f64`; the value saturates to
/// [`f64::MAX`] and lands in the "years" bucket instead of failing.
pub fn estimate_crack_time(entropy_bits: f64, guesses_per_second: f64) -> String {
    let seconds = entropy_bits.exp2() / guesses_per_second;
    if seconds.is_finite() {
        format_duration(seconds)
    } else {
        format_duration(f64::MAX)
    }
}

/// Formats a duration in seconds using the largest sensible unit.
///
/// Buckets are half-open: exactly 60 s formats as minutes, exactly 3600 s
/// as hours, and so on.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        "less than a second".to_string()
    } else if seconds < MINUTE {
        format!("{seconds:.2} seconds")
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else {
        format!("{:.2} years", seconds / YEAR)
    }
}
