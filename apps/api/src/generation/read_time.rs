//! Read-time estimation for generated bodies.
//!
//! 150 words per minute is the fixed heuristic for technical prose; it is
//! not configurable.

const WORDS_PER_MINUTE: f64 = 150.0;

/// Estimated reading minutes for `content`, always at least 1.
pub fn read_time_minutes(content: &str) -> u64 {
    let words = content.split_whitespace().count();
    ((words as f64 / WORDS_PER_MINUTE).round() as u64).max(1)
}

/// Human-readable label such as `"3 min read"`.
pub fn read_time_label(content: &str) -> String {
    format!("{} min read", read_time_minutes(content))
}
