//! Password strength analysis.
//!
//! A heuristic additive point system, not an entropy estimate. The
//! reported score is a discretized band ceiling (30/50/75/90/100), not
//! the raw sum; callers render it directly as a meter percentage.

use crate::types::strength::{StrengthResult, StrengthTier};

/// Scores a password and maps it onto one of five strength bands.
///
/// Raw points: length ≥ 8 → +25, length ≥ 12 → +25 (cumulative),
/// lowercase present → +10, uppercase present → +10, digit present → +15,
/// any character outside `[A-Za-z0-9]` → +15.
///
/// Banding uses inclusive upper bounds: a raw sum of exactly 30 is
/// still `VeryWeak`. Empty input short-circuits to the "no password
/// yet" sentinel instead of being scored as a zero-length password.
pub fn score(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::not_rated();
    }

    let length = password.chars().count();
    let mut raw: u8 = 0;

    if length >= 8 {
        raw += 25;
    }
    if length >= 12 {
        raw += 25;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        raw += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        raw += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        raw += 15;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        raw += 15;
    }

    let (score, tier) = match raw {
        0..=30 => (30, StrengthTier::VeryWeak),
        31..=50 => (50, StrengthTier::Weak),
        51..=75 => (75, StrengthTier::Medium),
        76..=90 => (90, StrengthTier::Strong),
        _ => (100, StrengthTier::VeryStrong),
    };

    StrengthResult {
        score,
        tier: Some(tier),
    }
}
