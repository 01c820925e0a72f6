//! Unit tests for the strength analyzer.
//!
//! Covers the sentinel state, every band boundary, the scenario table
//! from the scoring rules, and monotonicity in length.

use passforge::services::strength_analyzer::score;
use passforge::types::strength::{StrengthResult, StrengthTier};

// ─── Sentinel ───

#[test]
fn test_empty_string_is_sentinel_not_very_weak() {
    let result = score("");
    assert_eq!(result, StrengthResult::not_rated());
    assert_eq!(result.score, 0);
    assert_eq!(result.tier, None);
}

// ─── Band boundaries (inclusive upper bounds) ───

#[test]
fn test_raw_sum_exactly_thirty_is_very_weak() {
    // digit (+15) and symbol (+15), length below 8: raw sum 30
    let result = score("12!@");
    assert_eq!(result.score, 30);
    assert_eq!(result.tier, Some(StrengthTier::VeryWeak));
}

#[test]
fn test_raw_sum_just_above_thirty_is_weak() {
    // lowercase + digit + symbol = 10 + 15 + 15 = 40
    let result = score("a1!");
    assert_eq!(result.score, 50);
    assert_eq!(result.tier, Some(StrengthTier::Weak));
}

#[test]
fn test_raw_sum_exactly_fifty_is_weak() {
    // length 8 (+25), lowercase (+10), digit (+15) = 50
    let result = score("abcdef12");
    assert_eq!(result.score, 50);
    assert_eq!(result.tier, Some(StrengthTier::Weak));
}

#[test]
fn test_raw_sum_exactly_seventy_five_is_medium() {
    // length 12 (+50), lowercase (+10), digit (+15) = 75
    let result = score("abcdefghi123");
    assert_eq!(result.score, 75);
    assert_eq!(result.tier, Some(StrengthTier::Medium));
}

#[test]
fn test_raw_sum_exactly_ninety_is_strong() {
    // length 12 (+50), lower (+10), digit (+15), symbol (+15) = 90
    let result = score("abcdefgh123!");
    assert_eq!(result.score, 90);
    assert_eq!(result.tier, Some(StrengthTier::Strong));
}

#[test]
fn test_full_sum_is_very_strong() {
    // length 12 (+50), all four classes (+50) = 100
    let result = score("Abcdefg123!@");
    assert_eq!(result.score, 100);
    assert_eq!(result.tier, Some(StrengthTier::VeryStrong));
}

// ─── Scenarios ───

#[test]
fn test_mixed_case_digits_length_eight() {
    // 25 + 10 + 10 + 15 = 60 → Medium band, reported as 75
    let result = score("Abc12345");
    assert_eq!(result.score, 75);
    assert_eq!(result.tier, Some(StrengthTier::Medium));
}

#[test]
fn test_lowercase_only_short() {
    let result = score("abc");
    assert_eq!(result.score, 30);
    assert_eq!(result.tier, Some(StrengthTier::VeryWeak));
}

#[test]
fn test_reported_scores_are_band_ceilings() {
    for password in ["a", "a1!", "abcdef12", "Abc12345", "abcdefgh123!", "Abcdefg123!@"] {
        let result = score(password);
        assert!(
            [30, 50, 75, 90, 100].contains(&result.score),
            "score {} for '{}' is not a band ceiling",
            result.score,
            password
        );
    }
}

// ─── Monotonicity ───

#[test]
fn test_longer_password_same_diversity_never_scores_lower() {
    // Same single-class diversity, growing length
    let passwords = ["abcd", "abcdefgh", "abcdefghijkl"];
    let scores: Vec<u8> = passwords.iter().map(|p| score(p).score).collect();
    assert!(
        scores.windows(2).all(|pair| pair[0] <= pair[1]),
        "scores should be non-decreasing: {:?}",
        scores
    );
}

#[test]
fn test_tier_labels_and_colors_are_stable() {
    assert_eq!(score("12!@").tier.unwrap().label_key(), "strength.very_weak");
    assert_eq!(score("12!@").tier.unwrap().color(), "#ff6b6b");
    assert_eq!(
        score("Abcdefg123!@").tier.unwrap().label_key(),
        "strength.very_strong"
    );
    assert_eq!(score("Abcdefg123!@").tier.unwrap().color(), "#007e33");
}
