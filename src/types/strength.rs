//! Strength tiers and scoring results.

use serde::{Deserialize, Serialize};

/// Qualitative strength band for a scored password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Stable snake_case name, used as the database column value.
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "very_weak",
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
            StrengthTier::VeryStrong => "very_strong",
        }
    }

    /// Parses a stable name back into a tier. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "very_weak" => Some(StrengthTier::VeryWeak),
            "weak" => Some(StrengthTier::Weak),
            "medium" => Some(StrengthTier::Medium),
            "strong" => Some(StrengthTier::Strong),
            "very_strong" => Some(StrengthTier::VeryStrong),
            _ => None,
        }
    }

    /// Translation key for the tier label.
    pub fn label_key(self) -> String {
        format!("strength.{}", self.as_str())
    }

    /// Display color for the strength meter.
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "#ff6b6b",
            StrengthTier::Weak => "#ff9500",
            StrengthTier::Medium => "#ffd700",
            StrengthTier::Strong => "#00c851",
            StrengthTier::VeryStrong => "#007e33",
        }
    }
}

/// Result of scoring a password.
///
/// `tier` is `None` for the "no password yet" sentinel (empty input),
/// in which case `score` is 0. For rated passwords, `score` is one of
/// the five band ceilings (30, 50, 75, 90, 100), not the raw sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub score: u8,
    pub tier: Option<StrengthTier>,
}

impl StrengthResult {
    /// The sentinel result for input that is not a password yet.
    pub fn not_rated() -> Self {
        Self {
            score: 0,
            tier: None,
        }
    }

    /// Translation key for the label to display.
    pub fn label_key(&self) -> String {
        match self.tier {
            Some(tier) => tier.label_key(),
            None => "strength.not_rated".to_string(),
        }
    }

    /// Meter color; gray for the sentinel state.
    pub fn color(&self) -> &'static str {
        match self.tier {
            Some(tier) => tier.color(),
            None => "#9ca3af",
        }
    }
}
