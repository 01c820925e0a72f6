//! Password history entries and generation snapshots.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use super::password::GenerationRequest;
use super::strength::StrengthTier;

/// The generator settings in effect when a password was produced.
///
/// Stored alongside each history entry so the user can see how a
/// password was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl GenerationSnapshot {
    /// Rebuilds the generation request this snapshot describes.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::from_flags(
            self.length,
            self.lowercase,
            self.uppercase,
            self.digits,
            self.symbols,
            self.exclude_similar,
        )
    }
}

/// A single saved password with its creation context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub password: String,
    /// UNIX timestamp in seconds.
    pub created_at: i64,
    pub snapshot: GenerationSnapshot,
    pub tier: Option<StrengthTier>,
}

impl Drop for HistoryEntry {
    /// Wipes the stored password before the memory is released.
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
