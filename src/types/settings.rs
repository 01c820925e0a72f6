//! Application settings.

use serde::{Deserialize, Serialize};

use super::history::GenerationSnapshot;
use super::password::GenerationRequest;

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub generator: GeneratorSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            generator: GeneratorSettings::default(),
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub language: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
        }
    }
}

/// Settings controlling password generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorSettings {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    #[serde(default)]
    pub exclude_similar: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
        }
    }
}

impl GeneratorSettings {
    /// Number of currently enabled character classes.
    pub fn enabled_class_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.symbols]
            .iter()
            .filter(|enabled| **enabled)
            .count()
    }

    /// Builds the generation request these settings describe.
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

    /// Captures the settings for storage alongside a history entry.
    pub fn snapshot(&self) -> GenerationSnapshot {
        GenerationSnapshot {
            length: self.length,
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            digits: self.digits,
            symbols: self.symbols,
            exclude_similar: self.exclude_similar,
        }
    }
}
