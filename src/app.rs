//! App Core for PassForge.
//!
//! Central struct holding the database and services, wiring the
//! generate → score → record flow the front-end drives.

use std::sync::Arc;

use crate::database::Database;
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use crate::services::password_generator;
use crate::services::random_source::SystemRandomSource;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::strength_analyzer;
use crate::types::errors::HistoryError;
use crate::types::strength::StrengthResult;

/// Central application struct.
///
/// `HistoryManager` is created on demand via `db.connection()` because it
/// borrows the connection with a lifetime parameter.
pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub localization_engine: LocalizationEngine,
}

impl App {
    /// Creates a new App, opening the database and loading settings and
    /// locales.
    ///
    /// The locale comes from the saved settings; if that locale cannot be
    /// activated (missing file, unsupported), the detected system locale
    /// is used instead, falling back to English.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let mut settings_engine = SettingsEngine::new(None);
        let _ = settings_engine.load();

        let mut localization_engine = LocalizationEngine::with_default_path();
        let _ = localization_engine.initialize();

        let saved_language = settings_engine.get_settings().general.language.clone();
        if localization_engine.set_locale(&saved_language).is_err() {
            let detected = localization_engine.detect_system_locale();
            let _ = localization_engine.set_locale(&detected);
        }

        Ok(Self {
            db,
            settings_engine,
            localization_engine,
        })
    }

    /// Generates one password from the current settings, scores it, and
    /// records it in history. Returns the password with its strength.
    ///
    /// A degenerate empty result (no class enabled in a hand-edited
    /// settings file) is returned as-is and not recorded; placeholder
    /// output never lands in history.
    pub fn generate_password(&mut self) -> Result<(String, StrengthResult), HistoryError> {
        let generator = &self.settings_engine.get_settings().generator;
        let request = generator.to_request();
        let snapshot = generator.snapshot();

        let mut rng = SystemRandomSource::new();
        let password = password_generator::generate(&request, &mut rng);
        let strength = strength_analyzer::score(&password);

        if !password.is_empty() {
            let mut history = HistoryManager::new(self.db.connection());
            history.record(&password, &snapshot, strength.tier)?;
        }

        Ok((password, strength))
    }

    /// Switches the UI language and persists the choice.
    pub fn set_language(&mut self, lang: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.localization_engine.set_locale(lang)?;
        self.settings_engine
            .set_value("general.language", serde_json::Value::String(lang.to_string()))?;
        Ok(())
    }

    /// Convenience lookup for a translation without parameters.
    pub fn tr(&self, key: &str) -> String {
        self.localization_engine.t(key, None)
    }
}
