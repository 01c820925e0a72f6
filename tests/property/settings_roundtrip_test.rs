//! Property-based tests for settings persistence.
//!
//! These tests verify that any valid settings value written through the
//! engine is read back unchanged by a fresh engine instance.

use proptest::prelude::*;
use tempfile::TempDir;

use passforge::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use passforge::types::settings::{AppSettings, GeneralSettings, GeneratorSettings};

/// Strategy for generating valid settings: a supported language and at
/// least one enabled character class.
fn arb_settings() -> impl Strategy<Value = AppSettings> {
    (
        prop_oneof![Just("en"), Just("ar"), Just("de"), Just("tr")],
        1usize..=128,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_filter_map(
            "at least one class must be enabled",
            |(language, length, lower, upper, digits, symbols, exclude_similar)| {
                if !(lower || upper || digits || symbols) {
                    return None;
                }
                Some(AppSettings {
                    general: GeneralSettings {
                        language: language.to_string(),
                    },
                    generator: GeneratorSettings {
                        length,
                        lowercase: lower,
                        uppercase: upper,
                        digits,
                        symbols,
                        exclude_similar,
                    },
                })
            },
        )
}

// **Property 1: JSON round trip**
//
// *For any* valid settings, serializing to JSON and deserializing SHALL
// produce identical settings.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string_pretty(&settings)
            .expect("settings should serialize");
        let parsed: AppSettings = serde_json::from_str(&json)
            .expect("settings should deserialize");
        prop_assert_eq!(parsed, settings);
    }
}

// **Property 2: Engine file round trip**
//
// *For any* valid settings written to disk, a fresh engine SHALL load
// identical settings.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_file_roundtrip(settings in arb_settings()) {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("settings.json");

        std::fs::write(
            &path,
            serde_json::to_string_pretty(&settings).expect("serialize"),
        )
        .expect("write settings file");

        let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
        let loaded = engine.load().expect("load should succeed");
        prop_assert_eq!(loaded, settings);
    }
}

// **Property 3: Length updates survive a reload**
//
// *For any* valid length, setting it through the engine and reloading
// from a fresh instance SHALL return the same length.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn set_length_survives_reload(length in 1usize..=128) {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("settings.json");
        let path_str = path.to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path_str.clone()));
        engine.load().expect("load");
        engine
            .set_value("generator.length", serde_json::json!(length))
            .expect("set_value");

        let mut fresh = SettingsEngine::new(Some(path_str));
        let loaded = fresh.load().expect("reload");
        prop_assert_eq!(loaded.generator.length, length);
    }
}
