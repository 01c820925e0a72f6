// PassForge services
// Services provide core functionality: password generation, strength analysis,
// secure randomness, settings, localization, and clipboard hand-off.

pub mod clipboard;
pub mod localization_engine;
pub mod password_generator;
pub mod random_source;
pub mod settings_engine;
pub mod strength_analyzer;
