//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for codes present and enabled in the
//! registry, so every API that takes a `Language` is infallible with respect
//! to language validity. String codes coming from callers go through
//! [`Language::from_code`].

use crate::error::{TranslationError, TranslationResult};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "ru", "uz")
    code: &'static str,
}

impl Language {
    pub const RUSSIAN: Language = Language { code: "ru" };

    pub const UZBEK: Language = Language { code: "uz" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err(TranslationError::InvalidLanguage)` otherwise
    pub fn from_code(code: &str) -> TranslationResult<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            _ => Err(TranslationError::InvalidLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// Get the canonical language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// All enabled languages in fallback order.
    pub fn supported() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Upper-case label for admin status cells (e.g., "RU").
    pub fn short_label(&self) -> &'static str {
        self.config().short_label
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
