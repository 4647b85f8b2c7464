//! Language registry: Single source of truth for all supported languages.
//!
//! The registry order is the fallback order: status reports, display labels
//! and API payloads all iterate languages in the order listed here. It uses a
//! `OnceLock` singleton so it is initialized once and never mutated.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "ru", "uz")
    pub code: &'static str,

    /// Native name of the language (e.g., "Русский", "Oʻzbekcha")
    pub native_name: &'static str,

    /// Upper-case label used in admin status cells (e.g., "RU")
    pub short_label: &'static str,

    /// Whether this is the canonical language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in fallback order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical language.
    /// The registry is a compile-time table, so this is a configuration bug.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// The website is published in Russian (canonical) and Uzbek.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ru",
            native_name: "Русский",
            short_label: "RU",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "uz",
            native_name: "Oʻzbekcha",
            short_label: "UZ",
            is_canonical: false,
            enabled: true,
        },
    ]
}
