use crate::i18n::Language;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Active language that new entity cursors start at
    pub default_language: Language,

    /// Fail the audit when any translation record has validation errors
    pub strict_validation: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("CMS_DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim())
                .context("CMS_DEFAULT_LANGUAGE is not a supported language")?,
            Err(_) => Language::canonical(),
        };

        Ok(Self {
            default_language,
            strict_validation: std::env::var("CMS_STRICT_VALIDATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }
}
