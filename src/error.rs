//! Error types for multilingual content.

use thiserror::Error;

/// Errors surfaced to callers of the content model.
///
/// These are programmer errors: a language code outside the registry or a
/// field the entity type does not declare. Data-quality problems in stored
/// translations never surface here, see [`FieldError`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// The language code is not a supported, enabled language.
    #[error("Unsupported language code: '{code}'")]
    InvalidLanguage { code: String },

    /// The entity type has no per-language field with this name.
    #[error("{entity} has no translated field '{field}'")]
    UnknownField { entity: &'static str, field: String },
}

/// Outcome of reading one per-language field.
///
/// Status and label computations fold every variant into "blank", so none of
/// these ever reach an admin page or an API response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// No translation record exists for the requested language.
    #[error("No translation for '{language}'")]
    NoTranslation { language: &'static str },

    /// The record exists but the field holds no value.
    #[error("Field '{field}' is not set")]
    Unset { field: String },

    /// The stored value does not match the field's declared shape.
    #[error("Malformed value in '{field}': {reason}")]
    Malformed { field: String, reason: String },
}

pub type TranslationResult<T> = Result<T, TranslationError>;
