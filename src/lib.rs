//! Content model for a multilingual corporate website.
//!
//! Entities such as categories, projects, services and galleries keep their
//! human-readable fields per language. This crate resolves those fields,
//! labels entities across languages, and reports which languages are filled.

pub mod config;
pub mod content;
pub mod error;
pub mod i18n;

pub use content::{TranslatedEntity, TranslationState, TranslationStatus};
pub use error::{FieldError, TranslationError};
pub use i18n::Language;
