//! Multilingual website content.
//!
//! - `catalog`: type descriptors for every translatable record
//! - `field`: per-language field kinds and value resolution
//! - `entity`: `TranslatedEntity`, its cursor, status and labels
//! - `admin`, `serialize`, `media`: consumers of the model
//! - `document`: JSON documents and loading

pub mod admin;
pub mod catalog;
mod document;
mod entity;
mod field;
pub mod media;
pub mod serialize;

pub use catalog::EntityType;
pub use document::{load_documents, EntityDocument};
pub use entity::{TranslatedEntity, TranslationRecord, TranslationState, TranslationStatus};
pub use field::{FieldKind, FieldSpec, FieldValue};
