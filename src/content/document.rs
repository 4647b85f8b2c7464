//! JSON documents describing stored entities.
//!
//! ```json
//! {
//!   "id": 42,
//!   "created_at": "2024-03-01T12:00:00Z",
//!   "attributes": { "material": "oak" },
//!   "translations": { "ru": { "name": "Стол" }, "uz": { "name": "Stol" } }
//! }
//! ```

use crate::content::{EntityType, TranslatedEntity, TranslationRecord};
use crate::error::TranslationResult;
use crate::i18n::Language;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityDocument {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub attributes: Map<String, Value>,

    #[serde(default)]
    pub translations: BTreeMap<String, Map<String, Value>>,
}

impl TranslatedEntity {
    /// Build an entity from a stored document.
    ///
    /// Fails on language codes outside the registry. Records are taken as
    /// stored: malformed values and undeclared fields are kept and show up in
    /// [`TranslatedEntity::validate`].
    pub fn from_document(
        kind: &'static EntityType,
        document: EntityDocument,
        language: Language,
    ) -> TranslationResult<Self> {
        let mut entity = TranslatedEntity::in_language(kind, language);
        if let Some(id) = document.id {
            entity.mark_persisted(id);
        }
        if let Some(created_at) = document.created_at {
            entity.set_created_at(created_at);
        }
        for (name, value) in document.attributes {
            entity.set_attribute(name, value);
        }
        for (code, fields) in document.translations {
            let language = Language::from_code(&code)?;
            entity.restore_translation(language, TranslationRecord::from(fields));
        }
        Ok(entity)
    }
}

/// Read a JSON array of entity documents from `path`.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<EntityDocument>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read documents from {}", path.display()))?;
    let documents: Vec<EntityDocument> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse documents in {}", path.display()))?;
    debug!("Loaded {} documents from {}", documents.len(), path.display());
    Ok(documents)
}
