//! API payloads for translated entities.
//!
//! Translations are emitted as `{ "<lang>": { field: value, ... }, ... }` with
//! a key only for languages that have a translation record.

use crate::content::TranslatedEntity;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Per-language fields of `entity`, keyed by language code in fallback order.
///
/// Every declared field appears in each emitted language; fields the record
/// does not hold are `null`.
pub fn translations_payload(entity: &TranslatedEntity) -> Map<String, Value> {
    let mut payload = Map::new();
    for language in entity.translated_languages() {
        let Some(record) = entity.translation(language) else {
            continue;
        };
        let fields: Map<String, Value> = entity
            .kind()
            .fields
            .iter()
            .map(|spec| {
                let value = record.get(spec.name).cloned().unwrap_or(Value::Null);
                (spec.name.to_string(), value)
            })
            .collect();
        payload.insert(language.code().to_string(), Value::Object(fields));
    }
    payload
}

/// Serialized form of an entity for the read API.
#[derive(Debug, Clone, Serialize)]
pub struct EntityPayload {
    pub id: Option<i64>,
    pub translations: Map<String, Value>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<&TranslatedEntity> for EntityPayload {
    fn from(entity: &TranslatedEntity) -> Self {
        Self {
            id: entity.id(),
            translations: translations_payload(entity),
            created_at: entity.created_at(),
            attributes: entity.attributes().clone(),
        }
    }
}
