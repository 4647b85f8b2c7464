//! Translated entities: invariant attributes plus per-language records.
//!
//! An entity carries a current-language cursor for consumers that read
//! per-language fields implicitly. Status reports, labels and payloads never
//! move the cursor: they resolve each language explicitly through
//! [`TranslatedEntity::primary_field_in`] and friends, so they only need
//! `&self`.

use crate::content::catalog::EntityType;
use crate::content::field::{FieldSpec, FieldValue};
use crate::error::{FieldError, TranslationError, TranslationResult};
use crate::i18n::{Language, TranslationMetrics, TranslationValidator, ValidationReport};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Per-language field values of one entity in one language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationRecord {
    fields: Map<String, Value>,
}

impl TranslationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for TranslationRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Completeness of one language for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    Filled,
    Missing,
}

/// Completeness of every supported language, in fallback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStatus {
    entries: Vec<(Language, TranslationState)>,
}

impl TranslationStatus {
    pub fn get(&self, language: Language) -> Option<TranslationState> {
        self.entries
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, state)| *state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, TranslationState)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_complete(&self) -> bool {
        self.entries
            .iter()
            .all(|(_, state)| *state == TranslationState::Filled)
    }

    pub fn filled_languages(&self) -> Vec<Language> {
        self.iter()
            .filter(|(_, state)| *state == TranslationState::Filled)
            .map(|(lang, _)| lang)
            .collect()
    }
}

impl fmt::Display for TranslationStatus {
    /// Renders as `RU: ✓ | UZ: ✗`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (language, state)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            let glyph = match state {
                TranslationState::Filled => '✓',
                TranslationState::Missing => '✗',
            };
            write!(f, "{}: {}", language.short_label(), glyph)?;
        }
        Ok(())
    }
}

/// A record with language-invariant attributes and per-language translations.
#[derive(Debug, Clone)]
pub struct TranslatedEntity {
    kind: &'static EntityType,
    id: Option<i64>,
    created_at: Option<DateTime<Utc>>,
    attributes: Map<String, Value>,
    translations: BTreeMap<Language, TranslationRecord>,
    current: Language,
}

impl TranslatedEntity {
    /// Create an unpersisted entity whose cursor starts at the canonical language.
    pub fn new(kind: &'static EntityType) -> Self {
        Self::in_language(kind, Language::default())
    }

    /// Create an unpersisted entity whose cursor starts at `language`.
    pub fn in_language(kind: &'static EntityType, language: Language) -> Self {
        Self {
            kind,
            id: None,
            created_at: None,
            attributes: Map::new(),
            translations: BTreeMap::new(),
            current: language,
        }
    }

    pub fn kind(&self) -> &'static EntityType {
        self.kind
    }

    // ==================== Identity & Invariant Attributes ====================

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Record the identity assigned by storage on first save.
    pub fn mark_persisted(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = Some(created_at);
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    // ==================== Cursor ====================

    pub fn current_language(&self) -> Language {
        self.current
    }

    pub fn set_current_language(&mut self, language: Language) {
        self.current = language;
    }

    /// Run `f` with the cursor set to `language`.
    ///
    /// The previous cursor is restored when `f` returns, including when it
    /// returns an `Err` or unwinds. Whatever `f` returns is passed through.
    pub fn with_language<T>(&mut self, language: Language, f: impl FnOnce(&mut Self) -> T) -> T {
        let mut guard = CursorGuard::swap(self, language);
        f(&mut *guard.entity)
    }

    /// [`with_language`](Self::with_language) for an unvalidated language code.
    pub fn try_with_language<T>(
        &mut self,
        code: &str,
        f: impl FnOnce(&mut Self) -> T,
    ) -> TranslationResult<T> {
        let language = Language::from_code(code)?;
        Ok(self.with_language(language, f))
    }

    // ==================== Translations ====================

    /// Whether a translation record exists for `code`.
    ///
    /// A record may exist with every field blank; see
    /// [`translation_status`](Self::translation_status) for completeness.
    pub fn has_translation(&self, code: &str) -> TranslationResult<bool> {
        let language = Language::from_code(code)?;
        Ok(self.has_translation_for(language))
    }

    pub fn has_translation_for(&self, language: Language) -> bool {
        self.translations.contains_key(&language)
    }

    /// Languages that have a translation record, in fallback order.
    pub fn translated_languages(&self) -> Vec<Language> {
        Language::supported()
            .into_iter()
            .filter(|lang| self.has_translation_for(*lang))
            .collect()
    }

    pub fn translation(&self, language: Language) -> Option<&TranslationRecord> {
        self.translations.get(&language)
    }

    /// Write a per-language field in the current language.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> TranslationResult<()> {
        self.set_field_in(self.current, name, value)
    }

    /// Write a per-language field, creating the language's record on first write.
    pub fn set_field_in(
        &mut self,
        language: Language,
        name: &str,
        value: impl Into<Value>,
    ) -> TranslationResult<()> {
        let spec = self.declared_field(name)?;
        debug!(entity = self.kind.name, language = %language, field = spec.name, "Setting translated field");
        self.translations
            .entry(language)
            .or_default()
            .set(spec.name, value);
        Ok(())
    }

    /// Install a whole record for `language`, replacing any existing one.
    pub fn insert_translation(
        &mut self,
        language: Language,
        record: TranslationRecord,
    ) -> TranslationResult<()> {
        if let Some(field) = record.fields().keys().find(|name| self.kind.field(name).is_none()) {
            return Err(TranslationError::UnknownField {
                entity: self.kind.name,
                field: field.clone(),
            });
        }
        self.translations.insert(language, record);
        Ok(())
    }

    /// Install a stored record as-is, undeclared fields included, so the
    /// validator can report them.
    pub(crate) fn restore_translation(&mut self, language: Language, record: TranslationRecord) {
        self.translations.insert(language, record);
    }

    /// Drop the record for `language`. This is the only way a record goes away
    /// short of dropping the entity.
    pub fn remove_translation(&mut self, language: Language) -> Option<TranslationRecord> {
        self.translations.remove(&language)
    }

    /// Read a per-language field in the current language.
    pub fn field(&self, name: &str) -> TranslationResult<Result<FieldValue, FieldError>> {
        self.field_in(self.current, name)
    }

    /// Read a per-language field in `language`.
    ///
    /// The outer result rejects fields the type does not declare; the inner
    /// one reports what was found in storage.
    pub fn field_in(
        &self,
        language: Language,
        name: &str,
    ) -> TranslationResult<Result<FieldValue, FieldError>> {
        let spec = self.declared_field(name)?;
        Ok(self.resolve_in(language, spec))
    }

    fn resolve_in(&self, language: Language, spec: &FieldSpec) -> Result<FieldValue, FieldError> {
        let record = self
            .translations
            .get(&language)
            .ok_or(FieldError::NoTranslation {
                language: language.code(),
            })?;
        spec.resolve(record.get(spec.name))
    }

    fn declared_field(&self, name: &str) -> TranslationResult<&'static FieldSpec> {
        self.kind
            .field(name)
            .ok_or_else(|| TranslationError::UnknownField {
                entity: self.kind.name,
                field: name.to_string(),
            })
    }

    // ==================== Labels & Status ====================

    /// Headline value in the current language.
    pub fn primary_field(&self) -> Option<String> {
        self.primary_field_in(self.current)
    }

    /// First non-blank primary candidate in `language`.
    ///
    /// Malformed stored values are treated as blank. This has no side
    /// effects; only [`translation_status`](Self::translation_status) reports them.
    pub fn primary_field_in(&self, language: Language) -> Option<String> {
        self.resolve_primary(language).0
    }

    /// Primary value plus the malformed candidates skipped on the way to it.
    fn resolve_primary(&self, language: Language) -> (Option<String>, Vec<FieldError>) {
        let mut malformed = Vec::new();
        for spec in self.kind.primary_fields() {
            match self.resolve_in(language, spec) {
                Ok(value) => {
                    if let Some(display) = value.as_display() {
                        return (Some(display), malformed);
                    }
                }
                Err(err @ FieldError::Malformed { .. }) => malformed.push(err),
                Err(_) => {}
            }
        }
        (None, malformed)
    }

    /// Filled/missing state of every supported language.
    ///
    /// Records the outcome in the global [`TranslationMetrics`].
    pub fn translation_status(&self) -> TranslationStatus {
        self.translation_status_recorded(TranslationMetrics::global())
    }

    /// [`translation_status`](Self::translation_status) recording into `metrics`.
    pub fn translation_status_recorded(&self, metrics: &TranslationMetrics) -> TranslationStatus {
        let entries = Language::supported()
            .into_iter()
            .map(|language| {
                let (primary, malformed) = if self.has_translation_for(language) {
                    self.resolve_primary(language)
                } else {
                    (None, Vec::new())
                };
                for err in &malformed {
                    warn!(
                        entity = self.kind.name,
                        id = ?self.id,
                        language = %language,
                        "Treating malformed translation as blank: {}",
                        err
                    );
                    metrics.record_malformed();
                }
                let state = if primary.is_some() {
                    metrics.record_filled();
                    TranslationState::Filled
                } else {
                    metrics.record_missing();
                    TranslationState::Missing
                };
                (language, state)
            })
            .collect();

        TranslationStatus { entries }
    }

    /// Human-facing identification, e.g. `Стол (ru) / Stol (uz)`.
    pub fn display_label(&self) -> String {
        let labels: Vec<String> = Language::supported()
            .into_iter()
            .filter_map(|language| {
                self.primary_field_in(language)
                    .map(|value| format!("{} ({})", value, language))
            })
            .collect();

        if labels.is_empty() {
            self.placeholder_label()
        } else {
            labels.join(" / ")
        }
    }

    /// `Category #3`, or `New Category` before the first save.
    pub fn placeholder_label(&self) -> String {
        match self.id {
            Some(id) => format!("{} #{}", self.kind.name, id),
            None => format!("New {}", self.kind.name),
        }
    }

    /// Validation report for every translated language, in fallback order.
    pub fn validate(&self) -> Vec<(Language, ValidationReport)> {
        self.translated_languages()
            .into_iter()
            .filter_map(|language| {
                self.translations
                    .get(&language)
                    .map(|record| (language, TranslationValidator::validate(self.kind, record)))
            })
            .collect()
    }
}

impl fmt::Display for TranslatedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

/// Restores an entity's cursor when dropped.
struct CursorGuard<'a> {
    entity: &'a mut TranslatedEntity,
    saved: Language,
}

impl<'a> CursorGuard<'a> {
    fn swap(entity: &'a mut TranslatedEntity, language: Language) -> Self {
        let saved = std::mem::replace(&mut entity.current, language);
        Self { entity, saved }
    }
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        self.entity.current = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::{CATEGORY, PROJECT, PROJECT_SEO};
    use serde_json::json;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn category(ru: Option<&str>, uz: Option<&str>) -> TranslatedEntity {
        let mut entity = TranslatedEntity::new(&CATEGORY);
        if let Some(name) = ru {
            entity.set_field_in(Language::RUSSIAN, "name", name).unwrap();
        }
        if let Some(name) = uz {
            entity.set_field_in(Language::UZBEK, "name", name).unwrap();
        }
        entity
    }

    // ==================== Cursor Tests ====================

    #[test]
    fn test_cursor_defaults_to_canonical() {
        let entity = TranslatedEntity::new(&CATEGORY);
        assert_eq!(entity.current_language(), Language::RUSSIAN);
    }

    #[test]
    fn test_with_language_switches_and_restores() {
        let mut entity = category(Some("Стол"), Some("Stol"));

        let seen = entity.with_language(Language::UZBEK, |e| e.current_language());

        assert_eq!(seen, Language::UZBEK);
        assert_eq!(entity.current_language(), Language::RUSSIAN);
    }

    #[test]
    fn test_with_language_reads_through_cursor() {
        let mut entity = category(Some("Стол"), Some("Stol"));

        let name = entity.with_language(Language::UZBEK, |e| e.primary_field());

        assert_eq!(name.as_deref(), Some("Stol"));
        assert_eq!(entity.primary_field().as_deref(), Some("Стол"));
    }

    #[test]
    fn test_with_language_restores_after_err() {
        let mut entity = category(Some("Стол"), None);

        let result: Result<(), FieldError> = entity.with_language(Language::UZBEK, |e| {
            e.field("name").unwrap().map(|_| ())
        });

        assert_eq!(
            result.unwrap_err(),
            FieldError::NoTranslation { language: "uz" }
        );
        assert_eq!(entity.current_language(), Language::RUSSIAN);
    }

    #[test]
    fn test_with_language_restores_after_panic() {
        let mut entity = category(Some("Стол"), None);

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            entity.with_language(Language::UZBEK, |_| panic!("boom"))
        }));

        assert!(outcome.is_err());
        assert_eq!(entity.current_language(), Language::RUSSIAN);
    }

    #[test]
    fn test_with_language_restores_even_if_closure_moves_cursor() {
        let mut entity = TranslatedEntity::in_language(&CATEGORY, Language::UZBEK);

        entity.with_language(Language::RUSSIAN, |e| {
            e.set_current_language(Language::RUSSIAN);
            e.with_language(Language::UZBEK, |inner| {
                assert_eq!(inner.current_language(), Language::UZBEK)
            });
            assert_eq!(e.current_language(), Language::RUSSIAN);
        });

        assert_eq!(entity.current_language(), Language::UZBEK);
    }

    #[test]
    fn test_try_with_language_rejects_unknown_code() {
        let mut entity = category(None, None);

        let err = entity.try_with_language("en", |e| e.primary_field()).unwrap_err();

        assert!(matches!(err, TranslationError::InvalidLanguage { .. }));
        assert_eq!(entity.current_language(), Language::RUSSIAN);
    }

    // ==================== Translation Record Tests ====================

    #[test]
    fn test_has_translation() {
        let entity = category(Some("Стол"), None);

        assert!(entity.has_translation("ru").unwrap());
        assert!(!entity.has_translation("uz").unwrap());
        assert_eq!(
            entity.has_translation("en").unwrap_err(),
            TranslationError::InvalidLanguage {
                code: "en".to_string()
            }
        );
    }

    #[test]
    fn test_blank_record_still_counts_as_translation() {
        let entity = category(Some(""), None);

        assert!(entity.has_translation_for(Language::RUSSIAN));
        assert_eq!(
            entity.translation_status().get(Language::RUSSIAN),
            Some(TranslationState::Missing)
        );
    }

    #[test]
    fn test_set_field_uses_cursor() {
        let mut entity = TranslatedEntity::in_language(&CATEGORY, Language::UZBEK);
        entity.set_field("name", "Stol").unwrap();

        assert!(!entity.has_translation_for(Language::RUSSIAN));
        assert_eq!(entity.translated_languages(), vec![Language::UZBEK]);
    }

    #[test]
    fn test_set_unknown_field_is_rejected() {
        let mut entity = TranslatedEntity::new(&CATEGORY);

        let err = entity.set_field("title", "x").unwrap_err();

        assert_eq!(
            err,
            TranslationError::UnknownField {
                entity: "Category",
                field: "title".to_string()
            }
        );
        assert!(!entity.has_translation_for(Language::RUSSIAN));
    }

    #[test]
    fn test_insert_translation_validates_fields() {
        let mut entity = TranslatedEntity::new(&CATEGORY);
        let mut record = TranslationRecord::new();
        record.set("slug", "stol");

        assert!(entity.insert_translation(Language::RUSSIAN, record).is_err());
        assert!(entity.translated_languages().is_empty());
    }

    #[test]
    fn test_remove_translation() {
        let mut entity = category(Some("Стол"), Some("Stol"));

        let removed = entity.remove_translation(Language::RUSSIAN).unwrap();

        assert_eq!(removed.get("name"), Some(&json!("Стол")));
        assert_eq!(entity.translated_languages(), vec![Language::UZBEK]);
        assert!(entity.remove_translation(Language::RUSSIAN).is_none());
    }

    #[test]
    fn test_field_access() {
        let entity = category(Some("Стол"), None);

        assert_eq!(
            entity.field("name").unwrap(),
            Ok(FieldValue::Text("Стол".to_string()))
        );
        assert_eq!(
            entity.field_in(Language::UZBEK, "name").unwrap(),
            Err(FieldError::NoTranslation { language: "uz" })
        );
        assert!(entity.field("color").is_err());
    }

    // ==================== Primary Field Tests ====================

    #[test]
    fn test_primary_field_falls_through_blank_candidates() {
        let mut project = TranslatedEntity::new(&PROJECT);
        project.set_field("name", "  ").unwrap();
        project.set_field("color", json!(["red", "", "blue"])).unwrap();

        assert_eq!(project.primary_field().as_deref(), Some("red, blue"));
    }

    #[test]
    fn test_primary_field_prefers_name() {
        let mut project = TranslatedEntity::new(&PROJECT);
        project.set_field("name", "Диван").unwrap();
        project.set_field("color", json!(["red"])).unwrap();

        assert_eq!(project.primary_field().as_deref(), Some("Диван"));
    }

    #[test]
    fn test_primary_field_uses_title_for_seo() {
        let mut seo = TranslatedEntity::new(&PROJECT_SEO);
        seo.set_field("title", "Мебель").unwrap();

        assert_eq!(seo.primary_field().as_deref(), Some("Мебель"));
    }

    #[test]
    fn test_primary_field_malformed_color_is_blank() {
        let mut project = TranslatedEntity::new(&PROJECT);
        project.set_field("color", json!({"hex": "#f00"})).unwrap();

        assert_eq!(project.primary_field(), None);
        assert_eq!(
            project.translation_status().get(Language::RUSSIAN),
            Some(TranslationState::Missing)
        );
    }

    // ==================== Status & Label Tests ====================

    #[test]
    fn test_status_order_and_rendering() {
        let entity = category(Some("Стол"), None);
        let status = entity.translation_status();

        let entries: Vec<_> = status.iter().collect();
        assert_eq!(
            entries,
            vec![
                (Language::RUSSIAN, TranslationState::Filled),
                (Language::UZBEK, TranslationState::Missing),
            ]
        );
        assert!(!status.is_complete());
        assert_eq!(status.filled_languages(), vec![Language::RUSSIAN]);
        assert_eq!(status.to_string(), "RU: ✓ | UZ: ✗");
    }

    #[test]
    fn test_status_complete() {
        let status = category(Some("Стол"), Some("Stol")).translation_status();
        assert!(status.is_complete());
        assert_eq!(status.to_string(), "RU: ✓ | UZ: ✓");
    }

    #[test]
    fn test_status_does_not_move_cursor() {
        let entity = TranslatedEntity::in_language(&CATEGORY, Language::UZBEK);
        let _ = entity.translation_status();
        assert_eq!(entity.current_language(), Language::UZBEK);
    }

    #[test]
    fn test_display_label_joins_languages() {
        let entity = category(Some("Стол"), Some("Stol"));
        assert_eq!(entity.display_label(), "Стол (ru) / Stol (uz)");
        assert_eq!(entity.to_string(), "Стол (ru) / Stol (uz)");
    }

    #[test]
    fn test_display_label_placeholders() {
        let mut entity = category(Some(" "), None);
        assert_eq!(entity.display_label(), "New Category");

        entity.mark_persisted(7);
        assert_eq!(entity.display_label(), "Category #7");
    }

    #[test]
    fn test_malformed_value_is_counted_once_per_status() {
        let mut project = TranslatedEntity::new(&PROJECT);
        project.set_field("color", json!({"bad": true})).unwrap();
        project.mark_persisted(4);
        let metrics = TranslationMetrics::new();

        let _ = project.display_label();
        let _ = project.primary_field();
        let status = project.translation_status_recorded(&metrics);

        assert_eq!(status.get(Language::RUSSIAN), Some(TranslationState::Missing));
        assert_eq!(metrics.malformed_values(), 1);
        assert_eq!(metrics.status_checks(), 2);
        assert_eq!(metrics.missing(), 2);
    }

    #[test]
    fn test_malformed_candidate_before_filled_one_still_counts() {
        let mut project = TranslatedEntity::new(&PROJECT);
        project.set_field("name", json!(["not", "text"])).unwrap();
        project.set_field("color", json!(["red"])).unwrap();
        let metrics = TranslationMetrics::new();

        let status = project.translation_status_recorded(&metrics);

        assert_eq!(status.get(Language::RUSSIAN), Some(TranslationState::Filled));
        assert_eq!(metrics.malformed_values(), 1);
        assert_eq!(metrics.filled(), 1);
    }

    // ==================== Attribute Tests ====================

    #[test]
    fn test_invariant_attributes_are_language_independent() {
        let mut project = TranslatedEntity::new(&PROJECT);
        project.set_attribute("material", "oak");

        let seen = project.with_language(Language::UZBEK, |e| e.attribute("material").cloned());

        assert_eq!(seen, Some(json!("oak")));
        assert!(!project.has_translation_for(Language::UZBEK));
    }

    #[test]
    fn test_validate_reports_per_language() {
        let mut project = TranslatedEntity::new(&PROJECT);
        project.set_field_in(Language::UZBEK, "color", json!(5)).unwrap();

        let reports = project.validate();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, Language::UZBEK);
        assert!(reports[0].1.has_errors());
    }
}
