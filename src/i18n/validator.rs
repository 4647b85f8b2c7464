//! Translation record validation.
//!
//! Checks a stored translation record against its entity type: every field
//! must be declared, every value must match its declared shape, and the
//! record should carry a headline value.

use crate::content::{EntityType, TranslationRecord};
use crate::error::FieldError;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems with the stored data itself
    pub errors: Vec<String>,

    /// Record is well-formed but incomplete
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for stored translation records.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Validate one language's record for an entity type.
    ///
    /// Errors:
    /// - fields the type does not declare
    /// - values whose shape does not match the declared kind
    ///
    /// Warnings:
    /// - none of the primary candidates has a non-blank value
    pub fn validate(kind: &EntityType, record: &TranslationRecord) -> ValidationReport {
        let mut report = ValidationReport::new();

        for name in record.fields().keys() {
            if kind.field(name).is_none() {
                report
                    .errors
                    .push(format!("Undeclared field '{}' for {}", name, kind.name));
            }
        }

        for spec in kind.fields {
            if let Err(err @ FieldError::Malformed { .. }) = spec.resolve(record.get(spec.name)) {
                report.errors.push(err.to_string());
            }
        }

        let has_headline = kind.primary_fields().any(|spec| {
            spec.resolve(record.get(spec.name))
                .ok()
                .and_then(|value| value.as_display())
                .is_some()
        });
        if !has_headline {
            let candidates: Vec<_> = kind.primary_fields().map(|spec| spec.name).collect();
            report.warnings.push(format!(
                "No primary value: all of {:?} are blank",
                candidates
            ));
        }

        report
    }
}
