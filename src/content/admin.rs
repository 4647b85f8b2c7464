//! Plain-text cells for admin list views.

use crate::content::TranslatedEntity;

/// Placeholder shown when a cell has nothing to display.
pub const EMPTY_CELL: &str = "-";

/// Per-language completeness, e.g. `RU: ✓ | UZ: ✗`.
///
/// Unsaved entities have nothing to report yet and show [`EMPTY_CELL`].
pub fn status_cell(entity: &TranslatedEntity) -> String {
    if !entity.is_persisted() {
        return EMPTY_CELL.to_string();
    }
    entity.translation_status().to_string()
}

/// Headline value in the entity's current language.
pub fn primary_cell(entity: &TranslatedEntity) -> String {
    if !entity.is_persisted() {
        return EMPTY_CELL.to_string();
    }
    entity
        .primary_field()
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}
