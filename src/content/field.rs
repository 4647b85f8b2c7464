//! Per-language field descriptors and value resolution.
//!
//! Stored translation values are raw JSON, the way they come out of the
//! translation table. Resolution turns a raw value into a typed
//! [`FieldValue`] according to the field's declared [`FieldKind`], or explains
//! why it could not with a [`FieldError`].

use crate::error::FieldError;
use serde_json::Value;

/// Shape of a per-language field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single string (names, titles, descriptions).
    Text,
    /// A multi-value field such as a list of color names.
    List,
}

/// A per-language field declared by an entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn list(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::List,
        }
    }

    /// Resolve a stored value for this field.
    ///
    /// `None` means the translation record has no entry for the field.
    pub fn resolve(&self, raw: Option<&Value>) -> Result<FieldValue, FieldError> {
        let raw = match raw {
            None | Some(Value::Null) => {
                return Err(FieldError::Unset {
                    field: self.name.to_string(),
                })
            }
            Some(raw) => raw,
        };

        match self.kind {
            FieldKind::Text => self.resolve_text(raw),
            FieldKind::List => self.resolve_list(raw),
        }
    }

    fn resolve_text(&self, raw: &Value) -> Result<FieldValue, FieldError> {
        match raw {
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
            Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
            other => Err(self.malformed(format!("expected a string, found {}", json_type(other)))),
        }
    }

    fn resolve_list(&self, raw: &Value) -> Result<FieldValue, FieldError> {
        match raw {
            Value::Array(items) => self.collect_items(items),
            Value::String(s) => {
                let trimmed = s.trim();
                // The admin color widget submits its list as a JSON string.
                if trimmed.starts_with('[') {
                    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
                        return self.collect_items(&items);
                    }
                }
                if trimmed.is_empty() {
                    Ok(FieldValue::List(Vec::new()))
                } else {
                    Ok(FieldValue::List(vec![trimmed.to_string()]))
                }
            }
            other => Err(self.malformed(format!("expected a list, found {}", json_type(other)))),
        }
    }

    fn collect_items(&self, items: &[Value]) -> Result<FieldValue, FieldError> {
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Null | Value::Bool(false) => {}
                Value::String(s) if s.is_empty() => {}
                Value::Number(n) if n.as_f64() == Some(0.0) => {}
                Value::String(s) => values.push(s.clone()),
                Value::Number(n) => values.push(n.to_string()),
                Value::Bool(true) => values.push("true".to_string()),
                other => {
                    return Err(self.malformed(format!(
                        "list element is {}",
                        json_type(other)
                    )))
                }
            }
        }
        Ok(FieldValue::List(values))
    }

    fn malformed(&self, reason: String) -> FieldError {
        FieldError::Malformed {
            field: self.name.to_string(),
            reason,
        }
    }
}

/// A resolved per-language value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Human-readable form used for labels.
    ///
    /// Lists are joined with `", "`. Returns `None` when there is nothing to
    /// show: an empty list, or text that is blank after trimming.
    pub fn as_display(&self) -> Option<String> {
        let text = match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
