//! Media attachments (project images and videos, gallery images).
//!
//! Attachments carry no translations of their own; they are identified by the
//! label of the entity they belong to.

use crate::content::TranslatedEntity;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => f.write_str("Image"),
            MediaKind::Video => f.write_str("Video"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAttachment {
    pub id: Option<i64>,
    pub kind: MediaKind,
    pub created_at: Option<DateTime<Utc>>,
}

impl MediaAttachment {
    pub fn new(kind: MediaKind) -> Self {
        Self {
            id: None,
            kind,
            created_at: None,
        }
    }

    /// `Image: <parent label>`, or a placeholder when detached.
    pub fn label(&self, parent: Option<&TranslatedEntity>) -> String {
        match (parent, self.id) {
            (Some(parent), _) => format!("{}: {}", self.kind, parent.display_label()),
            (None, Some(id)) => format!("{} #{}", self.kind, id),
            (None, None) => format!("New {}", self.kind),
        }
    }
}
