// src/entity/note.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::theme::{Rgb, DEFAULT_TINT};

/// A single user note as stored in `notes.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub is_favorite: bool,
    pub tint_color_hex: String,
}

impl Note {
    pub fn new(title: String, content: String, tint_color_hex: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            date_created: now,
            date_modified: now,
            is_favorite: false,
            tint_color_hex,
        }
    }

    /// Note with the default purple tint.
    pub fn with_default_tint(title: String, content: String) -> Self {
        Self::new(title, content, DEFAULT_TINT.to_string())
    }

    /// Resolved tint; gray when `tint_color_hex` is malformed.
    pub fn tint(&self) -> Rgb {
        Rgb::from_hex(&self.tint_color_hex)
    }

    /// Set `date_modified` to now, strictly after its previous value.
    pub(crate) fn touch(&mut self) {
        let now = Utc::now();
        self.date_modified = if now > self.date_modified {
            now
        } else {
            self.date_modified + Duration::microseconds(1)
        };
    }

    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.content.to_lowercase().contains(&needle)
    }

    /// First line of the content, truncated to `max_chars` characters.
    pub fn preview(&self, max_chars: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or("");
        let mut preview: String = first_line.chars().take(max_chars).collect();
        if first_line.chars().count() > max_chars {
            preview.push('…');
        }
        preview
    }
}
