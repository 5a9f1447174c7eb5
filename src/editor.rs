//! Save and discard flow for a note being edited.

use uuid::Uuid;

use crate::entity::Note;
use crate::error::{NoteError, Result};
use crate::storage::NoteStore;
use crate::theme::DEFAULT_TINT;

/// Editable copy of a note. `id` is `None` until the draft is first saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub is_favorite: bool,
    pub tint_color_hex: String,
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            is_favorite: false,
            tint_color_hex: DEFAULT_TINT.to_string(),
        }
    }
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_note(note: &Note) -> Self {
        Self {
            id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            is_favorite: note.is_favorite,
            tint_color_hex: note.tint_color_hex.clone(),
        }
    }

    /// Create or update the note in `store`.
    ///
    /// An empty title is rejected. After a successful save the draft carries
    /// the id of the stored note.
    pub fn save(&mut self, store: &mut NoteStore) -> Result<Note> {
        if self.title.is_empty() {
            return Err(NoteError::EmptyTitle);
        }

        let Some(id) = self.id else {
            let note = store.create_with_favorite(
                &self.title,
                &self.content,
                &self.tint_color_hex,
                self.is_favorite,
            );
            self.id = Some(note.id);
            return Ok(note);
        };

        let mut note = store
            .get(&id)
            .cloned()
            .ok_or_else(|| NoteError::NoteNotFound(id.to_string()))?;
        note.title = self.title.clone();
        note.content = self.content.clone();
        note.is_favorite = self.is_favorite;
        note.tint_color_hex = self.tint_color_hex.clone();
        store.update(&note);

        store
            .get(&id)
            .cloned()
            .ok_or_else(|| NoteError::NoteNotFound(id.to_string()))
    }

    /// Delete the saved note behind this draft, if any.
    pub fn discard(&self, store: &mut NoteStore) -> bool {
        match self.id {
            Some(id) => store.delete_by_id(&id),
            None => false,
        }
    }
}
