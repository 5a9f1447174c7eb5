use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::StoreConfig;
use crate::entity::Note;
use crate::error::{NoteError, Result};
use crate::theme::DEFAULT_TINT;

/// Handle returned by [`NoteStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    callback: Box<dyn FnMut()>,
}

/// Authoritative collection of notes, backed by a single JSON file.
///
/// The file is read once when the store is opened and rewritten in full
/// after every mutation. Write failures are logged and leave the in-memory
/// collection as the source of truth; [`NoteStore::take_persist_error`]
/// hands back the error of the last failed write.
pub struct NoteStore {
    notes: Vec<Note>,
    path: PathBuf,
    persist_error: Option<NoteError>,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl NoteStore {
    /// Open the store backed by `path`.
    ///
    /// A missing or unparsable file yields an empty collection.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let notes = Self::load(&path);
        Self {
            notes,
            path,
            persist_error: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::open(config.file_path())
    }

    fn load(path: &Path) -> Vec<Note> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no notes file yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read notes file");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<Note>>(&bytes) {
            Ok(mut notes) => {
                notes.sort_by(|a, b| b.date_modified.cmp(&a.date_modified));
                tracing::debug!(path = %path.display(), count = notes.len(), "loaded notes");
                notes
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse notes file");
                Vec::new()
            }
        }
    }

    /// Write the whole collection to disk.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.notes)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = self.notes.len(), "saved notes");
        Ok(())
    }

    fn save(&mut self) {
        self.persist_error = match self.persist() {
            Ok(()) => None,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to save notes");
                Some(e)
            }
        };
    }

    /// Error from the most recent write if it failed. A later successful
    /// write clears it.
    pub fn take_persist_error(&mut self) -> Option<NoteError> {
        self.persist_error.take()
    }

    /// Path of the backing JSON file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Notes in current order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == *id)
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.notes.iter().position(|n| n.id == *id)
    }

    /// Create a note and insert it at the front of the collection.
    pub fn create(&mut self, title: &str, content: &str, tint_color_hex: &str) -> Note {
        self.create_with_favorite(title, content, tint_color_hex, false)
    }

    /// Like [`NoteStore::create`], with the favorite flag set up front so the
    /// new note is written once.
    pub fn create_with_favorite(
        &mut self,
        title: &str,
        content: &str,
        tint_color_hex: &str,
        is_favorite: bool,
    ) -> Note {
        let mut note = Note::new(
            title.to_string(),
            content.to_string(),
            tint_color_hex.to_string(),
        );
        note.is_favorite = is_favorite;
        self.notes.insert(0, note.clone());
        self.save();
        self.notify();
        note
    }

    pub fn create_default(&mut self, title: &str, content: &str) -> Note {
        self.create(title, content, DEFAULT_TINT)
    }

    /// Replace the stored note with the same id.
    ///
    /// `date_created` is kept from the stored record and `date_modified` is
    /// refreshed. Returns `false` (and does nothing) for an unknown id.
    pub fn update(&mut self, note: &Note) -> bool {
        let Some(index) = self.position(&note.id) else {
            return false;
        };

        let stored = &mut self.notes[index];
        let mut updated = note.clone();
        updated.date_created = stored.date_created;
        updated.date_modified = stored.date_modified;
        updated.touch();
        *stored = updated;

        self.save();
        self.notify();
        true
    }

    /// Remove the note with `id`. Returns whether a note was removed.
    pub fn delete_by_id(&mut self, id: &Uuid) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != *id);
        let removed = self.notes.len() != before;

        self.save();
        if removed {
            self.notify();
        }
        removed
    }

    /// Remove the note at `index` in the current ordering.
    pub fn delete_at_index(&mut self, index: usize) -> Result<Note> {
        let len = self.notes.len();
        if index >= len {
            return Err(NoteError::IndexOutOfRange { index, len });
        }

        let note = self.notes.remove(index);
        self.save();
        self.notify();
        Ok(note)
    }

    /// Flip the favorite flag of the stored note with `note.id`.
    pub fn toggle_favorite(&mut self, note: &Note) -> bool {
        let Some(index) = self.position(&note.id) else {
            return false;
        };

        let stored = &mut self.notes[index];
        stored.is_favorite = !stored.is_favorite;
        stored.touch();

        self.save();
        self.notify();
        true
    }

    /// Case-insensitive substring search over title and content.
    pub fn search(&self, query: &str) -> Vec<Note> {
        if query.is_empty() {
            return self.notes.clone();
        }
        self.filter(|n| n.matches(query))
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<Note>
    where
        F: Fn(&Note) -> bool,
    {
        self.notes.iter().filter(|n| predicate(n)).cloned().collect()
    }

    pub fn favorites(&self) -> Vec<Note> {
        self.filter(|n| n.is_favorite)
    }

    /// Register a callback run after every mutation that changed the collection.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut() + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            (subscriber.callback)();
        }
    }
}
