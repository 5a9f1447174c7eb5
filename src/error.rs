use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Index {index} out of range for {len} notes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Note id cannot be empty")]
    EmptyId,

    #[error("Note id '{0}' matches more than one note")]
    AmbiguousId(String),

    #[error("Note title cannot be empty")]
    EmptyTitle,

    #[error("Use --force to delete in non-interactive mode")]
    ConfirmationRequired,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NoteError>;
