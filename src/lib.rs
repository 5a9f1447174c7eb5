pub mod cli;
pub mod config;
pub mod editor;
pub mod entity;
pub mod error;
pub mod search;
pub mod storage;
pub mod theme;

pub use config::StoreConfig;
pub use editor::NoteDraft;
pub use entity::Note;
pub use error::{NoteError, Result};
pub use storage::{NoteStore, SubscriptionId};
