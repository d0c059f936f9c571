use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("No note matches \"{0}\"")]
    NoteNotFound(String),

    #[error("Note number {number} is out of range (notebook has {count} notes)")]
    IdentifierOutOfRange { number: i64, count: usize },

    #[error("No editor configured. Set `editor` in the config file or the $EDITOR environment variable.")]
    EditorUnavailable,

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Could not allocate a file name for {path} after {attempts} attempts")]
    FilesystemCollision { path: PathBuf, attempts: usize },

    #[error("Could not read configuration {path}: {reason}")]
    ConfigUnreadable { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NoteError>;
