//! # Command Layer
//!
//! One module per operation. Commands take a [`NoteStore`](crate::store::NoteStore)
//! and plain Rust values and return a [`CmdResult`]; they never print, never
//! launch processes and never exit.

use crate::config::ResearchNoteConfig;
use crate::index::DisplayNote;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod helpers;
pub mod list;
pub mod paths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_notes: Vec<DisplayNote>,
    pub note_paths: Vec<PathBuf>,
    pub config: Option<ResearchNoteConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_note_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.note_paths = paths;
        self
    }

    pub fn with_config(mut self, config: ResearchNoteConfig) -> Self {
        self.config = Some(config);
        self
    }
}
