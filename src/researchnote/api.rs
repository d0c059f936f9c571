//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for notebook operations, whatever the UI.
//!
//! It:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (identifier words into a [`NoteSelector`], today's date)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never launches the editor; the CLI does that with the
//! paths returned here.
//!
//! `NotebookApi<S: NoteStore>` is generic over the storage backend:
//! - Production: `NotebookApi<FileStore>`
//! - Testing: `NotebookApi<InMemoryStore>`

use crate::commands;
use crate::config::ResearchNoteConfig;
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::NoteStore;
use chrono::Local;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The main API facade for notebook operations.
pub struct NotebookApi<S: NoteStore> {
    store: S,
    config: ResearchNoteConfig,
}

impl<S: NoteStore> NotebookApi<S> {
    pub fn new(store: S, config: ResearchNoteConfig) -> Self {
        Self { store, config }
    }

    /// Creates a note dated today.
    pub fn create_note<I: AsRef<str>>(&mut self, title_words: &[I]) -> Result<commands::CmdResult> {
        let today = Local::now().format(DATE_FORMAT).to_string();
        self.create_note_on(title_words, &today)
    }

    pub fn create_note_on<I: AsRef<str>>(
        &mut self,
        title_words: &[I],
        date: &str,
    ) -> Result<commands::CmdResult> {
        let title = join_words(title_words);
        commands::create::run(&mut self.store, &self.config.author, &title, date)
    }

    pub fn list_notes(&self, reverse: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, reverse)
    }

    pub fn note_paths<I: AsRef<str>>(&self, identifier: &[I]) -> Result<commands::CmdResult> {
        let selector = NoteSelector::from_words(identifier);
        commands::paths::run(&self.store, &selector)
    }

    pub fn config(&self) -> Result<commands::CmdResult> {
        commands::config::run(&self.config)
    }

    pub fn settings(&self) -> &ResearchNoteConfig {
        &self.config
    }
}

fn join_words<I: AsRef<str>>(words: &[I]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
