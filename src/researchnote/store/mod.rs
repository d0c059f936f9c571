//! # Storage Layer
//!
//! Notes live as plain files in a single notebook directory. The [`NoteStore`]
//! trait hides that directory from the command layer so commands can be tested
//! against [`memory::InMemoryStore`].
//!
//! ## Naming
//!
//! Every note file is named after its creation date and a slug of its title:
//!
//! ```text
//! notebook/
//! ├── 2012-10-28_Problem_with_SDSS_J14060119.rst
//! ├── 2012-10-30_Fitting_SDSS_spectra.rst
//! └── 2012-10-30_Fitting_SDSS_spectra_1.rst   # same title, same day
//! ```
//!
//! The zero-padded date prefix makes lexicographic order chronological, so
//! listing never needs to open a file to sort.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store backed by a directory
//! - [`memory::InMemoryStore`]: map of file name to content, for tests

use crate::error::Result;
use crate::model::{Note, NoteInfo};
use once_cell::sync::Lazy;
use regex::Regex;

pub mod fs;
pub mod memory;

/// Upper bound on `_<n>` suffixes tried before giving up on a name.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 1000;

pub const DEFAULT_NOTE_FORMAT: &str = "rst";

static NOTE_STEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(_[\w\-+]+)?$").expect("note name pattern is valid")
});

/// Abstract interface for the notebook directory.
pub trait NoteStore {
    /// Note files, sorted by file name (oldest first).
    fn scan(&self) -> Result<Vec<Note>>;

    /// Read the title and declared date of a note.
    fn read_info(&self, note: &Note) -> Result<NoteInfo>;

    /// Create a new note for `title` on `date` under a name no other note
    /// uses, and write `content` to it.
    fn create_note(&mut self, date: &str, title: &str, content: &str) -> Result<Note>;
}

/// Builds the candidate file name for the given allocation attempt.
///
/// Attempt 0 is the plain name, attempt `n` appends `_n` before the
/// extension. An empty slug leaves just the date.
pub fn note_file_name(date: &str, slug: &str, ext: &str, attempt: usize) -> String {
    let base = if slug.is_empty() {
        date.to_string()
    } else {
        format!("{}_{}", date, slug)
    };
    if attempt == 0 {
        format!("{}.{}", base, ext)
    } else {
        format!("{}_{}.{}", base, attempt, ext)
    }
}

/// Whether `name` follows the `YYYY-MM-DD_<slug>.<ext>` pattern.
pub fn is_note_file_name(name: &str, ext: &str) -> bool {
    name.strip_suffix(ext)
        .and_then(|rest| rest.strip_suffix('.'))
        .is_some_and(|stem| NOTE_STEM.is_match(stem))
}

/// Normalizes a configured extension (`.md` and `md` both become `md`).
pub fn normalize_ext(ext: &str) -> String {
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        DEFAULT_NOTE_FORMAT.to_string()
    } else {
        ext.to_string()
    }
}
