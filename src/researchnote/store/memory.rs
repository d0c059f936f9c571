use super::{is_note_file_name, note_file_name, NoteStore, MAX_ALLOCATION_ATTEMPTS};
use crate::error::{NoteError, Result};
use crate::model::{read_note_info, Note, NoteInfo};
use crate::slug::slugify;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct InMemoryStore {
    files: BTreeMap<String, String>,
    file_ext: String,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            files: BTreeMap::new(),
            file_ext: super::DEFAULT_NOTE_FORMAT.to_string(),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a file in the notebook as-is, whether or not it looks like a note.
    pub fn insert_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.files.insert(name.into(), content.into());
    }

    pub fn content(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

impl NoteStore for InMemoryStore {
    fn scan(&self) -> Result<Vec<Note>> {
        Ok(self
            .files
            .keys()
            .filter(|name| is_note_file_name(name, &self.file_ext))
            .map(|name| Note::new(name.clone(), PathBuf::from(name)))
            .collect())
    }

    fn read_info(&self, note: &Note) -> Result<NoteInfo> {
        let content = self
            .files
            .get(&note.file_name)
            .ok_or_else(|| NoteError::NoteNotFound(note.file_name.clone()))?;
        Ok(read_note_info(Cursor::new(content.as_bytes()))?)
    }

    fn create_note(&mut self, date: &str, title: &str, content: &str) -> Result<Note> {
        let slug = slugify(title);
        for attempt in 0..MAX_ALLOCATION_ATTEMPTS {
            let name = note_file_name(date, &slug, &self.file_ext, attempt);
            if !self.files.contains_key(&name) {
                self.files.insert(name.clone(), content.to_string());
                return Ok(Note::new(name.clone(), PathBuf::from(name)));
            }
        }
        Err(NoteError::FilesystemCollision {
            path: PathBuf::from(note_file_name(date, &slug, &self.file_ext, 0)),
            attempts: MAX_ALLOCATION_ATTEMPTS,
        })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::render_note_template;

    /// Builds an in-memory notebook from `(file name, title, date)` triples.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_note(mut self, file_name: &str, title: &str, date: &str) -> Self {
            let content = render_note_template(title, date, "Test Author");
            self.store.insert_file(file_name, content);
            self
        }

        pub fn with_raw_file(mut self, file_name: &str, content: &str) -> Self {
            self.store.insert_file(file_name, content);
            self
        }

        /// The two notes used throughout the command tests.
        pub fn sdss() -> Self {
            Self::new()
                .with_note(
                    "2012-10-28_Problem_with_SDSS_J14060119.rst",
                    "Problem with SDSS J1406-0119",
                    "2012-10-28",
                )
                .with_note(
                    "2012-10-30_Fitting_SDSS_spectra.rst",
                    "Fitting SDSS spectra",
                    "2012-10-30",
                )
        }
    }
}
