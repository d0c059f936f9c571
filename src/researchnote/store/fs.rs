use super::{
    is_note_file_name, normalize_ext, note_file_name, NoteStore, MAX_ALLOCATION_ATTEMPTS,
};
use crate::error::{NoteError, Result};
use crate::model::{read_note_info, Note, NoteInfo};
use crate::slug::slugify;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: super::DEFAULT_NOTE_FORMAT.to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        self.file_ext = normalize_ext(ext);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NoteError::Io)?;
        }
        Ok(())
    }
}

/// Claims a new note file in `dir` and returns its path with the open handle.
///
/// Names are tried in order `date_slug.ext`, `date_slug_1.ext`, ... and each
/// candidate is opened with `create_new`, so a name taken by another process
/// between attempts is skipped rather than overwritten.
pub fn allocate_note_file(
    dir: &Path,
    date: &str,
    title: &str,
    ext: &str,
) -> Result<(PathBuf, File)> {
    let slug = slugify(title);

    for attempt in 0..MAX_ALLOCATION_ATTEMPTS {
        let path = dir.join(note_file_name(date, &slug, ext, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "note file name taken, trying next suffix");
            }
            Err(e) => return Err(NoteError::Io(e)),
        }
    }

    Err(NoteError::FilesystemCollision {
        path: dir.join(note_file_name(date, &slug, ext, 0)),
        attempts: MAX_ALLOCATION_ATTEMPTS,
    })
}

/// Fills a freshly allocated note. On failure the file is removed again so no
/// empty or partial note is left in the notebook.
fn write_note<W: Write>(path: &Path, mut file: W, content: &str) -> Result<()> {
    if let Err(e) = file.write_all(content.as_bytes()).and_then(|_| file.flush()) {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            debug!(path = %path.display(), error = %remove_err, "could not remove partial note");
        }
        return Err(NoteError::Io(e));
    }
    Ok(())
}

impl NoteStore for FileStore {
    fn scan(&self) -> Result<Vec<Note>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut notes = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(NoteError::Io)? {
            let entry = entry.map_err(NoteError::Io)?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !is_note_file_name(&name, &self.file_ext) {
                continue;
            }
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            notes.push(Note::new(name, path));
        }

        notes.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(notes)
    }

    fn read_info(&self, note: &Note) -> Result<NoteInfo> {
        let file = File::open(&note.path).map_err(NoteError::Io)?;
        Ok(read_note_info(BufReader::new(file))?)
    }

    fn create_note(&mut self, date: &str, title: &str, content: &str) -> Result<Note> {
        self.ensure_dir()?;

        let (path, file) = allocate_note_file(&self.root, date, title, &self.file_ext)?;
        write_note(&path, file, content)?;
        debug!(path = %path.display(), "created note");

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Note::new(file_name, path))
    }
}
