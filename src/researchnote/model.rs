use std::io::{self, BufRead};
use std::path::PathBuf;

/// Metadata read back from the leading lines of a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInfo {
    /// Declared date, verbatim. Empty when the note has no `date:` line.
    pub date: String,
    pub title: String,
}

impl NoteInfo {
    pub fn new(date: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
        }
    }
}

/// A note file found in the notebook directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub file_name: String,
    pub path: PathBuf,
}

impl Note {
    pub fn new(file_name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            file_name: file_name.into(),
            path,
        }
    }
}

const DATE_FIELD: &str = "date:";

/// Reads the title and declared date of a note.
///
/// The title is the first line. The date is taken from the first following
/// line that contains `date:` (any case), as the text after that line's last
/// colon. Any line containing `date:` qualifies, so `:update: x` also matches.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_note_info<R: BufRead>(mut reader: R) -> io::Result<NoteInfo> {
    let mut buf = Vec::new();

    let title = match next_line(&mut reader, &mut buf)? {
        Some(line) => line.trim().to_string(),
        None => return Ok(NoteInfo::default()),
    };

    while let Some(line) = next_line(&mut reader, &mut buf)? {
        if line.to_lowercase().contains(DATE_FIELD) {
            let date = line.rsplit(':').next().unwrap_or_default().trim();
            return Ok(NoteInfo::new(date, title));
        }
    }

    Ok(NoteInfo::new(String::new(), title))
}

fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf.as_slice());
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Renders the initial content of a new note.
///
/// ```text
/// Title
/// =====
///
/// :date: 2012-10-30
/// :author: Author Name
/// :tags:
/// ```
pub fn render_note_template(title: &str, date: &str, author: &str) -> String {
    let underline = "=".repeat(title.chars().count());
    format!(
        "{}\n{}\n\n:date: {}\n:author: {}\n:tags: ",
        title, underline, date, author
    )
}
