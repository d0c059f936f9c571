//! # Display Numbers and Note Selection
//!
//! Notes are referred to on the command line by a **display number**, their
//! 1-based position in the sorted directory listing. Numbers are not stored
//! anywhere: they are recomputed from file names on every invocation, so they
//! are stable for as long as no older note is added.
//!
//! A user identifier selects a note in one of two ways:
//!
//! - **Number** (`researchnote edit 3`): the third note in the listing.
//! - **Text** (`researchnote edit 2012-10-30`, `researchnote edit SDSS`):
//!   the first note, in listing order, whose declared date equals the text or
//!   whose title contains it. Date and title are checked together for each
//!   note, so an earlier title match wins over a later exact date match.
//!
//! Text matching is exact and case-sensitive. There is no ranking between
//! several matching notes; the oldest one wins.

use crate::error::{NoteError, Result};
use crate::model::{Note, NoteInfo};
use std::fmt;
use std::str::FromStr;

/// A note together with its position in the listing and its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub number: usize,
    pub note: Note,
    pub info: NoteInfo,
}

/// A user input to select a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSelector {
    Number(i64),
    Text(String),
}

impl NoteSelector {
    /// Joins the words of a command line identifier and parses the result.
    pub fn from_words<I: AsRef<str>>(words: &[I]) -> Self {
        let joined = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        Self::from(joined.as_str())
    }
}

impl From<&str> for NoteSelector {
    fn from(s: &str) -> Self {
        match parse_number(s.trim()) {
            Some(n) => NoteSelector::Number(n),
            None => NoteSelector::Text(s.to_string()),
        }
    }
}

/// Parses an optionally signed run of digits. Values past the `i64` range
/// saturate, since any of them is out of range for a listing anyway.
fn parse_number(s: &str) -> Option<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

impl FromStr for NoteSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(NoteSelector::from(s))
    }
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Number(n) => write!(f, "{}", n),
            NoteSelector::Text(t) => write!(f, "\"{}\"", t),
        }
    }
}

/// Assigns display numbers 1..N to notes in file name order.
pub fn number_notes(mut notes: Vec<Note>) -> Vec<(usize, Note)> {
    notes.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| (i + 1, note))
        .collect()
}

/// Resolves a selector against numbered notes.
///
/// `read_info` is called lazily: a number lookup reads one note, a text
/// lookup reads notes in order until one matches.
pub fn select_note<F>(
    selector: &NoteSelector,
    numbered: Vec<(usize, Note)>,
    mut read_info: F,
) -> Result<DisplayNote>
where
    F: FnMut(&Note) -> Result<NoteInfo>,
{
    match selector {
        NoteSelector::Number(n) => {
            let count = numbered.len();
            let position = usize::try_from(*n)
                .ok()
                .filter(|&p| p >= 1 && p <= count)
                .ok_or(NoteError::IdentifierOutOfRange { number: *n, count })?;
            let (number, note) = numbered
                .into_iter()
                .nth(position - 1)
                .ok_or(NoteError::IdentifierOutOfRange { number: *n, count })?;
            let info = read_info(&note)?;
            Ok(DisplayNote { number, note, info })
        }
        NoteSelector::Text(text) => {
            for (number, note) in numbered {
                let info = read_info(&note)?;
                if info.date == *text || info.title.contains(text.as_str()) {
                    return Ok(DisplayNote { number, note, info });
                }
            }
            Err(NoteError::NoteNotFound(text.clone()))
        }
    }
}
