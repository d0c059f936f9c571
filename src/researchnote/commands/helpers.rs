use crate::error::Result;
use crate::index::{number_notes, select_note, DisplayNote, NoteSelector};
use crate::model::Note;
use crate::store::NoteStore;

pub fn numbered_notes<S: NoteStore>(store: &S) -> Result<Vec<(usize, Note)>> {
    let notes = store.scan()?;
    Ok(number_notes(notes))
}

/// Every note with its display number and metadata, oldest first.
pub fn display_notes<S: NoteStore>(store: &S) -> Result<Vec<DisplayNote>> {
    numbered_notes(store)?
        .into_iter()
        .map(|(number, note)| {
            let info = store.read_info(&note)?;
            Ok(DisplayNote { number, note, info })
        })
        .collect()
}

pub fn resolve_selector<S: NoteStore>(store: &S, selector: &NoteSelector) -> Result<DisplayNote> {
    let numbered = numbered_notes(store)?;
    select_note(selector, numbered, |note| store.read_info(note))
}
