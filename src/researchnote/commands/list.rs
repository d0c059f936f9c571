use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

use super::helpers::display_notes;

/// Lists every note, oldest first, or newest first when `reverse` is set.
/// Display numbers stay attached to their notes either way.
pub fn run<S: NoteStore>(store: &S, reverse: bool) -> Result<CmdResult> {
    let mut notes = display_notes(store)?;
    if reverse {
        notes.reverse();
    }
    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info("No notes found."));
    }
    Ok(result.with_listed_notes(notes))
}
