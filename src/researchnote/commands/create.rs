use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::render_note_template;
use crate::store::NoteStore;
use tracing::info;

/// Creates a note for `title` dated `date`, filled with the note template.
pub fn run<S: NoteStore>(
    store: &mut S,
    author: &str,
    title: &str,
    date: &str,
) -> Result<CmdResult> {
    let title = title.trim();
    let content = render_note_template(title, date, author);
    let note = store.create_note(date, title, &content)?;
    info!(file = %note.file_name, "note created");

    let mut result = CmdResult::default().with_note_paths(vec![note.path.clone()]);
    if title.is_empty() {
        result.add_message(CmdMessage::warning("Note has an empty title"));
    }
    result.add_message(CmdMessage::success(format!(
        "Created file {}",
        note.path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::display_notes;
    use crate::commands::MessageLevel;
    use crate::model::NoteInfo;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    #[test]
    fn creates_templated_note() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Jane Doe", "Fitting SDSS spectra", "2012-10-30").unwrap();

        assert_eq!(
            result.note_paths,
            vec![PathBuf::from("2012-10-30_Fitting_SDSS_spectra.rst")]
        );
        assert_eq!(
            store.content("2012-10-30_Fitting_SDSS_spectra.rst"),
            Some(
                "Fitting SDSS spectra\n====================\n\n\
                 :date: 2012-10-30\n:author: Jane Doe\n:tags: "
            )
        );
        assert!(result.messages[0].content.starts_with("Created file"));
    }

    #[test]
    fn created_note_reads_back() {
        let mut store = InMemoryStore::new();
        run(&mut store, "", "Problème à résoudre", "2012-10-28").unwrap();

        let notes = display_notes(&store).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].note.file_name, "2012-10-28_Probleme_a_resoudre.rst");
        assert_eq!(
            notes[0].info,
            NoteInfo::new("2012-10-28", "Problème à résoudre")
        );
    }

    #[test]
    fn same_title_twice_gets_suffix() {
        let mut store = InMemoryStore::new();
        let first = run(&mut store, "", "Same", "2012-10-30").unwrap();
        let second = run(&mut store, "", "Same", "2012-10-30").unwrap();
        assert_eq!(first.note_paths, vec![PathBuf::from("2012-10-30_Same.rst")]);
        assert_eq!(second.note_paths, vec![PathBuf::from("2012-10-30_Same_1.rst")]);
    }

    #[test]
    fn empty_title_warns() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "", "  ", "2012-10-30").unwrap();
        assert_eq!(result.note_paths, vec![PathBuf::from("2012-10-30.rst")]);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
