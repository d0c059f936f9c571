use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::NoteStore;

use super::helpers::resolve_selector;

/// Resolves `selector` to a single note and returns its path.
pub fn run<S: NoteStore>(store: &S, selector: &NoteSelector) -> Result<CmdResult> {
    let resolved = resolve_selector(store, selector)?;
    let path = resolved.note.path.clone();
    Ok(CmdResult::default()
        .with_note_paths(vec![path])
        .with_listed_notes(vec![resolved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteError;
    use crate::store::memory::fixtures::StoreFixture;
    use std::path::PathBuf;

    fn resolve(input: &str) -> Result<CmdResult> {
        let store = StoreFixture::sdss().store;
        run(&store, &NoteSelector::from(input))
    }

    #[test]
    fn resolves_number() {
        let result = resolve("2").unwrap();
        assert_eq!(
            result.note_paths,
            vec![PathBuf::from("2012-10-30_Fitting_SDSS_spectra.rst")]
        );
        assert_eq!(result.listed_notes[0].number, 2);
    }

    #[test]
    fn resolves_date() {
        let result = resolve("2012-10-28").unwrap();
        assert_eq!(
            result.note_paths,
            vec![PathBuf::from("2012-10-28_Problem_with_SDSS_J14060119.rst")]
        );
    }

    #[test]
    fn resolves_title_substring() {
        let result = resolve("Fitting").unwrap();
        assert_eq!(result.listed_notes[0].info.title, "Fitting SDSS spectra");
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            resolve("3"),
            Err(NoteError::IdentifierOutOfRange { number: 3, count: 2 })
        ));
    }

    #[test]
    fn not_found() {
        assert!(matches!(resolve("quasar"), Err(NoteError::NoteNotFound(_))));
    }
}
