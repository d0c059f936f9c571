use crate::error::{NoteError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Splits a configured editor command line into program and arguments.
pub fn editor_command(editor: &str) -> Result<(String, Vec<String>)> {
    let mut parts = editor.split_whitespace().map(str::to_string);
    let program = parts.next().ok_or(NoteError::EditorUnavailable)?;
    Ok((program, parts.collect()))
}

/// Opens a file in the configured editor and waits for it to close.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<()> {
    let (program, args) = editor_command(editor)?;
    let path = file_path.as_ref();
    debug!(editor = %program, path = %path.display(), "launching editor");

    let status = Command::new(&program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|e| NoteError::Editor(format!("Failed to launch editor '{}': {}", program, e)))?;

    if !status.success() {
        return Err(NoteError::Editor(format!(
            "Editor '{}' exited with non-zero status",
            program
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_line() {
        let (program, args) = editor_command("  vim  -f --nofork ").unwrap();
        assert_eq!(program, "vim");
        assert_eq!(args, vec!["-f", "--nofork"]);
    }

    #[test]
    fn empty_editor_is_unavailable() {
        assert!(matches!(
            editor_command(""),
            Err(NoteError::EditorUnavailable)
        ));
        assert!(matches!(
            open_in_editor("   ", "note.rst"),
            Err(NoteError::EditorUnavailable)
        ));
    }

    #[test]
    fn missing_program_is_an_editor_error() {
        let result = open_in_editor("researchnote-no-such-editor-xyz", "note.rst");
        assert!(matches!(result, Err(NoteError::Editor(_))));
    }

    #[cfg(unix)]
    #[test]
    fn reports_exit_status() {
        assert!(open_in_editor("true", "note.rst").is_ok());
        assert!(matches!(
            open_in_editor("false", "note.rst"),
            Err(NoteError::Editor(_))
        ));
    }
}
