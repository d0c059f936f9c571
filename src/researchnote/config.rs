//! # Configuration
//!
//! The configuration is an INI file, `~/.researchnoterc` unless `--config`
//! says otherwise:
//!
//! ```ini
//! [ResearchNote]
//! author = Jane Doe
//! editor = vim -f
//! notes_dir = ~/PhD/Notebook
//! note_format = rst
//! ```
//!
//! Every key is optional. A missing or malformed file is not an error for the
//! user: [`ResearchNoteConfig::load_or_default`] falls back to defaults taken
//! from the environment ([`ConfigEnv`]). The resulting value is built once at
//! startup and handed to the API; nothing reads configuration globally.

use crate::error::{NoteError, Result};
use crate::store::{normalize_ext, DEFAULT_NOTE_FORMAT};
use directories::BaseDirs;
use ini::Ini;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "~/.researchnoterc";
pub const CONFIG_SECTION: &str = "ResearchNote";

/// Process environment the defaults are derived from.
#[derive(Debug, Clone, Default)]
pub struct ConfigEnv {
    /// Value of `$EDITOR`, empty when unset.
    pub editor: String,
    pub current_dir: PathBuf,
    pub home_dir: Option<PathBuf>,
}

impl ConfigEnv {
    pub fn from_process() -> Self {
        Self {
            editor: std::env::var("EDITOR").unwrap_or_default(),
            current_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            home_dir: BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
        }
    }

    /// Expands a leading `~` to the home directory.
    pub fn expand_tilde(&self, path: &str) -> PathBuf {
        match (path.strip_prefix('~'), &self.home_dir) {
            (Some(""), Some(home)) => home.clone(),
            (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with('\\') => {
                home.join(&rest[1..])
            }
            _ => PathBuf::from(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchNoteConfig {
    pub author: String,
    /// Editor command line, split on whitespace when launched.
    pub editor: String,
    pub notes_dir: PathBuf,
    /// Note file extension, without the leading dot.
    pub note_format: String,
}

impl ResearchNoteConfig {
    pub fn defaults(env: &ConfigEnv) -> Self {
        Self {
            author: String::new(),
            editor: env.editor.clone(),
            notes_dir: env.current_dir.clone(),
            note_format: DEFAULT_NOTE_FORMAT.to_string(),
        }
    }

    /// Load the configuration file at `path`.
    ///
    /// Fails with [`NoteError::ConfigUnreadable`] if the file can't be read,
    /// isn't valid INI or has no `[ResearchNote]` section. Keys missing from
    /// the section take their default.
    pub fn load(path: &Path, env: &ConfigEnv) -> Result<Self> {
        let unreadable = |reason: String| NoteError::ConfigUnreadable {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        let ini = Ini::load_from_str(&content).map_err(|e| unreadable(e.to_string()))?;
        let section = ini
            .section(Some(CONFIG_SECTION))
            .ok_or_else(|| unreadable(format!("missing [{}] section", CONFIG_SECTION)))?;

        let mut config = Self::defaults(env);
        if let Some(author) = section.get("author") {
            config.author = author.to_string();
        }
        if let Some(editor) = section.get("editor") {
            config.editor = editor.to_string();
        }
        if let Some(notes_dir) = section.get("notes_dir") {
            config.notes_dir = env.expand_tilde(notes_dir);
        }
        if let Some(note_format) = section.get("note_format") {
            config.note_format = normalize_ext(note_format);
        }
        Ok(config)
    }

    /// Load the configuration at `path` (`~` expanded), falling back to
    /// defaults when it is unreadable.
    pub fn load_or_default(path: &str, env: &ConfigEnv) -> Self {
        let path = env.expand_tilde(path);
        match Self::load(&path, env) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                debug!("{}; using defaults", e);
                Self::defaults(env)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn env() -> ConfigEnv {
        ConfigEnv {
            editor: "nano".to_string(),
            current_dir: PathBuf::from("/work"),
            home_dir: Some(PathBuf::from("/home/loic")),
        }
    }

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("researchnoterc");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_come_from_environment() {
        let config = ResearchNoteConfig::defaults(&env());
        assert_eq!(config.author, "");
        assert_eq!(config.editor, "nano");
        assert_eq!(config.notes_dir, PathBuf::from("/work"));
        assert_eq!(config.note_format, "rst");
    }

    #[test]
    fn loads_all_keys() {
        let (_dir, path) = write_config(
            "[ResearchNote]\n\
             author = Loïc Séguin-Charbonneau\n\
             notes_dir = ~/PhD/Notebook\n\
             editor = vim -f\n\
             note_format = .md\n",
        );
        let config = ResearchNoteConfig::load(&path, &env()).unwrap();
        assert_eq!(config.author, "Loïc Séguin-Charbonneau");
        assert_eq!(config.editor, "vim -f");
        assert_eq!(config.notes_dir, PathBuf::from("/home/loic/PhD/Notebook"));
        assert_eq!(config.note_format, "md");
    }

    #[test]
    fn missing_keys_take_defaults() {
        let (_dir, path) = write_config("[ResearchNote]\nauthor = Someone\n");
        let config = ResearchNoteConfig::load(&path, &env()).unwrap();
        assert_eq!(config.author, "Someone");
        assert_eq!(config.editor, "nano");
        assert_eq!(config.notes_dir, PathBuf::from("/work"));
        assert_eq!(config.note_format, "rst");
    }

    #[test]
    fn missing_section_is_unreadable() {
        let (_dir, path) = write_config("[Other]\nauthor = Someone\n");
        let err = ResearchNoteConfig::load(&path, &env()).unwrap_err();
        assert!(matches!(err, NoteError::ConfigUnreadable { .. }));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = ResearchNoteConfig::load(&dir.path().join("none"), &env()).unwrap_err();
        assert!(matches!(err, NoteError::ConfigUnreadable { .. }));
    }

    #[test]
    fn load_or_default_recovers() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("none");
        let config = ResearchNoteConfig::load_or_default(missing.to_str().unwrap(), &env());
        assert_eq!(config, ResearchNoteConfig::defaults(&env()));

        let (_dir, path) = write_config("no section here\n");
        let config = ResearchNoteConfig::load_or_default(path.to_str().unwrap(), &env());
        assert_eq!(config, ResearchNoteConfig::defaults(&env()));
    }

    #[test]
    fn expands_tilde() {
        let env = env();
        assert_eq!(env.expand_tilde("~"), PathBuf::from("/home/loic"));
        assert_eq!(
            env.expand_tilde("~/.researchnoterc"),
            PathBuf::from("/home/loic/.researchnoterc")
        );
        assert_eq!(env.expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(env.expand_tilde("~other/x"), PathBuf::from("~other/x"));

        let homeless = ConfigEnv {
            home_dir: None,
            ..ConfigEnv::default()
        };
        assert_eq!(homeless.expand_tilde("~/x"), PathBuf::from("~/x"));
    }
}
