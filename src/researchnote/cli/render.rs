use colored::Colorize;
use researchnote::api::{CmdMessage, MessageLevel};
use researchnote::config::ResearchNoteConfig;
use researchnote::index::DisplayNote;
use std::fmt::Write;

const COLUMN_GAP: &str = "   ";

/// One `<number>   <date>   <title>` line per note.
pub fn render_note_list(notes: &[DisplayNote]) -> String {
    let mut output = String::new();
    for dn in notes {
        let _ = writeln!(
            output,
            "{}{}{}{}{}",
            dn.number, COLUMN_GAP, dn.info.date, COLUMN_GAP, dn.info.title
        );
    }
    output
}

pub fn render_config(config: &ResearchNoteConfig) -> String {
    format!(
        "author = {}\neditor = {}\nnotes_dir = {}\nnote_format = {}\n",
        config.author,
        config.editor,
        config.notes_dir.display(),
        config.note_format
    )
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        let _ = writeln!(output, "{}", line);
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Like [`print_messages`], for commands whose stdout is data.
pub fn eprint_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        eprint!("{}", output);
    }
}
