use super::render::{eprint_messages, print_messages, render_config, render_note_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use researchnote::api::NotebookApi;
use researchnote::config::{ConfigEnv, ResearchNoteConfig};
use researchnote::editor::open_in_editor;
use researchnote::error::{NoteError, Result};
use researchnote::store::fs::FileStore;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: NotebookApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Create { title, no_editor }) => handle_create(&mut ctx, title, no_editor),
        Some(Commands::Edit { identifier }) => handle_edit(&ctx, identifier),
        Some(Commands::List { reverse }) => handle_list(&ctx, reverse),
        Some(Commands::Path { identifier }) => handle_path(&ctx, identifier),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&ctx, false),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> AppContext {
    let env = ConfigEnv::from_process();
    let config = ResearchNoteConfig::load_or_default(&cli.config, &env);
    let store = FileStore::new(config.notes_dir.clone()).with_file_ext(&config.note_format);
    debug!(notes_dir = %store.root().display(), format = %store.file_ext(), "using notebook");

    AppContext {
        api: NotebookApi::new(store, config),
    }
}

fn handle_create(ctx: &mut AppContext, title: Vec<String>, no_editor: bool) -> Result<()> {
    let result = ctx.api.create_note(&title)?;
    let Some(path) = result.note_paths.first() else {
        return Ok(());
    };

    if no_editor {
        print_messages(&result.messages);
        return Ok(());
    }

    let opened = launch_editor(ctx, path)?;
    if !opened {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_edit(ctx: &AppContext, identifier: Vec<String>) -> Result<()> {
    let result = ctx.api.note_paths(&identifier)?;
    for path in &result.note_paths {
        if !launch_editor(ctx, path)? {
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, reverse: bool) -> Result<()> {
    let result = ctx.api.list_notes(reverse)?;
    print!("{}", render_note_list(&result.listed_notes));
    eprint_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext, identifier: Vec<String>) -> Result<()> {
    let result = ctx.api.note_paths(&identifier)?;
    for path in &result.note_paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.config()?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    Ok(())
}

/// Opens `path` in the configured editor. Returns `false` when no editor is
/// configured, after telling the user on stderr.
fn launch_editor(ctx: &AppContext, path: &Path) -> Result<bool> {
    match open_in_editor(&ctx.api.settings().editor, path) {
        Ok(()) => Ok(true),
        Err(NoteError::EditorUnavailable) => {
            eprintln!("{}", NoteError::EditorUnavailable.to_string().yellow());
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
