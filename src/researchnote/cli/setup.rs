use clap::{Parser, Subcommand};
use researchnote::config::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(name = "researchnote", bin_name = "researchnote", version)]
#[command(about = "Manage a research notebook using reStructuredText files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file to use
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Title of the note
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Edit an existing note
    #[command(alias = "e")]
    Edit {
        /// Note number, date or part of the title
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        identifier: Vec<String>,
    },

    /// List all notes
    #[command(alias = "ls")]
    List {
        /// Show newest notes first
        #[arg(short, long)]
        reverse: bool,
    },

    /// Print the file path of a note
    Path {
        /// Note number, date or part of the title
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        identifier: Vec<String>,
    },

    /// Show the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("researchnote").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn create_collects_title_words() {
        let cli = parse(&["create", "Fitting", "SDSS", "spectra"]);
        match cli.command {
            Some(Commands::Create { title, no_editor }) => {
                assert_eq!(title, vec!["Fitting", "SDSS", "spectra"]);
                assert!(!no_editor);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn create_requires_a_title() {
        assert!(Cli::try_parse_from(["researchnote", "create"]).is_err());
    }

    #[test]
    fn list_reverse_flag() {
        let cli = parse(&["list", "-r"]);
        assert!(matches!(cli.command, Some(Commands::List { reverse: true })));
        let cli = parse(&["ls", "--reverse"]);
        assert!(matches!(cli.command, Some(Commands::List { reverse: true })));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = parse(&["list", "-c", "/tmp/rc"]);
        assert_eq!(cli.config, "/tmp/rc");
        let cli = parse(&["--config", "/tmp/other", "edit", "1"]);
        assert_eq!(cli.config, "/tmp/other");
    }

    #[test]
    fn config_defaults_to_home_rc() {
        let cli = parse(&["list"]);
        assert_eq!(cli.config, "~/.researchnoterc");
    }

    #[test]
    fn edit_accepts_negative_numbers() {
        let cli = parse(&["edit", "-1"]);
        match cli.command {
            Some(Commands::Edit { identifier }) => assert_eq!(identifier, vec!["-1"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn no_command_is_allowed() {
        assert!(parse(&[]).command.is_none());
    }
}
