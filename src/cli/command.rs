use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::domain::contact::ContactId;
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "rusty-addressbook", version, about = "Simple in-memory address book")]
pub struct Cli {
    /// Start with an empty address book instead of the three sample contacts
    #[arg(long, env = "ADDRESS_BOOK_NO_SEED")]
    pub no_seed: bool,

    /// Log filter directive, e.g. "debug" (falls back to RUST_LOG, then "warn")
    #[arg(long, env = "ADDRESS_BOOK_LOG")]
    pub log_level: Option<String>,

    /// Default destination for CSV exports
    #[arg(
        long,
        env = "ADDRESS_BOOK_EXPORT_PATH",
        default_value = "./import_export/exported.csv"
    )]
    pub export_path: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session with the list and form pages (default)
    Shell,

    /// Print the starting contacts and exit
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export the starting contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<PathBuf>,
    },
}

/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Add,
    Edit(ContactId),
    Show(ContactId),
    Delete(ContactId),
    Open(String),
    Export(Option<PathBuf>),
    Import(PathBuf),
    Help,
    Exit,
}

impl FromStr for ShellCommand {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let words: Vec<&str> = input.split_whitespace().collect();

        let command = match words.as_slice() {
            ["list"] | ["ls"] => ShellCommand::List,
            ["add"] | ["new"] => ShellCommand::Add,
            ["edit", id] => ShellCommand::Edit(id.parse()?),
            ["show", id] => ShellCommand::Show(id.parse()?),
            ["delete", id] | ["rm", id] => ShellCommand::Delete(id.parse()?),
            ["open", path] => ShellCommand::Open(path.to_string()),
            [path] if path.starts_with('/') => ShellCommand::Open(path.to_string()),
            ["export"] => ShellCommand::Export(None),
            ["export", path] => ShellCommand::Export(Some(PathBuf::from(path))),
            ["import", path] => ShellCommand::Import(PathBuf::from(path)),
            ["help"] | ["?"] => ShellCommand::Help,
            ["exit"] | ["quit"] | ["q"] => ShellCommand::Exit,
            _ => return Err(AppError::ParseCommand(input.to_string())),
        };
        Ok(command)
    }
}

pub const SHELL_HELP: &str = "\
Commands:
  list                 show all contacts
  add                  open the new contact form
  edit <id>            open the edit form for a contact
  show <id>            show every field of a contact
  delete <id>          delete a contact (asks for confirmation)
  open <path>          navigate to /, /add or /edit/<id>
  export [path]        write contacts to a .csv file
  import <path>        add contacts from a .csv file
  help                 show this help
  exit                 leave the address book

In a form, type * to go back to the list.";
