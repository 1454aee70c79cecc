use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use crate::store::json::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "json-rolodex", version, about = "Simple Contact Book")]
pub struct Cli {
    /// JSON file the contacts are kept in
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Replace a contact that already has this name
        #[arg(long)]
        overwrite: bool,
    },
    /// Show the details of a contact
    View {
        /// Contact name
        #[arg(long)]
        name: String,
    },
    /// List contact names in order
    List {
        /// Also show phone and email
        #[arg(short, long)]
        details: bool,
    },
    /// Edit the phone and email of an existing contact
    /// Any field left out keeps its current value
    #[command(group(
        ArgGroup::new("changes")
            .required(true)
            .multiple(true)
            .args(["phone", "email"])
    ))]
    Edit {
        /// Contact name
        #[arg(long)]
        name: String,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: PathBuf,

        /// Replace contacts whose name is already taken
        #[arg(long)]
        overwrite: bool,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path or directory for the exported file
        #[arg(short, long, default_value = ".")]
        des: PathBuf,
    },
}
