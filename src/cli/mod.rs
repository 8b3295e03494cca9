pub mod contributions;
pub mod import;
pub mod individuals;
pub mod init;
pub mod unmatched;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "redstring", about = "Local campaign-finance records CLI with a CFB contribution-filing importer.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up redstring: choose a data directory and initialize the database.
    Init {
        /// Path for redstring data (default: ~/Documents/redstring)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Manage canonical individuals (the recipient-matching universe).
    Individuals {
        #[command(subcommand)]
        command: IndividualsCommands,
    },
    /// Import a CFB contributions CSV.
    Import {
        /// Path to the contributions CSV file
        file: String,
    },
    /// List imported contributions.
    Contributions {
        /// Show at most this many, most recent first
        #[arg(long, default_value_t = 25)]
        limit: usize,
    },
    /// Show the unmatched recipient names from the last import.
    Unmatched,
}

#[derive(Subcommand)]
pub enum IndividualsCommands {
    /// Add a canonical individual.
    Add {
        /// First name
        #[arg(long)]
        first: String,
        /// Last name
        #[arg(long)]
        last: String,
        /// Role annotation (e.g. council member, lobbyist)
        #[arg(long)]
        role: Option<String>,
    },
    /// List canonical individuals.
    List,
}
