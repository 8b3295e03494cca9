mod cli;
mod db;
mod error;
mod fmt;
mod importer;
mod matcher;
mod models;
mod settings;

use clap::Parser;

use cli::{Cli, Commands, IndividualsCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Individuals { command } => match command {
            IndividualsCommands::Add { first, last, role } => {
                cli::individuals::add(&first, &last, role.as_deref())
            }
            IndividualsCommands::List => cli::individuals::list(),
        },
        Commands::Import { file } => cli::import::run(&file),
        Commands::Contributions { limit } => cli::contributions::list(limit),
        Commands::Unmatched => cli::unmatched::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
