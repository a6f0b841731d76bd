//! chembl CLI - parse and look up ChEMBL bioactivity records.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let result = match cli.command {
        Commands::Check { ids } => commands::check::run(ids),

        Commands::Parse {
            file,
            kind,
            list,
            json,
        } => commands::parse::run(file, kind, list, json),

        Commands::Fetch { kind, id, json } => commands::fetch::run(kind, id, json),

        Commands::Bioactivities {
            kind,
            id,
            limit,
            json,
        } => commands::fetch::bioactivities(kind, id, limit, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
