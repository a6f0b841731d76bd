//! Fetch and bioactivities commands - look up records over HTTP.

use colored::Colorize;
use log::info;

use chembl::{ChemblClient, ChemblId, DataType, Resolver};

use super::print_records;

pub fn run(kind: DataType, id: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let client = ChemblClient::from_env()?;
    let id = ChemblId::with_type(id, kind)?;
    info!("Fetching {} {}", kind, id);

    match kind {
        DataType::Compound => print_records(&[client.find_compound(&id)?], json_output),
        DataType::Target => print_records(&[client.find_target(&id)?], json_output),
        DataType::Assay => print_records(&[client.find_assay(&id)?], json_output),
        DataType::Document | DataType::Unknown => {
            Err(format!("Cannot fetch {} records; use compound, target, or assay", kind).into())
        }
    }
}

pub fn bioactivities(
    kind: DataType,
    id: String,
    limit: Option<usize>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ChemblClient::from_env()?;
    let id = ChemblId::with_type(id, kind)?;
    info!("Fetching bioactivities of {} {}", kind, id);

    let mut activities = client.find_bioactivities(kind, &id)?;
    let total = activities.len();
    if let Some(limit) = limit {
        activities.truncate(limit);
    }

    print_records(&activities, json_output)?;

    if !json_output {
        println!();
        println!(
            "{} {} of {} bioactivities for {}",
            "Showing".green().bold(),
            activities.len().to_string().white().bold(),
            total,
            id
        );
    }
    Ok(())
}
