//! Example: Summarize a ChEMBL bioactivity list.
//!
//! Usage:
//!   cargo run --example bioactivities -- <file_path>
//!
//! The file holds a `<list>` of `<bioactivity>` records as served by
//! `/targets/{id}/bioactivities`.

use std::collections::BTreeMap;
use std::env;

use chembl::{format, Bioactivity};

fn main() -> chembl::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example bioactivities -- <file_path>");
        std::process::exit(1);
    }

    let activities: Vec<Bioactivity> = format::read_list_file(&args[1])?;
    println!("Bioactivities: {}", activities.len());

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for activity in &activities {
        *by_type.entry(activity.bioactivity_type()).or_insert(0) += 1;
    }
    for (kind, count) in by_type {
        println!("  {:10} {}", kind, count);
    }

    for activity in activities.iter().filter(|a| a.bioactivity_type() == "IC50") {
        println!(
            "{} -> {} {} {} {}",
            activity.parent_cmpd_chemblid(),
            activity.target_name(),
            activity.operator(),
            activity.value(),
            activity.units()
        );
    }

    Ok(())
}
