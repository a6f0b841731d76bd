//! CLI command implementations.

pub mod check;
pub mod fetch;
pub mod parse;

use colored::Colorize;
use serde::Serialize;

use chembl::Entity;

/// Print records as pretty JSON or as `attribute: value` blocks.
///
/// Blank attributes are left out of the human-readable form.
pub fn print_records<E: Entity + Serialize>(
    records: &[E],
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("<{}> #{}", E::ELEMENT, i + 1).cyan().bold());
        for (field, value) in record.record().iter().filter(|(_, v)| !v.is_empty()) {
            println!("  {} {}", format!("{:28}", field).yellow(), value);
        }
    }

    Ok(())
}
