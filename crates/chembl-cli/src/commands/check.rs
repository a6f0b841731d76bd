//! Check command - validate ChEMBL identifiers.

use colored::Colorize;
use chembl::ChemblId;

pub fn run(ids: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut invalid = 0usize;

    for raw in &ids {
        match ChemblId::parse(raw.as_str()) {
            Ok(id) => println!(
                "{} {} (compound: {}, target: {}, assay: {})",
                "✓".green(),
                id.as_str().white().bold(),
                id.is_compound(),
                id.is_target(),
                id.is_assay()
            ),
            Err(e) => {
                invalid += 1;
                println!("{} {}", "✗".red(), e);
            }
        }
    }

    if invalid > 0 {
        return Err(format!("{} of {} identifiers are invalid", invalid, ids.len()).into());
    }
    Ok(())
}
