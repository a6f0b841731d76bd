//! Parse command - parse a ChEMBL payload from disk.

use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use chembl::{format, Assay, Bioactivity, Compound, Entity, Target};

use super::print_records;
use crate::cli::RecordKind;

pub fn run(
    file: PathBuf,
    kind: RecordKind,
    list: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    info!("Parsing {} as {}{}", file.display(), kind, if list { " list" } else { "" });

    match kind {
        RecordKind::Bioactivity => show::<Bioactivity>(&file, list, json_output),
        RecordKind::Compound => show::<Compound>(&file, list, json_output),
        RecordKind::Target => show::<Target>(&file, list, json_output),
        RecordKind::Assay => show::<Assay>(&file, list, json_output),
    }
}

fn show<E: Entity + Serialize>(
    file: &Path,
    list: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<E> = if list {
        format::read_list_file(file)?
    } else {
        vec![format::read_file(file)?]
    };
    print_records(&records, json_output)
}
