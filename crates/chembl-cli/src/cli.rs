//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use chembl::DataType;

/// chembl: parse and look up ChEMBL bioactivity records
#[derive(Parser)]
#[command(name = "chembl")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate ChEMBL identifiers
    Check {
        /// Identifiers to check (e.g. CHEMBL240)
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },

    /// Parse a ChEMBL payload from disk
    Parse {
        /// Path to the XML payload
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Record type held by the payload
        #[arg(short, long, default_value = "bioactivity")]
        kind: RecordKind,

        /// The payload is a <list> of records
        #[arg(long)]
        list: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a compound, target or assay by identifier
    Fetch {
        /// Record type (compound, target, assay)
        #[arg(value_name = "KIND")]
        kind: DataType,

        /// ChEMBL identifier
        #[arg(value_name = "ID")]
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the bioactivities of a compound, target or assay
    Bioactivities {
        /// Record type (compound, target, assay)
        #[arg(value_name = "KIND")]
        kind: DataType,

        /// ChEMBL identifier
        #[arg(value_name = "ID")]
        id: String,

        /// Show at most this many records
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Record type of a payload on disk.
#[derive(Clone, Copy, Debug, Default)]
pub enum RecordKind {
    #[default]
    Bioactivity,
    Compound,
    Target,
    Assay,
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bioactivity" | "bioactivities" | "activity" => Ok(RecordKind::Bioactivity),
            "compound" | "compounds" => Ok(RecordKind::Compound),
            "target" | "targets" => Ok(RecordKind::Target),
            "assay" | "assays" => Ok(RecordKind::Assay),
            _ => Err(format!(
                "Unknown record kind: {}. Use bioactivity, compound, target, or assay.",
                s
            )),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Bioactivity => write!(f, "bioactivity"),
            RecordKind::Compound => write!(f, "compound"),
            RecordKind::Target => write!(f, "target"),
            RecordKind::Assay => write!(f, "assay"),
        }
    }
}
