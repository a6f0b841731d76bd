//! Payload format detection and dispatch.
//!
//! ChEMBL web services answer in XML or JSON. Only XML has a parser; JSON and
//! RDF payloads are recognized and rejected with
//! [`ChemblError::NotSupported`] so callers never see a partially populated
//! record.
//!
//! # Example
//!
//! ```
//! use chembl::format::{self, Format};
//! use chembl::Bioactivity;
//!
//! let xml = "<bioactivity><value>5900</value></bioactivity>";
//! assert_eq!(Format::sniff(xml).unwrap(), Format::Xml);
//!
//! let record: Bioactivity = format::parse(xml).unwrap();
//! assert_eq!(record.value(), "5900");
//! ```

pub mod xml;

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ChemblError, Result};
use crate::record::Entity;

/// Characters of an unrecognized payload echoed back in the error.
const PREVIEW_LEN: usize = 32;

/// Payload formats served by the ChEMBL web services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Xml,
    Json,
    Rdf,
}

impl Format {
    /// Detect the format from the first non-whitespace character.
    ///
    /// RDF is never sniffed; RDF/XML is indistinguishable from XML by its
    /// first character and has to be requested with [`parse_as`].
    pub fn sniff(raw: &str) -> Result<Self> {
        let body = raw.trim_start_matches('\u{feff}').trim_start();
        match body.chars().next() {
            Some('<') => Ok(Format::Xml),
            Some('{') => Ok(Format::Json),
            _ => Err(ChemblError::UnrecognizedFormat(
                body.chars().take(PREVIEW_LEN).collect(),
            )),
        }
    }

    /// Display name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Xml => "XML",
            Format::Json => "JSON",
            Format::Rdf => "RDF",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a single record, sniffing the payload format.
pub fn parse<E: Entity>(raw: &str) -> Result<E> {
    parse_as(Format::sniff(raw)?, raw)
}

/// Parse a single record in a known format.
pub fn parse_as<E: Entity>(format: Format, raw: &str) -> Result<E> {
    debug!("Parsing <{}> record as {}", E::ELEMENT, format);
    match format {
        Format::Xml => {
            let mapping = xml::extract_record(raw, E::ELEMENT, E::ATTRIBUTES)?;
            Ok(E::from_mapping(mapping))
        }
        Format::Json | Format::Rdf => Err(ChemblError::NotSupported {
            format,
            entity: E::ELEMENT,
        }),
    }
}

/// Parse a list of records, sniffing the payload format.
pub fn parse_list<E: Entity>(raw: &str) -> Result<Vec<E>> {
    parse_list_as(Format::sniff(raw)?, raw)
}

/// Parse a list of records in a known format.
///
/// The whole list fails if any record fails.
pub fn parse_list_as<E: Entity>(format: Format, raw: &str) -> Result<Vec<E>> {
    debug!("Parsing <{}> list as {}", E::ELEMENT, format);
    match format {
        Format::Xml => Ok(xml::extract_list(raw, E::ELEMENT, E::ATTRIBUTES)?
            .into_iter()
            .map(E::from_mapping)
            .collect()),
        Format::Json | Format::Rdf => Err(ChemblError::NotSupported {
            format,
            entity: E::ELEMENT,
        }),
    }
}

/// Read and parse a single record from a file.
pub fn read_file<E: Entity>(path: impl AsRef<Path>) -> Result<E> {
    parse(&read_payload(path.as_ref())?)
}

/// Read and parse a list of records from a file.
pub fn read_list_file<E: Entity>(path: impl AsRef<Path>) -> Result<Vec<E>> {
    parse_list(&read_payload(path.as_ref())?)
}

fn read_payload(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ChemblError::Io {
        path: path.to_path_buf(),
        source,
    })
}
