//! Error types for the ChEMBL data model.

use std::path::PathBuf;
use thiserror::Error;

use crate::format::Format;
use crate::id::DataType;

/// Main error type for ChEMBL operations.
#[derive(Debug, Error)]
pub enum ChemblError {
    /// Identifier text does not match `CHEMBL<digits>`.
    #[error("Invalid ChEMBL identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Payload starts with neither `<` nor `{`.
    #[error("Unrecognized payload format: {0:?}")]
    UnrecognizedFormat(String),

    /// The payload format was recognized but has no parser for this entity.
    #[error("{format} parsing is not supported for {entity} records")]
    NotSupported {
        format: Format,
        entity: &'static str,
    },

    /// XML well-formedness failure.
    #[error("Malformed XML document: {0}")]
    MalformedDocument(String),

    /// The document root is not the element this record type expects.
    #[error("Expected <{expected}> element, found <{found}>")]
    UnexpectedElement {
        expected: &'static str,
        found: String,
    },

    /// A lookup did not resolve to an existing record.
    #[error("No {kind} record found for {id}")]
    NotFound { kind: DataType, id: String },

    /// Transport-level failure talking to the ChEMBL web services.
    #[error("Request failed: {0}")]
    Request(String),

    /// Error reading a payload from disk.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A secondary lookup key (InChIKey, UniProt accession) is malformed.
    #[error("Invalid {kind}: {key:?}")]
    InvalidLookupKey { kind: &'static str, key: String },
}

impl From<quick_xml::Error> for ChemblError {
    fn from(err: quick_xml::Error) -> Self {
        ChemblError::MalformedDocument(err.to_string())
    }
}

/// Result type alias for ChEMBL operations.
pub type Result<T> = std::result::Result<T, ChemblError>;
