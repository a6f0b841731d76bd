//! ChEMBL identifier parsing and classification.
//!
//! A ChEMBL identifier is the literal prefix `CHEMBL` followed by one or more
//! ASCII digits. The text alone does not say which database table an
//! identifier belongs to, so a [`ChemblId`] only carries a [`DataType`] when
//! it was built through one of the type-asserting constructors.
//!
//! # Example
//!
//! ```
//! use chembl::{ChemblId, DataType};
//!
//! let id = ChemblId::parse("CHEMBL1214402").unwrap();
//! assert_eq!(id, "CHEMBL1214402");
//! assert_eq!(id.data_type(), None);
//!
//! let target = ChemblId::target("CHEMBL240").unwrap();
//! assert_eq!(target.data_type(), Some(DataType::Target));
//! assert!(target.is_target());
//!
//! assert!(ChemblId::parse("CHEMBLCHEMBL1").is_err());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChemblError, Result};

/// Literal prefix shared by every ChEMBL identifier.
pub const CHEMBL_PREFIX: &str = "CHEMBL";

static CHEMBL_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CHEMBL[0-9]+$").expect("valid identifier pattern"));

/// Kinds of record a ChEMBL identifier can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Compound,
    Target,
    Assay,
    Document,
    Unknown,
}

impl DataType {
    /// Collection name used by the ChEMBL web services (`compounds`, ...).
    pub fn collection(&self) -> &'static str {
        match self {
            DataType::Compound => "compounds",
            DataType::Target => "targets",
            DataType::Assay => "assays",
            DataType::Document => "documents",
            DataType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Compound => "compound",
            DataType::Target => "target",
            DataType::Assay => "assay",
            DataType::Document => "document",
            DataType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl FromStr for DataType {
    type Err = ChemblError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "compound" | "compounds" => Ok(DataType::Compound),
            "target" | "targets" => Ok(DataType::Target),
            "assay" | "assays" => Ok(DataType::Assay),
            "document" | "documents" => Ok(DataType::Document),
            "unknown" => Ok(DataType::Unknown),
            other => Err(ChemblError::Config(format!("Unknown record kind: {}", other))),
        }
    }
}

/// A validated ChEMBL identifier.
///
/// Compares equal to its string form, so it can be used interchangeably with
/// raw strings in equality checks. Equality ignores the asserted kind.
#[derive(Debug, Clone)]
pub struct ChemblId {
    raw: String,
    data_type: Option<DataType>,
}

impl ChemblId {
    /// Parse an identifier without asserting what it refers to.
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let raw = text.into();
        if !Self::is_valid(&raw) {
            return Err(ChemblError::InvalidIdentifier(raw));
        }
        Ok(Self {
            raw,
            data_type: None,
        })
    }

    /// Parse an identifier known to refer to a record of `data_type`.
    pub fn with_type(text: impl Into<String>, data_type: DataType) -> Result<Self> {
        let mut id = Self::parse(text)?;
        id.data_type = Some(data_type);
        Ok(id)
    }

    /// Parse a compound identifier.
    pub fn compound(text: impl Into<String>) -> Result<Self> {
        Self::with_type(text, DataType::Compound)
    }

    /// Parse a target identifier.
    pub fn target(text: impl Into<String>) -> Result<Self> {
        Self::with_type(text, DataType::Target)
    }

    /// Parse an assay identifier.
    pub fn assay(text: impl Into<String>) -> Result<Self> {
        Self::with_type(text, DataType::Assay)
    }

    /// Parse a document identifier.
    pub fn document(text: impl Into<String>) -> Result<Self> {
        Self::with_type(text, DataType::Document)
    }

    /// Check whether `text` is a syntactically valid identifier.
    pub fn is_valid(text: &str) -> bool {
        CHEMBL_ID_PATTERN.is_match(text)
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The numeric suffix, if it fits in a `u64`.
    pub fn number(&self) -> Option<u64> {
        self.raw[CHEMBL_PREFIX.len()..].parse().ok()
    }

    /// The asserted record kind, or `None` for a generically parsed identifier.
    pub fn data_type(&self) -> Option<DataType> {
        self.data_type
    }

    /// Whether this identifier refers to a compound.
    ///
    /// Untyped identifiers answer as compounds; the text carries no kind.
    pub fn is_compound(&self) -> bool {
        matches!(self.data_type, None | Some(DataType::Compound))
    }

    /// Whether this identifier was asserted to name a target.
    pub fn is_target(&self) -> bool {
        self.data_type == Some(DataType::Target)
    }

    /// Whether this identifier was asserted to name an assay.
    pub fn is_assay(&self) -> bool {
        self.data_type == Some(DataType::Assay)
    }

    /// Whether this identifier was asserted to name a document.
    pub fn is_document(&self) -> bool {
        self.data_type == Some(DataType::Document)
    }

    /// Consume the identifier, returning its text.
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for ChemblId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ChemblId {
    type Err = ChemblError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ChemblId {
    type Error = ChemblError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for ChemblId {
    type Error = ChemblError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl AsRef<str> for ChemblId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for ChemblId {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ChemblId {}

impl Hash for ChemblId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialEq<str> for ChemblId {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for ChemblId {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl PartialEq<String> for ChemblId {
    fn eq(&self, other: &String) -> bool {
        &self.raw == other
    }
}

impl PartialEq<ChemblId> for str {
    fn eq(&self, other: &ChemblId) -> bool {
        self == other.raw
    }
}

impl PartialEq<ChemblId> for &str {
    fn eq(&self, other: &ChemblId) -> bool {
        *self == other.raw
    }
}

impl Serialize for ChemblId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for ChemblId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ChemblId::parse(raw).map_err(serde::de::Error::custom)
    }
}
