//! ChEMBL: client-side data model for the ChEMBL bioactivity database.
//!
//! Parses ChEMBL web-service records (compounds, targets, assays and
//! bioactivities) into attribute-backed records, validates ChEMBL identifiers,
//! and resolves cross-references between records on demand.
//!
//! # Core Pieces
//!
//! - **Identifiers**: [`ChemblId`] accepts exactly `CHEMBL<digits>`
//! - **Records**: every entity is an ordered set of string attributes whose
//!   names are the XML tags they are read from
//! - **Formats**: payloads are sniffed as XML or JSON; only XML is parsed
//! - **Cross-references**: identifier attributes are looked up through a
//!   [`Resolver`] each time they are followed, never cached
//!
//! # Example
//!
//! ```
//! use chembl::{Bioactivity, Entity};
//!
//! let xml = "<list>\
//!            <bioactivity>\
//!            <parent__cmpd__chemblid>CHEMBL1214402</parent__cmpd__chemblid>\
//!            <bioactivity__type>IC50</bioactivity__type>\
//!            <value>5900</value>\
//!            <units>nM</units>\
//!            </bioactivity>\
//!            </list>";
//!
//! let activities = Bioactivity::parse_list(xml).unwrap();
//! assert_eq!(activities.len(), 1);
//! assert_eq!(activities[0].value(), "5900");
//! assert_eq!(activities[0].parent_compound_id().unwrap(), "CHEMBL1214402");
//! ```

pub mod entity;
pub mod error;
pub mod format;
pub mod id;
pub mod record;
pub mod rest;

#[doc(hidden)]
pub use serde as __serde;

pub use entity::{Assay, Bioactivity, Compound, Target};
pub use error::{ChemblError, Result};
pub use format::Format;
pub use id::{ChemblId, DataType};
pub use record::{AttributeRecord, Entity};
pub use rest::{ChemblClient, ClientConfig, MockTransport, Resolver, Transport};
