//! Lookup interface used by cross-reference accessors.

use crate::entity::{Assay, Bioactivity, Compound, Target};
use crate::error::Result;
use crate::id::{ChemblId, DataType};

/// Resolves identifiers to records.
///
/// Every call performs a fresh lookup; implementations own their own timeout
/// and retry policy. A missing record is reported as
/// [`ChemblError::NotFound`](crate::ChemblError::NotFound).
pub trait Resolver {
    /// Find a compound by identifier.
    fn find_compound(&self, id: &ChemblId) -> Result<Compound>;

    /// Find a target by identifier.
    fn find_target(&self, id: &ChemblId) -> Result<Target>;

    /// Find an assay by identifier.
    fn find_assay(&self, id: &ChemblId) -> Result<Assay>;

    /// List the bioactivities recorded for a compound, target or assay.
    fn find_bioactivities(&self, kind: DataType, id: &ChemblId) -> Result<Vec<Bioactivity>>;
}
