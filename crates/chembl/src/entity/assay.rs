//! Assay records.

use crate::error::Result;
use crate::id::{ChemblId, DataType};
use crate::rest::Resolver;

use super::Bioactivity;

crate::attribute_record! {
    /// An experimental protocol and the document it was reported in.
    pub struct Assay("assay", Assay) {
        chembl_id / set_chembl_id => "chemblId",
        /// `B` (binding), `F` (functional), `A` (ADMET), ...
        assay_type / set_assay_type => "assayType",
        journal / set_journal => "journal",
        assay_organism / set_assay_organism => "assayOrganism",
        assay_strain / set_assay_strain => "assayStrain",
        assay_description / set_assay_description => "assayDescription",
        num_bioactivities / set_num_bioactivities => "numBioactivities",
    }
}

impl Assay {
    pub fn identifier(&self) -> Result<ChemblId> {
        ChemblId::assay(self.chembl_id())
    }

    /// Look up every bioactivity reported by this assay.
    pub fn bioactivities<R: Resolver + ?Sized>(&self, resolver: &R) -> Result<Vec<Bioactivity>> {
        resolver.find_bioactivities(DataType::Assay, &self.identifier()?)
    }
}
