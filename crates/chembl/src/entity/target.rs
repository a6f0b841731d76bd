//! Target records.

use crate::error::Result;
use crate::id::{ChemblId, DataType};
use crate::rest::Resolver;

use super::Bioactivity;

crate::attribute_record! {
    /// A biological target (protein, organism, cell line, ...).
    pub struct Target("target", Target) {
        chembl_id / set_chembl_id => "chemblId",
        target_type / set_target_type => "targetType",
        preferred_name / set_preferred_name => "preferredName",
        /// UniProt accession, for protein targets.
        protein_accession / set_protein_accession => "proteinAccession",
        synonyms / set_synonyms => "synonyms",
        organism / set_organism => "organism",
        description / set_description => "description",
        gene_names / set_gene_names => "geneNames",
    }
}

impl Target {
    pub fn identifier(&self) -> Result<ChemblId> {
        ChemblId::target(self.chembl_id())
    }

    /// Look up every bioactivity measured against this target.
    pub fn bioactivities<R: Resolver + ?Sized>(&self, resolver: &R) -> Result<Vec<Bioactivity>> {
        resolver.find_bioactivities(DataType::Target, &self.identifier()?)
    }
}
