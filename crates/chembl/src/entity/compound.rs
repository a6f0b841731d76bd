//! Compound records.

use crate::error::Result;
use crate::id::{ChemblId, DataType};
use crate::rest::Resolver;

use super::Bioactivity;

crate::attribute_record! {
    /// A small molecule with its computed properties.
    pub struct Compound("compound", Compound) {
        chembl_id / set_chembl_id => "chemblId",
        known_drug / set_known_drug => "knownDrug",
        med_chem_friendly / set_med_chem_friendly => "medChemFriendly",
        passes_rule_of_three / set_passes_rule_of_three => "passesRuleOfThree",
        molecular_formula / set_molecular_formula => "molecularFormula",
        smiles / set_smiles => "smiles",
        std_inchi_key / set_std_inchi_key => "stdInChiKey",
        species / set_species => "species",
        /// Number of Lipinski rule-of-five violations.
        num_ro5_violations / set_num_ro5_violations => "numRo5Violations",
        rotatable_bonds / set_rotatable_bonds => "rotatableBonds",
        molecular_weight / set_molecular_weight => "molecularWeight",
        alogp / set_alogp => "alogp",
        acd_logp / set_acd_logp => "acdLogp",
        acd_logd / set_acd_logd => "acdLogd",
        acd_acidic_pka / set_acd_acidic_pka => "acdAcidicPka",
        acd_basic_pka / set_acd_basic_pka => "acdBasicPka",
        preferred_compound_name / set_preferred_compound_name => "preferredCompoundName",
        synonyms / set_synonyms => "synonyms",
    }
}

impl Compound {
    /// The compound's own identifier.
    pub fn identifier(&self) -> Result<ChemblId> {
        ChemblId::compound(self.chembl_id())
    }

    /// Look up every bioactivity measured for this compound.
    pub fn bioactivities<R: Resolver + ?Sized>(&self, resolver: &R) -> Result<Vec<Bioactivity>> {
        resolver.find_bioactivities(DataType::Compound, &self.identifier()?)
    }
}
