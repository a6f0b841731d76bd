//! Bioactivity records.
//!
//! ```text
//! <list>
//!   <bioactivity>
//!     <parent__cmpd__chemblid>CHEMBL1214402</parent__cmpd__chemblid>
//!     <ingredient__cmpd__chemblid>CHEMBL1214402</ingredient__cmpd__chemblid>
//!     <target__chemblid>CHEMBL240</target__chemblid>
//!     <target__confidence>9</target__confidence>
//!     <target__name>HERG</target__name>
//!     <reference>Bioorg. Med. Chem. Lett., (2010) 20:15:4359</reference>
//!     <name__in__reference>26</name__in__reference>
//!     <organism>Homo sapiens</organism>
//!     <bioactivity__type>IC50</bioactivity__type>
//!     <activity__comment>Unspecified</activity__comment>
//!     <operator>=</operator>
//!     <units>nM</units>
//!     <assay__chemblid>CHEMBL1217643</assay__chemblid>
//!     <assay__type>B</assay__type>
//!     <assay__description>Inhibition of human hERG</assay__description>
//!     <value>5900</value>
//!   </bioactivity>
//! </list>
//! ```

use crate::error::Result;
use crate::id::ChemblId;
use crate::rest::Resolver;

use super::{Assay, Compound, Target};

crate::attribute_record! {
    /// One measured interaction between a compound and a target in an assay.
    pub struct Bioactivity("bioactivity", Unknown) {
        /// Parent compound identifier.
        parent_cmpd_chemblid / set_parent_cmpd_chemblid => "parent__cmpd__chemblid",
        /// Identifier of the compound actually tested (salt form, etc.).
        ingredient_cmpd_chemblid / set_ingredient_cmpd_chemblid => "ingredient__cmpd__chemblid",
        target_chemblid / set_target_chemblid => "target__chemblid",
        /// Target assignment confidence score (0-9).
        target_confidence / set_target_confidence => "target__confidence",
        target_name / set_target_name => "target__name",
        reference / set_reference => "reference",
        name_in_reference / set_name_in_reference => "name__in__reference",
        organism / set_organism => "organism",
        /// Measurement type, e.g. `IC50` or `Ki`.
        bioactivity_type / set_bioactivity_type => "bioactivity__type",
        activity_comment / set_activity_comment => "activity__comment",
        /// Relation between the measured and reported value, e.g. `=` or `>`.
        operator / set_operator => "operator",
        units / set_units => "units",
        assay_chemblid / set_assay_chemblid => "assay__chemblid",
        assay_type / set_assay_type => "assay__type",
        assay_description / set_assay_description => "assay__description",
        value / set_value => "value",
    }
}

impl Bioactivity {
    pub fn parent_compound_id(&self) -> Result<ChemblId> {
        ChemblId::compound(self.parent_cmpd_chemblid())
    }

    pub fn compound_id(&self) -> Result<ChemblId> {
        ChemblId::compound(self.ingredient_cmpd_chemblid())
    }

    pub fn target_id(&self) -> Result<ChemblId> {
        ChemblId::target(self.target_chemblid())
    }

    pub fn assay_id(&self) -> Result<ChemblId> {
        ChemblId::assay(self.assay_chemblid())
    }

    /// Look up the parent compound.
    pub fn parent_compound<R: Resolver + ?Sized>(&self, resolver: &R) -> Result<Compound> {
        resolver.find_compound(&self.parent_compound_id()?)
    }

    /// Look up the tested ingredient compound.
    pub fn compound<R: Resolver + ?Sized>(&self, resolver: &R) -> Result<Compound> {
        resolver.find_compound(&self.compound_id()?)
    }

    /// Look up the target.
    pub fn target<R: Resolver + ?Sized>(&self, resolver: &R) -> Result<Target> {
        resolver.find_target(&self.target_id()?)
    }

    /// Look up the assay.
    pub fn assay<R: Resolver + ?Sized>(&self, resolver: &R) -> Result<Assay> {
        resolver.find_assay(&self.assay_id()?)
    }
}
