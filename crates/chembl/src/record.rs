//! Attribute-backed records.
//!
//! Every ChEMBL entity is a fixed, ordered list of string-valued attributes.
//! [`AttributeRecord`] stores those values, [`Entity`] ties a record to its
//! XML element name, and [`attribute_record!`](crate::attribute_record)
//! declares an entity type with one getter/setter pair per attribute.

use indexmap::IndexMap;
use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::format;
use crate::id::DataType;

/// Ordered field name → value storage shared by every entity type.
///
/// All declared fields are always present; a field that was never populated
/// reads as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    values: IndexMap<&'static str, String>,
}

impl AttributeRecord {
    /// Create a record with every declared field blank.
    pub fn new(fields: &'static [&'static str]) -> Self {
        let values = fields.iter().map(|field| (*field, String::new())).collect();
        Self { values }
    }

    /// Create a record from a key→value mapping.
    ///
    /// Keys that are not declared fields are ignored.
    pub fn from_mapping<I, K, V>(fields: &'static [&'static str], mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self::new(fields);
        for (key, value) in mapping {
            if !record.set(key.as_ref(), value) {
                debug!("Ignoring undeclared attribute '{}'", key.as_ref());
            }
        }
        record
    }

    /// Value of a declared field, or `None` if `name` is not declared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value of a declared field; undeclared names read as blank.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Set a declared field. Returns `false` if `name` is not declared.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Whether a declared field holds a non-empty value.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    /// Whether `name` is one of the declared fields.
    pub fn declares(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Declared field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Copy the record out as an owned mapping.
    pub fn to_mapping(&self) -> IndexMap<String, String> {
        self.iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for AttributeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// A ChEMBL record type backed by an [`AttributeRecord`].
pub trait Entity: Sized {
    /// Record kind, which selects the web-service collection.
    const KIND: DataType;

    /// XML element holding one record (e.g. `bioactivity`).
    const ELEMENT: &'static str;

    /// Declared attribute names, in wire order. Each name is also the XML tag.
    const ATTRIBUTES: &'static [&'static str];

    /// Wrap a populated record.
    fn from_record(record: AttributeRecord) -> Self;

    /// The underlying record.
    fn record(&self) -> &AttributeRecord;

    /// Mutable access to the underlying record.
    fn record_mut(&mut self) -> &mut AttributeRecord;

    /// Build the entity from a key→value mapping, ignoring undeclared keys.
    fn from_mapping<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self::from_record(AttributeRecord::from_mapping(Self::ATTRIBUTES, mapping))
    }

    /// Parse a single record, sniffing the payload format.
    fn parse(raw: &str) -> Result<Self> {
        format::parse(raw)
    }

    /// Parse a `<list>` of records, sniffing the payload format.
    fn parse_list(raw: &str) -> Result<Vec<Self>> {
        format::parse_list(raw)
    }
}

/// Declare an entity type backed by an [`AttributeRecord`].
///
/// The header names the XML element and the [`DataType`] variant of the
/// record. Each attribute is written as `getter / setter => "tag"`; the tag is
/// both the attribute name and the XML element it is read from.
///
/// ```
/// use chembl::{attribute_record, Entity};
///
/// attribute_record! {
///     /// A document reference.
///     pub struct Document("document", Document) {
///         chembl_id / set_chembl_id => "chemblId",
///         journal / set_journal => "journal",
///     }
/// }
///
/// let doc = Document::from_mapping([("journal", "J. Med. Chem.")]);
/// assert_eq!(doc.journal(), "J. Med. Chem.");
/// assert_eq!(doc.chembl_id(), "");
/// assert_eq!(Document::ATTRIBUTES, ["chemblId", "journal"]);
/// assert_eq!(Document::KIND, chembl::DataType::Document);
/// ```
#[macro_export]
macro_rules! attribute_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($element:literal, $kind:ident) {
            $(
                $(#[$field_meta:meta])*
                $getter:ident / $setter:ident => $tag:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            record: $crate::record::AttributeRecord,
        }

        impl $name {
            /// Create a record with every attribute blank.
            pub fn new() -> Self {
                Self {
                    record: $crate::record::AttributeRecord::new(
                        <Self as $crate::record::Entity>::ATTRIBUTES,
                    ),
                }
            }

            $(
                $(#[$field_meta])*
                pub fn $getter(&self) -> &str {
                    self.record.value($tag)
                }

                pub fn $setter(&mut self, value: impl Into<String>) {
                    self.record.set($tag, value);
                }
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::record::Entity for $name {
            const KIND: $crate::id::DataType = $crate::id::DataType::$kind;
            const ELEMENT: &'static str = $element;
            const ATTRIBUTES: &'static [&'static str] = &[$($tag),+];

            fn from_record(record: $crate::record::AttributeRecord) -> Self {
                Self { record }
            }

            fn record(&self) -> &$crate::record::AttributeRecord {
                &self.record
            }

            fn record_mut(&mut self) -> &mut $crate::record::AttributeRecord {
                &mut self.record
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S: $crate::__serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::__serde::Serialize::serialize(&self.record, serializer)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["chemblId", "organism", "value"];

    crate::attribute_record! {
        struct Sample("sample", Unknown) {
            chembl_id / set_chembl_id => "chemblId",
            organism / set_organism => "organism",
        }
    }

    #[test]
    fn test_new_record_is_blank() {
        let record = AttributeRecord::new(FIELDS);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("organism"), Some(""));
        assert_eq!(record.get("missing"), None);
        assert!(!record.is_set("organism"));
    }

    #[test]
    fn test_from_mapping_sets_declared_fields_only() {
        let record = AttributeRecord::from_mapping(
            FIELDS,
            [("organism", "Homo sapiens"), ("colour", "blue")],
        );
        assert_eq!(record.value("organism"), "Homo sapiens");
        assert_eq!(record.value("value"), "");
        assert!(!record.declares("colour"));
        assert_eq!(record.value("colour"), "");
    }

    #[test]
    fn test_iteration_keeps_declaration_order() {
        let record = AttributeRecord::from_mapping(FIELDS, [("value", "5900"), ("chemblId", "CHEMBL1")]);
        let fields: Vec<_> = record.fields().collect();
        assert_eq!(fields, FIELDS);

        let pairs: Vec<_> = record.iter().collect();
        assert_eq!(
            pairs,
            vec![("chemblId", "CHEMBL1"), ("organism", ""), ("value", "5900")]
        );
    }

    #[test]
    fn test_set_rejects_undeclared_field() {
        let mut record = AttributeRecord::new(FIELDS);
        assert!(record.set("value", "12"));
        assert!(!record.set("units", "nM"));
        assert_eq!(record.value("value"), "12");
    }

    #[test]
    fn test_generated_accessors() {
        let mut sample = Sample::new();
        assert_eq!(sample.organism(), "");

        sample.set_organism("Rattus norvegicus");
        assert_eq!(sample.organism(), "Rattus norvegicus");
        assert_eq!(sample.record().value("organism"), "Rattus norvegicus");

        assert_eq!(Sample::ELEMENT, "sample");
        assert_eq!(Sample::KIND, DataType::Unknown);
        assert_eq!(Sample::ATTRIBUTES, ["chemblId", "organism"]);
        assert_eq!(Sample::default(), Sample::new());
    }

    #[test]
    fn test_record_serializes_as_ordered_map() {
        let sample = Sample::from_mapping([("organism", "Mus musculus"), ("chemblId", "CHEMBL9")]);
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"chemblId":"CHEMBL9","organism":"Mus musculus"}"#);

        let owned = sample.record().to_mapping();
        assert_eq!(owned.get("chemblId").map(String::as_str), Some("CHEMBL9"));
    }
}
