//! XML extraction of attribute records.
//!
//! Field names are the XML tag names verbatim, so `parent__cmpd__chemblid`
//! is read from `<parent__cmpd__chemblid>`. Only direct children of the record
//! element are considered; the text of a field is the concatenation of every
//! text and CDATA node beneath it.
//!
//! Only the predefined XML entities and character references are decoded;
//! documents declaring their own entities in a DOCTYPE internal subset are
//! rejected.

use indexmap::IndexMap;
use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ChemblError, Result};

/// Container element wrapping a list of records.
pub const LIST_ELEMENT: &str = "list";

/// Field name → text content for one record element.
pub type Mapping = IndexMap<&'static str, String>;

/// The document's root element.
enum Root {
    /// `<name>` with content to follow.
    Open(String),
    /// `<name/>`
    Empty(String),
}

/// Extract one record from a document whose root is `element`.
pub fn extract_record(
    xml: &str,
    element: &'static str,
    fields: &'static [&'static str],
) -> Result<Mapping> {
    let mut reader = Reader::from_str(xml);

    let mapping = match read_root(&mut reader)? {
        Root::Open(name) if name == element => read_fields(&mut reader, element, fields)?,
        Root::Empty(name) if name == element => Mapping::new(),
        root => return Err(wrong_root(&mut reader, element, root)),
    };
    read_trailer(&mut reader)?;

    debug!(
        "Extracted {} of {} attributes from <{}>",
        mapping.len(),
        fields.len(),
        element
    );
    Ok(mapping)
}

/// Extract every `element` child of a `<list>` document, in document order.
pub fn extract_list(
    xml: &str,
    element: &'static str,
    fields: &'static [&'static str],
) -> Result<Vec<Mapping>> {
    let mut reader = Reader::from_str(xml);
    let mut records = Vec::new();

    match read_root(&mut reader)? {
        Root::Open(name) if name == LIST_ELEMENT => loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = element_name(&e)?;
                    if name == element {
                        records.push(read_fields(&mut reader, element, fields)?);
                    } else {
                        debug!("Skipping <{}> inside <{}>", name, LIST_ELEMENT);
                        read_text(&mut reader, &name)?;
                    }
                }
                Event::Empty(e) => {
                    if element_name(&e)? == element {
                        records.push(Mapping::new());
                    }
                }
                Event::End(_) => break,
                Event::Eof => return Err(unexpected_eof(LIST_ELEMENT)),
                _ => {}
            }
        },
        Root::Empty(name) if name == LIST_ELEMENT => {}
        root => return Err(wrong_root(&mut reader, LIST_ELEMENT, root)),
    }
    read_trailer(&mut reader)?;

    debug!("Extracted {} <{}> records", records.len(), element);
    Ok(records)
}

/// Skip the prolog and return the root element.
fn read_root(reader: &mut Reader<&[u8]>) -> Result<Root> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => return Ok(Root::Open(element_name(&e)?)),
            Event::Empty(e) => return Ok(Root::Empty(element_name(&e)?)),
            Event::Text(t) => {
                if !t.unescape()?.trim().is_empty() {
                    return Err(ChemblError::MalformedDocument(
                        "text content before the root element".to_string(),
                    ));
                }
            }
            Event::Eof => {
                return Err(ChemblError::MalformedDocument(
                    "document has no root element".to_string(),
                ));
            }
            Event::DocType(d) if d.contains(&b'[') => {
                return Err(ChemblError::MalformedDocument(
                    "DOCTYPE internal subsets are not supported".to_string(),
                ));
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            _ => {
                return Err(ChemblError::MalformedDocument(
                    "unexpected content before the root element".to_string(),
                ));
            }
        }
    }
}

/// Error for a document rooted at the wrong element.
///
/// The rest of the document is still read so that broken markup is reported
/// as [`ChemblError::MalformedDocument`] in preference to the element mismatch.
fn wrong_root(reader: &mut Reader<&[u8]>, expected: &'static str, root: Root) -> ChemblError {
    let found = match root {
        Root::Open(name) => match read_text(reader, &name) {
            Ok(_) => name,
            Err(err) => return err,
        },
        Root::Empty(name) => name,
    };
    if let Err(err) = read_trailer(reader) {
        return err;
    }
    ChemblError::UnexpectedElement { expected, found }
}

/// Read the children of an already opened record element up to its end tag.
fn read_fields(
    reader: &mut Reader<&[u8]>,
    element: &str,
    fields: &'static [&'static str],
) -> Result<Mapping> {
    let mut mapping = Mapping::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e)?;
                let text = read_text(reader, &name)?;
                match declared(fields, &name) {
                    Some(field) => mapping.entry(field).or_default().push_str(&text),
                    None => debug!("Ignoring undeclared <{}> in <{}>", name, element),
                }
            }
            Event::Empty(e) => {
                if let Some(field) = declared(fields, &element_name(&e)?) {
                    mapping.entry(field).or_default();
                }
            }
            Event::End(_) => return Ok(mapping),
            Event::Eof => return Err(unexpected_eof(element)),
            _ => {}
        }
    }
}

/// Concatenated text beneath an already opened element, consuming its end tag.
fn read_text(reader: &mut Reader<&[u8]>, element: &str) -> Result<String> {
    let mut text = String::new();
    let mut depth = 1usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                element_name(&e)?;
                depth += 1;
            }
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(text);
                }
            }
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => {
                let data = std::str::from_utf8(&c)
                    .map_err(|e| ChemblError::MalformedDocument(e.to_string()))?;
                text.push_str(data);
            }
            Event::Eof => return Err(unexpected_eof(element)),
            _ => {}
        }
    }
}

/// Allow only whitespace, comments and processing instructions after the root.
fn read_trailer(reader: &mut Reader<&[u8]>) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Eof => return Ok(()),
            Event::Text(t) if t.unescape()?.trim().is_empty() => {}
            Event::Comment(_) | Event::PI(_) => {}
            _ => {
                return Err(ChemblError::MalformedDocument(
                    "extra content after the root element".to_string(),
                ));
            }
        }
    }
}

fn element_name(e: &BytesStart<'_>) -> Result<String> {
    let qname = e.name();
    let name = std::str::from_utf8(qname.as_ref())
        .map_err(|err| ChemblError::MalformedDocument(err.to_string()))?;
    if name.is_empty() {
        return Err(ChemblError::MalformedDocument("empty element name".to_string()));
    }
    Ok(name.to_string())
}

fn declared(fields: &'static [&'static str], name: &str) -> Option<&'static str> {
    fields.iter().copied().find(|field| *field == name)
}

fn unexpected_eof(element: &str) -> ChemblError {
    ChemblError::MalformedDocument(format!("unexpected end of document inside <{}>", element))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["target__chemblid", "organism", "value"];

    #[test]
    fn test_extract_record_reads_declared_tags() {
        let xml = "<bioactivity>\
                   <target__chemblid>CHEMBL240</target__chemblid>\
                   <organism>Homo sapiens</organism>\
                   <value>5900</value>\
                   </bioactivity>";
        let mapping = extract_record(xml, "bioactivity", FIELDS).unwrap();
        assert_eq!(mapping["target__chemblid"], "CHEMBL240");
        assert_eq!(mapping["organism"], "Homo sapiens");
        assert_eq!(mapping["value"], "5900");
    }

    #[test]
    fn test_missing_tag_is_absent() {
        let xml = "<bioactivity><value>12</value></bioactivity>";
        let mapping = extract_record(xml, "bioactivity", FIELDS).unwrap();
        assert_eq!(mapping.len(), 1);
        assert!(!mapping.contains_key("organism"));
    }

    #[test]
    fn test_empty_tag_is_present_and_blank() {
        let xml = "<bioactivity><organism/><value></value></bioactivity>";
        let mapping = extract_record(xml, "bioactivity", FIELDS).unwrap();
        assert_eq!(mapping.get("organism").map(String::as_str), Some(""));
        assert_eq!(mapping.get("value").map(String::as_str), Some(""));
    }

    #[test]
    fn test_entities_and_cdata_are_decoded() {
        let xml = "<bioactivity>\
                   <organism>Mus &amp; Rattus</organism>\
                   <value><![CDATA[<10]]></value>\
                   </bioactivity>";
        let mapping = extract_record(xml, "bioactivity", FIELDS).unwrap();
        assert_eq!(mapping["organism"], "Mus & Rattus");
        assert_eq!(mapping["value"], "<10");
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let xml = "<bioactivity><organism> Homo sapiens </organism></bioactivity>";
        let mapping = extract_record(xml, "bioactivity", FIELDS).unwrap();
        assert_eq!(mapping["organism"], " Homo sapiens ");
    }

    #[test]
    fn test_undeclared_and_nested_children() {
        let xml = "<bioactivity>\
                   <extra><organism>nested</organism></extra>\
                   <value>1<sub>0</sub></value>\
                   </bioactivity>";
        let mapping = extract_record(xml, "bioactivity", FIELDS).unwrap();
        assert!(!mapping.contains_key("organism"));
        assert_eq!(mapping["value"], "10");
    }

    #[test]
    fn test_prolog_and_trailing_comment_allowed() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                   <!-- generated -->\n\
                   <bioactivity><value>3</value></bioactivity>\n\
                   <!-- end -->\n";
        let mapping = extract_record(xml, "bioactivity", FIELDS).unwrap();
        assert_eq!(mapping["value"], "3");
    }

    #[test]
    fn test_wrong_root_element() {
        let err = extract_record("<compound/>", "bioactivity", FIELDS).unwrap_err();
        match err {
            ChemblError::UnexpectedElement { expected, found } => {
                assert_eq!(expected, "bioactivity");
                assert_eq!(found, "compound");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_root_checks_the_rest_of_the_document() {
        let err = extract_record("<list><bioactivity/></list>\n", "bioactivity", FIELDS).unwrap_err();
        assert!(matches!(err, ChemblError::UnexpectedElement { expected: "bioactivity", .. }));

        for (xml, expected) in [
            ("<list><bioactivity/></lst>", "bioactivity"),
            ("<list><bioactivity/>", "bioactivity"),
            ("<compound/><compound/>", "bioactivity"),
            ("<bioactivity>", LIST_ELEMENT),
            ("<bioactivity><value>1</value>", LIST_ELEMENT),
        ] {
            let err = if expected == LIST_ELEMENT {
                extract_list(xml, "bioactivity", FIELDS).unwrap_err()
            } else {
                extract_record(xml, expected, FIELDS).unwrap_err()
            };
            assert!(
                matches!(err, ChemblError::MalformedDocument(_)),
                "expected MalformedDocument for {:?}, got {:?}",
                xml,
                err
            );
        }
    }

    #[test]
    fn test_empty_element_name_is_malformed() {
        for xml in ["<>", "<bioactivity><></bioactivity>", "<list><></list>"] {
            assert!(matches!(
                extract_record(xml, "bioactivity", FIELDS),
                Err(ChemblError::MalformedDocument(_))
            ));
        }
        assert!(matches!(
            extract_list("<>", "bioactivity", FIELDS),
            Err(ChemblError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_doctype_with_internal_subset_is_rejected() {
        let xml = "<!DOCTYPE bioactivity [<!ENTITY sp \"Homo sapiens\">]>\n\
                   <bioactivity><organism>&sp;</organism></bioactivity>";
        match extract_record(xml, "bioactivity", FIELDS) {
            Err(ChemblError::MalformedDocument(message)) => assert!(message.contains("DOCTYPE")),
            other => panic!("unexpected result: {:?}", other),
        }

        let plain = "<!DOCTYPE bioactivity>\n<bioactivity><value>7</value></bioactivity>";
        assert_eq!(extract_record(plain, "bioactivity", FIELDS).unwrap()["value"], "7");
    }

    #[test]
    fn test_malformed_documents() {
        for xml in [
            "<bioactivity><value>5900</bioactivity>",
            "<bioactivity><value>5900</value>",
            "<bioactivity><value>5900</value",
            "<bioactivity></bioactivity><bioactivity></bioactivity>",
            "<bioactivity><value>&bogus;</value></bioactivity>",
            "",
        ] {
            let err = extract_record(xml, "bioactivity", FIELDS).unwrap_err();
            assert!(
                matches!(err, ChemblError::MalformedDocument(_)),
                "expected MalformedDocument for {:?}, got {:?}",
                xml,
                err
            );
        }
    }

    #[test]
    fn test_extract_list_in_document_order() {
        let xml = "<list>\n\
                   <bioactivity><value>1</value></bioactivity>\n\
                   <note>skipped</note>\n\
                   <bioactivity><value>2</value></bioactivity>\n\
                   <bioactivity/>\n\
                   </list>";
        let records = extract_list(xml, "bioactivity", FIELDS).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["value"], "1");
        assert_eq!(records[1]["value"], "2");
        assert!(records[2].is_empty());
    }

    #[test]
    fn test_extract_empty_list() {
        assert!(extract_list("<list></list>", "bioactivity", FIELDS).unwrap().is_empty());
        assert!(extract_list("<list/>", "bioactivity", FIELDS).unwrap().is_empty());
    }

    #[test]
    fn test_list_fails_as_a_whole() {
        let xml = "<list>\
                   <bioactivity><value>1</value></bioactivity>\
                   <bioactivity><value>2</bioactivity>\
                   </list>";
        assert!(matches!(
            extract_list(xml, "bioactivity", FIELDS),
            Err(ChemblError::MalformedDocument(_))
        ));
    }
}
