//! Compact XML-to-object conversion
//!
//! Converts an XML document into a `serde_json::Value` tree in which each
//! element becomes a keyed object, attributes fold under [`ATTRIBUTES_KEY`],
//! text under [`TEXT_KEY`] and repeated sibling elements become arrays. The
//! document declaration is tagged under [`DECLARATION_KEY`] so callers can
//! remove it before handing the tree to consumers.

use quick_xml::Reader;
use quick_xml::events::{BytesCData, BytesDecl, BytesRef, BytesStart, BytesText, Event};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Key under which element attributes are collected
pub const ATTRIBUTES_KEY: &str = "_attributes";

/// Key under which element text content is collected
pub const TEXT_KEY: &str = "_text";

/// Key under which CDATA content is collected
pub const CDATA_KEY: &str = "_cdata";

/// Top-level key tagging the XML declaration
pub const DECLARATION_KEY: &str = "_declaration";

/// Convert an XML document into its compact object representation.
///
/// Comments, processing instructions and doctype declarations are dropped.
/// Whitespace-only text between elements is trimmed away.
pub fn to_compact(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // Open elements, innermost last. The root map collects top-level keys.
    let mut stack: Vec<(String, Map<String, Value>)> = Vec::new();
    let mut root = Map::new();

    loop {
        match reader.read_event()? {
            Event::Decl(decl) => {
                root.insert(DECLARATION_KEY.to_string(), declaration_node(&decl)?);
            }
            Event::Start(start) => {
                let name = element_name(&start);
                let node = element_node(&start)?;
                stack.push((name, node));
            }
            Event::Empty(start) => {
                let name = element_name(&start);
                let node = element_node(&start)?;
                attach(&mut stack, &mut root, name, Value::Object(node));
            }
            Event::End(end) => {
                let (name, node) = stack.pop().ok_or_else(|| {
                    Error::unexpected_end_tag(String::from_utf8_lossy(end.name().as_ref()))
                })?;
                attach(&mut stack, &mut root, name, Value::Object(node));
            }
            Event::Text(text) => {
                if let Some((_, node)) = stack.last_mut() {
                    append_text(node, TEXT_KEY, &text_content(&text)?);
                }
            }
            Event::CData(cdata) => {
                let content = cdata_content(cdata);
                if let Some((_, node)) = stack.last_mut() {
                    append_text(node, CDATA_KEY, &content);
                }
            }
            // Entity references inside text arrive as their own events.
            Event::GeneralRef(entity) => {
                let content = entity_content(entity)?;
                if let Some((_, node)) = stack.last_mut() {
                    append_text(node, TEXT_KEY, &content);
                }
            }
            Event::Eof => break,
            // Comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some((name, _)) = stack.pop() {
        return Err(Error::unclosed_element(name));
    }

    Ok(Value::Object(root))
}

/// Remove the declaration tag from a converted document, if present.
pub fn strip_declaration(value: &mut Value) {
    if let Some(map) = value.as_object_mut() {
        map.remove(DECLARATION_KEY);
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// Build the object node for an element, folding its attributes in.
fn element_node(start: &BytesStart<'_>) -> Result<Map<String, Value>> {
    let mut node = Map::new();
    let mut attributes = Map::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::invalid_content(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        let value = quick_xml::escape::unescape(&raw)
            .map_err(|e| Error::invalid_content(e.to_string()))?
            .into_owned();
        attributes.insert(key, Value::String(value));
    }

    if !attributes.is_empty() {
        node.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
    }
    Ok(node)
}

fn declaration_node(decl: &BytesDecl<'_>) -> Result<Value> {
    let mut attributes = Map::new();

    let version = decl
        .version()
        .map_err(|e| Error::invalid_content(e.to_string()))?;
    attributes.insert(
        "version".to_string(),
        Value::String(String::from_utf8_lossy(&version).into_owned()),
    );
    if let Some(encoding) = decl.encoding() {
        let encoding = encoding.map_err(|e| Error::invalid_content(e.to_string()))?;
        attributes.insert(
            "encoding".to_string(),
            Value::String(String::from_utf8_lossy(&encoding).into_owned()),
        );
    }
    if let Some(standalone) = decl.standalone() {
        let standalone = standalone.map_err(|e| Error::invalid_content(e.to_string()))?;
        attributes.insert(
            "standalone".to_string(),
            Value::String(String::from_utf8_lossy(&standalone).into_owned()),
        );
    }

    let mut node = Map::new();
    node.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
    Ok(Value::Object(node))
}

fn text_content(text: &BytesText<'_>) -> Result<String> {
    let decoded = text
        .decode()
        .map_err(|e| Error::invalid_content(e.to_string()))?;
    let unescaped = quick_xml::escape::unescape(&decoded)
        .map_err(|e| Error::invalid_content(e.to_string()))?;
    Ok(unescaped.into_owned())
}

fn cdata_content(cdata: BytesCData<'_>) -> String {
    String::from_utf8_lossy(&cdata.into_inner()).into_owned()
}

/// Resolve a predefined or numeric entity reference to its text.
fn entity_content(entity: BytesRef<'_>) -> Result<String> {
    let name = String::from_utf8_lossy(&entity.into_inner()).into_owned();
    let resolved = match name.as_str() {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "apos" => '\'',
        "quot" => '"',
        other => {
            let code = if let Some(hex) = other.strip_prefix("#x").or_else(|| other.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = other.strip_prefix('#') {
                dec.parse::<u32>().ok()
            } else {
                None
            };
            code.and_then(char::from_u32)
                .ok_or_else(|| Error::invalid_content(format!("unresolvable reference &{other};")))?
        }
    };
    Ok(resolved.to_string())
}

/// Attach a completed child node to its parent, turning repeated sibling
/// tags into arrays.
fn attach(
    stack: &mut [(String, Map<String, Value>)],
    root: &mut Map<String, Value>,
    name: String,
    value: Value,
) {
    let parent = match stack.last_mut() {
        Some((_, node)) => node,
        None => root,
    };
    match parent.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            parent.insert(name, value);
        }
    }
}

/// Merge a run of text into the node, concatenating split segments.
fn append_text(node: &mut Map<String, Value>, key: &str, content: &str) {
    if content.is_empty() {
        return;
    }
    match node.get_mut(key) {
        Some(Value::String(existing)) => existing.push_str(content),
        _ => {
            node.insert(key.to_string(), Value::String(content.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_element_with_text() {
        let value = to_compact("<status>ok</status>").unwrap();
        assert_eq!(value, json!({"status": {"_text": "ok"}}));
    }

    #[test]
    fn test_attributes_fold_into_node() {
        let value = to_compact(r#"<asset id="500" rating="4.5"/>"#).unwrap();
        assert_eq!(
            value,
            json!({"asset": {"_attributes": {"id": "500", "rating": "4.5"}}})
        );
    }

    #[test]
    fn test_repeated_siblings_become_array() {
        let value = to_compact("<buddies><buddy>a</buddy><buddy>b</buddy><buddy>c</buddy></buddies>")
            .unwrap();
        assert_eq!(
            value,
            json!({"buddies": {"buddy": [
                {"_text": "a"},
                {"_text": "b"},
                {"_text": "c"}
            ]}})
        );
    }

    #[test]
    fn test_declaration_is_tagged() {
        let value = to_compact(r#"<?xml version="1.0" encoding="UTF-8"?><stats/>"#).unwrap();
        assert_eq!(
            value,
            json!({
                "_declaration": {"_attributes": {"version": "1.0", "encoding": "UTF-8"}},
                "stats": {}
            })
        );
    }

    #[test]
    fn test_strip_declaration() {
        let mut value = to_compact(r#"<?xml version="1.0"?><stats><day>17</day></stats>"#).unwrap();
        strip_declaration(&mut value);
        assert_eq!(value, json!({"stats": {"day": {"_text": "17"}}}));
    }

    #[test]
    fn test_strip_declaration_without_declaration() {
        let mut value = to_compact("<stats/>").unwrap();
        strip_declaration(&mut value);
        assert_eq!(value, json!({"stats": {}}));
    }

    #[test]
    fn test_nested_structure() {
        let xml = r#"<user name="alice"><profile><tagline>hi there</tagline></profile></user>"#;
        let value = to_compact(xml).unwrap();
        assert_eq!(
            value,
            json!({"user": {
                "_attributes": {"name": "alice"},
                "profile": {"tagline": {"_text": "hi there"}}
            }})
        );
    }

    #[test]
    fn test_entities_are_unescaped() {
        let value = to_compact(r#"<comment text="a &amp; b">x&lt;y</comment>"#).unwrap();
        assert_eq!(
            value,
            json!({"comment": {
                "_attributes": {"text": "a & b"},
                "_text": "x<y"
            }})
        );
    }

    #[test]
    fn test_cdata_content() {
        let value = to_compact("<description><![CDATA[<b>wild</b>]]></description>").unwrap();
        assert_eq!(
            value,
            json!({"description": {"_cdata": "<b>wild</b>"}})
        );
    }

    #[test]
    fn test_whitespace_between_elements_is_dropped() {
        let value = to_compact("<a>\n  <b>x</b>\n  <c>y</c>\n</a>").unwrap();
        assert_eq!(
            value,
            json!({"a": {"b": {"_text": "x"}, "c": {"_text": "y"}}})
        );
    }

    #[test]
    fn test_comments_are_dropped() {
        let value = to_compact("<a><!-- nothing to see --><b>x</b></a>").unwrap();
        assert_eq!(value, json!({"a": {"b": {"_text": "x"}}}));
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(to_compact("<a><b></a>").is_err());
        assert!(to_compact("<a>").is_err());
    }
}
