//! # spore-xml
//!
//! Compact XML-to-object conversion for the XML payloads served by
//! Spore.com. The conversion mirrors the document structure as a
//! `serde_json::Value` tree: each element becomes a keyed object,
//! attributes fold under `_attributes`, text under `_text`, and repeated
//! sibling elements collapse into arrays. No schema is enforced; the tree
//! is a structural mirror of whatever the server returned.
//!
//! The XML declaration is tagged under a distinct `_declaration` key so
//! client code can drop it from responses:
//!
//! ```rust
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?><stats><day>17</day></stats>"#;
//!
//! let mut value = spore_xml::to_compact(xml)?;
//! spore_xml::strip_declaration(&mut value);
//!
//! assert_eq!(value["stats"]["day"]["_text"], "17");
//! # Ok::<(), spore_xml::Error>(())
//! ```

pub mod compact;
pub mod error;

pub use compact::{
    ATTRIBUTES_KEY, CDATA_KEY, DECLARATION_KEY, TEXT_KEY, strip_declaration, to_compact,
};
pub use error::{Error, Result};
