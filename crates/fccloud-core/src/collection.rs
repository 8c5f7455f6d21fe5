//! XML response decoding.

use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::record::{DataRecord, FlatRecord, Record, RecordShape};

/// The records found in one response body.
///
/// Only direct children of the root element are considered. Children named
/// like the record element become records, in document order; a child named
/// like the meta element becomes the meta record. Everything else is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    record_name: String,
    records: Vec<Record>,
    meta: Option<DataRecord>,
}

impl Collection {
    /// Decode `xml`, building every `record_name` element as `shape`.
    ///
    /// A body with no matching elements is an empty collection, not an error.
    /// Malformed XML, including an empty body, is an error, and so is any
    /// matching element that fails to build.
    pub fn parse(
        xml: &str,
        record_name: &str,
        shape: RecordShape,
        meta_name: Option<&str>,
    ) -> Result<Self, DecodeError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options).map_err(|e| {
            DecodeError::MalformedXml {
                message: e.to_string(),
            }
        })?;

        let mut records = Vec::new();
        let mut meta = None;

        for child in doc.root_element().children().filter(Node::is_element) {
            let tag = child.tag_name().name();
            if tag == record_name {
                records.push(shape.build(flatten(child))?);
            } else if meta_name == Some(tag) {
                meta = Some(DataRecord::new(flatten(child)));
            } else {
                trace!(tag, "ignoring element");
            }
        }

        debug!(
            record_name,
            records = records.len(),
            meta = meta.is_some(),
            "decoded collection"
        );

        Ok(Self {
            record_name: record_name.to_string(),
            records,
            meta,
        })
    }

    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    pub fn number_of_records(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn meta_record(&self) -> Option<&DataRecord> {
        self.meta.as_ref()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Split into records and the meta record.
    pub fn into_parts(self) -> (Vec<Record>, Option<DataRecord>) {
        (self.records, self.meta)
    }
}

/// Flatten an element's direct element children to `name -> text`.
///
/// The text of a leaf is the concatenation of its own text nodes; nested
/// elements below a leaf are not descended into.
fn flatten(node: Node<'_, '_>) -> FlatRecord {
    let mut flat = FlatRecord::new();
    for leaf in node.children().filter(Node::is_element) {
        let text: String = leaf
            .children()
            .filter(Node::is_text)
            .filter_map(|n| n.text())
            .collect();
        flat.insert(leaf.tag_name().name(), text);
    }
    flat
}
