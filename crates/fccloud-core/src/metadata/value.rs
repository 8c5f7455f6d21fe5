//! Metadata values bound to a file object.

use serde::{Deserialize, Serialize};

use super::{AssignedAttribute, block};
use crate::error::DecodeError;
use crate::record::{DataRecord, FlatRecord, RecordShape};

/// The values one metadata set carries for one file object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataValueRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub set_type: i64,
    pub read: bool,
    pub write: bool,
    pub attributes: Vec<AssignedAttribute>,
    pub attributes_total: u32,

    #[serde(skip)]
    data: DataRecord,
}

impl MetadataValueRecord {
    pub fn from_flat(flat: FlatRecord) -> Result<Self, DecodeError> {
        flat.require(RecordShape::MetadataValue.required_fields())?;
        let attributes = block::decode_values(&flat)?;

        Ok(Self {
            id: flat.field("id")?.to_string(),
            name: flat.field("name")?.to_string(),
            description: flat.field("description")?.to_string(),
            set_type: flat.integer("settype")?,
            read: flat.flag("read")?,
            write: flat.flag("write")?,
            attributes,
            attributes_total: flat.count("attributes_total")?,
            data: DataRecord::new(flat),
        })
    }

    pub fn attribute(&self, attribute_id: &str) -> Option<&AssignedAttribute> {
        self.attributes
            .iter()
            .find(|a| a.attribute_id == attribute_id)
    }

    pub fn data(&self) -> &DataRecord {
        &self.data
    }
}
