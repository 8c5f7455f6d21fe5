//! Metadata set records.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{AttributeDefinition, GroupAccess, UserAccess, block};
use crate::error::DecodeError;
use crate::record::{DataRecord, FlatRecord, RecordShape};

/// A metadata set as seen by a user: its definition plus the caller's
/// access rights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataSetRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub disabled: bool,
    pub read: bool,
    pub write: bool,
    pub attributes: Vec<AttributeDefinition>,

    /// `attributes_total` as sent. Not checked against `attributes`.
    pub attributes_total: u32,

    #[serde(skip)]
    data: DataRecord,
}

impl MetadataSetRecord {
    pub fn from_flat(flat: FlatRecord) -> Result<Self, DecodeError> {
        flat.require(RecordShape::MetadataSet.required_fields())?;
        let attributes = block::decode_definitions(&flat)?;
        trace!(id = ?flat.get("id"), attributes = attributes.len(), "decoded metadata set");

        Ok(Self {
            id: flat.field("id")?.to_string(),
            name: flat.field("name")?.to_string(),
            description: flat.field("description")?.to_string(),
            disabled: flat.flag("disabled")?,
            read: flat.flag("read")?,
            write: flat.flag("write")?,
            attributes,
            attributes_total: flat.count("attributes_total")?,
            data: DataRecord::new(flat),
        })
    }

    pub fn attribute(&self, attribute_id: &str) -> Option<&AttributeDefinition> {
        self.attributes
            .iter()
            .find(|a| a.attribute_id == attribute_id)
    }

    pub fn data(&self) -> &DataRecord {
        &self.data
    }
}

/// A metadata set as administered: its definition plus who it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminMetadataSetRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub disabled: bool,

    /// Set type tag. Built-in sets use values below 3; custom sets use 3.
    pub set_type: i64,
    pub allow_all_paths: bool,
    pub attributes: Vec<AttributeDefinition>,
    pub attributes_total: u32,
    pub users: Vec<UserAccess>,
    pub users_total: u32,
    pub groups: Vec<GroupAccess>,
    pub groups_total: u32,
    pub paths: Vec<String>,
    pub paths_total: u32,

    #[serde(skip)]
    data: DataRecord,
}

impl AdminMetadataSetRecord {
    pub fn from_flat(flat: FlatRecord) -> Result<Self, DecodeError> {
        flat.require(RecordShape::AdminMetadataSet.required_fields())?;

        let attributes = block::decode_definitions(&flat)?;
        let users = block::decode_users(&flat)?;
        let groups = block::decode_groups(&flat)?;
        let paths = block::decode_paths(&flat)?;
        trace!(
            id = ?flat.get("id"),
            attributes = attributes.len(),
            users = users.len(),
            groups = groups.len(),
            paths = paths.len(),
            "decoded admin metadata set"
        );

        Ok(Self {
            id: flat.field("id")?.to_string(),
            name: flat.field("name")?.to_string(),
            description: flat.field("description")?.to_string(),
            disabled: flat.flag("disabled")?,
            set_type: flat.integer("type")?,
            allow_all_paths: flat.flag("allowallpaths")?,
            attributes,
            attributes_total: flat.count("attributes_total")?,
            users,
            users_total: flat.count("users_total")?,
            groups,
            groups_total: flat.count("groups_total")?,
            paths,
            paths_total: flat.count("paths_total")?,
            data: DataRecord::new(flat),
        })
    }

    pub fn attribute(&self, attribute_id: &str) -> Option<&AttributeDefinition> {
        self.attributes
            .iter()
            .find(|a| a.attribute_id == attribute_id)
    }

    pub fn data(&self) -> &DataRecord {
        &self.data
    }
}
