//! Record shapes and shape-directed materialization.

use serde::{Deserialize, Serialize};

use super::{CommandRecord, DataRecord, FlatRecord};
use crate::error::DecodeError;
use crate::metadata::{AdminMetadataSetRecord, MetadataSetRecord, MetadataValueRecord};

/// The closed set of record kinds the decoder can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordShape {
    /// No validation; fields are kept as-is.
    Generic,
    /// A `<command>` result.
    Command,
    MetadataSet,
    AdminMetadataSet,
    MetadataValue,
}

impl RecordShape {
    /// Top-level fields that must be present, in reporting order.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Generic | Self::Command => &[],
            Self::MetadataSet => &["id", "name", "description", "disabled", "read", "write"],
            Self::AdminMetadataSet => &[
                "id",
                "name",
                "description",
                "disabled",
                "type",
                "allowallpaths",
            ],
            Self::MetadataValue => &["id", "name", "description", "settype", "read", "write"],
        }
    }

    /// Build a typed record from one flattened element.
    pub fn build(self, flat: FlatRecord) -> Result<Record, DecodeError> {
        let record = match self {
            Self::Generic => Record::Generic(DataRecord::new(flat)),
            Self::Command => Record::Command(CommandRecord::new(flat)),
            Self::MetadataSet => Record::MetadataSet(MetadataSetRecord::from_flat(flat)?),
            Self::AdminMetadataSet => {
                Record::AdminMetadataSet(AdminMetadataSetRecord::from_flat(flat)?)
            }
            Self::MetadataValue => Record::MetadataValue(MetadataValueRecord::from_flat(flat)?),
        };
        Ok(record)
    }
}

/// A decoded record of any shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Generic(DataRecord),
    Command(CommandRecord),
    MetadataSet(MetadataSetRecord),
    AdminMetadataSet(AdminMetadataSetRecord),
    MetadataValue(MetadataValueRecord),
}

impl Record {
    pub fn shape(&self) -> RecordShape {
        match self {
            Record::Generic(_) => RecordShape::Generic,
            Record::Command(_) => RecordShape::Command,
            Record::MetadataSet(_) => RecordShape::MetadataSet,
            Record::AdminMetadataSet(_) => RecordShape::AdminMetadataSet,
            Record::MetadataValue(_) => RecordShape::MetadataValue,
        }
    }

    /// The untyped fields behind any record.
    pub fn data(&self) -> &DataRecord {
        match self {
            Record::Generic(r) => r,
            Record::Command(r) => r.data(),
            Record::MetadataSet(r) => r.data(),
            Record::AdminMetadataSet(r) => r.data(),
            Record::MetadataValue(r) => r.data(),
        }
    }

    pub fn value_for_key(&self, key: &str) -> Option<&str> {
        self.data().value_for_key(key)
    }

    pub fn as_command(&self) -> Option<&CommandRecord> {
        match self {
            Record::Command(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_command(self) -> Option<CommandRecord> {
        match self {
            Record::Command(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_metadata_set(&self) -> Option<&MetadataSetRecord> {
        match self {
            Record::MetadataSet(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_metadata_set(self) -> Option<MetadataSetRecord> {
        match self {
            Record::MetadataSet(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_admin_metadata_set(&self) -> Option<&AdminMetadataSetRecord> {
        match self {
            Record::AdminMetadataSet(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_admin_metadata_set(self) -> Option<AdminMetadataSetRecord> {
        match self {
            Record::AdminMetadataSet(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_metadata_value(&self) -> Option<&MetadataValueRecord> {
        match self {
            Record::MetadataValue(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_metadata_value(self) -> Option<MetadataValueRecord> {
        match self {
            Record::MetadataValue(r) => Some(r),
            _ => None,
        }
    }
}
