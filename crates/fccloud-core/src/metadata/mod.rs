//! Metadata sets, attribute definitions and attribute values.
//!
//! The server flattens every repeating structure of a metadata record into
//! sibling leaves (`attribute3_name`, `user0_read`, `path1`, ...). The records
//! here rebuild those structures and coerce each attribute value by its type
//! tag.

mod access;
mod attribute;
pub(crate) mod block;
mod set;
mod types;
mod value;

pub use access::{GroupAccess, UserAccess};
pub use attribute::{AssignedAttribute, AttributeDefinition, PredefinedValues};
pub use set::{AdminMetadataSetRecord, MetadataSetRecord};
pub use types::{AttributeType, AttributeValue, DATE_FORMAT};
pub use value::MetadataValueRecord;
