//! fccloud-core - Response decoding and record types for the FileCloud API.
//!
//! The server answers with XML: one root element wrapping record elements
//! whose leaves are scalar fields. [`Collection::parse`] turns such a body
//! into typed [`Record`]s according to a [`RecordShape`]. Metadata records
//! additionally rebuild the indexed attribute, user, group and path lists
//! the server flattens into sibling leaves.
//!
//! Networking is not part of this crate. [`Transport`] describes what an HTTP
//! backend must provide.

pub mod collection;
pub mod error;
pub mod metadata;
pub mod record;
pub mod traits;
pub mod types;

pub use collection::Collection;
pub use error::{CastError, DecodeError, Error, InvalidInputError, TransportError};
pub use metadata::{
    AdminMetadataSetRecord, AssignedAttribute, AttributeDefinition, AttributeType,
    AttributeValue, GroupAccess, MetadataSetRecord, MetadataValueRecord, PredefinedValues,
    UserAccess,
};
pub use record::{CommandRecord, DataRecord, FlatRecord, Record, RecordShape};
pub use traits::{FormParams, HttpResponse, Transport};
pub use types::ServerUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
