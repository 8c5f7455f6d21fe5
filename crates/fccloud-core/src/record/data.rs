//! Untyped records.

use serde::{Deserialize, Serialize};

use super::FlatRecord;

/// A record with no shape beyond its flattened fields.
///
/// Every typed record keeps one of these so that fields without a typed
/// accessor remain reachable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRecord {
    fields: FlatRecord,
}

impl DataRecord {
    pub fn new(fields: FlatRecord) -> Self {
        Self { fields }
    }

    /// Untyped access to a field. `None` means the element was absent, which
    /// is distinct from an element with empty text.
    pub fn value_for_key(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }

    /// The underlying flattened fields.
    pub fn fields(&self) -> &FlatRecord {
        &self.fields
    }

    pub fn into_fields(self) -> FlatRecord {
        self.fields
    }
}

impl From<FlatRecord> for DataRecord {
    fn from(fields: FlatRecord) -> Self {
        Self::new(fields)
    }
}
