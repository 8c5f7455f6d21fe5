//! Flattened element children.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CastError, DecodeError};

/// One XML element's immediate children, flattened to `name -> text`.
///
/// Keys are unique; a repeated child name keeps the last value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatRecord(BTreeMap<String, String>);

impl FlatRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if the field is present (even if empty).
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the subset of `expected` that is absent, in the given order.
    pub fn missing<'a, I, S>(&self, expected: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        expected
            .into_iter()
            .map(|key| -> &str { key.as_ref() })
            .filter(|key| !self.contains_key(key))
            .map(str::to_string)
            .collect()
    }

    /// Fail with every absent field if any of `expected` is missing.
    pub fn require<'a, I, S>(&self, expected: I) -> Result<(), DecodeError>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        let fields = self.missing(expected);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::MissingFields { fields })
        }
    }

    /// Get a field that must be present.
    pub fn field(&self, key: &str) -> Result<&str, DecodeError> {
        self.get(key).ok_or_else(|| DecodeError::MissingFields {
            fields: vec![key.to_string()],
        })
    }

    /// Read a present field as a flag.
    pub fn flag(&self, key: &str) -> Result<bool, DecodeError> {
        self.field(key).map(truthy)
    }

    /// Read a present field as a signed integer.
    pub fn integer(&self, key: &str) -> Result<i64, DecodeError> {
        let raw = self.field(key)?;
        raw.parse::<i64>().map_err(|e| DecodeError::InvalidValue {
            key: key.to_string(),
            source: CastError::from(e),
        })
    }

    /// Read a stated count. An absent count reads as zero.
    pub fn count(&self, key: &str) -> Result<u32, DecodeError> {
        match self.get(key) {
            None => Ok(0),
            Some(raw) => raw.parse::<u32>().map_err(|e| DecodeError::InvalidValue {
                key: key.to_string(),
                source: CastError::from(e),
            }),
        }
    }
}

/// String truthiness used by every flag field: `""` and `"0"` are false.
pub fn truthy(raw: &str) -> bool {
    !(raw.is_empty() || raw == "0")
}

impl<K, V> FromIterator<(K, V)> for FlatRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for FlatRecord {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<FlatRecord> for BTreeMap<String, String> {
    fn from(record: FlatRecord) -> Self {
        record.0
    }
}
