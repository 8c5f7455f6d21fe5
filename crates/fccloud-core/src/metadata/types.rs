//! Attribute type tags and typed attribute values.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::CastError;

/// Wire format for date values, in both directions.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The type tag carried by every attribute definition and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum AttributeType {
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    Enumeration,
    Array,
    /// A tag this client does not know. Values pass through as text.
    Unknown(i64),
}

impl AttributeType {
    pub fn from_tag(tag: i64) -> Self {
        match tag {
            1 => Self::Text,
            2 => Self::Integer,
            3 => Self::Decimal,
            4 => Self::Boolean,
            5 => Self::Date,
            6 => Self::Enumeration,
            7 => Self::Array,
            other => Self::Unknown(other),
        }
    }

    pub fn tag(self) -> i64 {
        match self {
            Self::Text => 1,
            Self::Integer => 2,
            Self::Decimal => 3,
            Self::Boolean => 4,
            Self::Date => 5,
            Self::Enumeration => 6,
            Self::Array => 7,
            Self::Unknown(other) => other,
        }
    }
}

impl From<i64> for AttributeType {
    fn from(tag: i64) -> Self {
        Self::from_tag(tag)
    }
}

impl From<AttributeType> for i64 {
    fn from(ty: AttributeType) -> Self {
        ty.tag()
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// An attribute's default value or assigned value, coerced by its type tag.
///
/// Integer, decimal and date values are optional: the server sends an empty
/// string when nothing is set. Arrays are never absent, only empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AttributeValue {
    Text(String),
    Integer(Option<i64>),
    Decimal(Option<f64>),
    Boolean(bool),
    Date(Option<NaiveDateTime>),
    Enumeration(String),
    Array(Vec<String>),
}

impl AttributeValue {
    /// Coerce a raw wire string according to `ty`.
    ///
    /// Numeric and boolean parse failures surface the native parse error.
    /// `NaN` and infinities are rejected since they have no wire form.
    /// Dates that do not match [`DATE_FORMAT`] become `Date(None)`.
    pub fn cast(raw: &str, ty: AttributeType) -> Result<Self, CastError> {
        let value = match ty {
            AttributeType::Integer if raw.is_empty() => Self::Integer(None),
            AttributeType::Integer => Self::Integer(Some(raw.parse()?)),
            AttributeType::Decimal if raw.is_empty() => Self::Decimal(None),
            AttributeType::Decimal => {
                let d: f64 = raw.parse()?;
                if !d.is_finite() {
                    return Err(CastError::NonFiniteDecimal(raw.to_string()));
                }
                Self::Decimal(Some(d))
            }
            AttributeType::Boolean if raw.is_empty() => Self::Boolean(false),
            AttributeType::Boolean => {
                let json: serde_json::Value = serde_json::from_str(raw)?;
                Self::Boolean(json_truthy(&json))
            }
            AttributeType::Date => {
                Self::Date(NaiveDateTime::parse_from_str(raw, DATE_FORMAT).ok())
            }
            AttributeType::Array => Self::Array(split_list(raw)),
            AttributeType::Enumeration => Self::Enumeration(raw.to_string()),
            AttributeType::Text | AttributeType::Unknown(_) => Self::Text(raw.to_string()),
        };
        Ok(value)
    }

    /// Encode back to the wire string the server accepts.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Text(s) | Self::Enumeration(s) => s.clone(),
            Self::Integer(n) => n.map(|n| serde_json::json!(n).to_string()).unwrap_or_default(),
            Self::Decimal(d) => d.map(|d| serde_json::json!(d).to_string()).unwrap_or_default(),
            Self::Boolean(b) => serde_json::json!(b).to_string(),
            Self::Date(d) => d
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            Self::Array(items) => items.join(","),
        }
    }

    /// The type tag this value encodes as.
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            Self::Text(_) => AttributeType::Text,
            Self::Integer(_) => AttributeType::Integer,
            Self::Decimal(_) => AttributeType::Decimal,
            Self::Boolean(_) => AttributeType::Boolean,
            Self::Date(_) => AttributeType::Date,
            Self::Enumeration(_) => AttributeType::Enumeration,
            Self::Array(_) => AttributeType::Array,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Enumeration(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => *n,
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Decimal(d) => *d,
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => *d,
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Comma-separated list. The empty string is the empty list.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(str::to_string).collect()
    }
}

fn json_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}
