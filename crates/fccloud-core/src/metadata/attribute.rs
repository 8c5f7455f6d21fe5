//! Attribute definitions and assigned attribute values.

use serde::{Deserialize, Serialize};

use super::{AttributeType, AttributeValue};

/// Admissible values of an enumeration attribute, with the count the server
/// stated for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedValues {
    pub values: Vec<String>,

    /// `predefinedvalues_total` as sent. Not checked against `values`.
    pub total: u32,
}

/// One attribute declared by a metadata set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub attribute_id: String,
    pub name: String,
    pub description: String,
    pub attribute_type: AttributeType,

    /// `defaultvalue` coerced by `attribute_type`.
    pub default_value: AttributeValue,
    pub required: bool,
    pub disabled: bool,

    /// Present only for enumeration attributes.
    pub predefined: Option<PredefinedValues>,
}

impl AttributeDefinition {
    /// Admissible values, empty unless this is an enumeration.
    pub fn predefined_values(&self) -> &[String] {
        self.predefined
            .as_ref()
            .map(|p| p.values.as_slice())
            .unwrap_or_default()
    }
}

/// One attribute value assigned to a file object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedAttribute {
    pub attribute_id: String,
    pub name: String,
    pub description: String,
    pub disabled: bool,
    pub required: bool,
    pub data_type: AttributeType,

    /// `value` coerced by `data_type`.
    pub value: AttributeValue,

    /// The full enumeration value set. Present only for enumeration values.
    pub enum_values: Option<Vec<String>>,
}
