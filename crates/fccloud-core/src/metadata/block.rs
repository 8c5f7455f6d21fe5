//! Indexed block decoding.
//!
//! Repeating structures arrive flattened into sibling leaves named
//! `{prefix}{index}_{field}` (or bare `{prefix}{index}` for paths). These
//! functions rebuild them as ordered lists, sorted by numeric index.

use std::collections::BTreeSet;

use tracing::trace;

use super::{
    AssignedAttribute, AttributeDefinition, AttributeType, AttributeValue, GroupAccess,
    PredefinedValues, UserAccess, types::split_list,
};
use crate::error::DecodeError;
use crate::record::FlatRecord;

pub(crate) const ATTRIBUTE_PREFIX: &str = "attribute";
const ATTRIBUTES_TOTAL: &str = "attributes_total";

const DEFINITION_FIELDS: &[&str] = &[
    "attributeid",
    "name",
    "description",
    "type",
    "defaultvalue",
    "required",
    "disabled",
];

const VALUE_FIELDS: &[&str] = &[
    "attributeid",
    "name",
    "description",
    "disabled",
    "required",
    "datatype",
    "value",
];

/// Indices of every `attribute{N}_*` key.
///
/// Any key carrying the prefix must have a numeric index followed by `_`;
/// anything else is a malformed key rather than an unrelated field.
pub(crate) fn attribute_indices(flat: &FlatRecord) -> Result<BTreeSet<u32>, DecodeError> {
    let mut indices = BTreeSet::new();
    for key in flat.keys() {
        if key == ATTRIBUTES_TOTAL {
            continue;
        }
        let Some(rest) = key.strip_prefix(ATTRIBUTE_PREFIX) else {
            continue;
        };
        let index = rest
            .split_once('_')
            .and_then(|(index, _)| parse_index(index))
            .ok_or_else(|| DecodeError::MalformedKey {
                key: key.to_string(),
            })?;
        indices.insert(index);
    }
    Ok(indices)
}

/// Indices of a named sub-list (`user`, `group`, `path`).
///
/// Keys whose remainder is not a plain number, such as `users_total`, are
/// skipped. An all-digit index too large for `u32` is a malformed key.
pub(crate) fn sub_list_indices(
    flat: &FlatRecord,
    prefix: &str,
) -> Result<BTreeSet<u32>, DecodeError> {
    let mut indices = BTreeSet::new();
    for key in flat.keys() {
        let Some(rest) = key.strip_prefix(prefix) else {
            continue;
        };
        let index = rest.split_once('_').map_or(rest, |(index, _)| index);
        if !is_digits(index) {
            trace!(key, prefix, "skipping non-indexed key");
            continue;
        }
        let index = parse_index(index).ok_or_else(|| DecodeError::MalformedKey {
            key: key.to_string(),
        })?;
        indices.insert(index);
    }
    Ok(indices)
}

fn is_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

fn parse_index(raw: &str) -> Option<u32> {
    if !is_digits(raw) {
        return None;
    }
    raw.parse().ok()
}

/// Fail listing every absent `{prefix}{index}_{field}` key.
fn require_block(
    flat: &FlatRecord,
    block: &'static str,
    keys: &[String],
) -> Result<(), DecodeError> {
    let fields = flat.missing(keys);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(DecodeError::MissingBlockFields { block, fields })
    }
}

fn block_keys(prefix: &str, index: u32, fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .map(|field| format!("{prefix}{index}_{field}"))
        .collect()
}

fn cast_field(
    flat: &FlatRecord,
    key: &str,
    ty: AttributeType,
) -> Result<AttributeValue, DecodeError> {
    let raw = flat.field(key)?;
    AttributeValue::cast(raw, ty).map_err(|source| DecodeError::InvalidValue {
        key: key.to_string(),
        source,
    })
}

/// Decode the attribute definitions of a metadata set.
pub(crate) fn decode_definitions(
    flat: &FlatRecord,
) -> Result<Vec<AttributeDefinition>, DecodeError> {
    attribute_indices(flat)?
        .into_iter()
        .map(|n| decode_definition(flat, n))
        .collect()
}

fn decode_definition(flat: &FlatRecord, n: u32) -> Result<AttributeDefinition, DecodeError> {
    require_block(flat, ATTRIBUTE_PREFIX, &block_keys(ATTRIBUTE_PREFIX, n, DEFINITION_FIELDS))?;

    let key = |field: &str| format!("{ATTRIBUTE_PREFIX}{n}_{field}");
    let attribute_type = AttributeType::from_tag(flat.integer(&key("type"))?);

    let predefined = if attribute_type == AttributeType::Enumeration {
        let values = (0..)
            .map_while(|j| flat.get(&key(&format!("predefinedvalue{j}"))))
            .map(str::to_string)
            .collect();
        let total = flat.count(&key("predefinedvalues_total"))?;
        Some(PredefinedValues { values, total })
    } else {
        None
    };

    Ok(AttributeDefinition {
        attribute_id: flat.field(&key("attributeid"))?.to_string(),
        name: flat.field(&key("name"))?.to_string(),
        description: flat.field(&key("description"))?.to_string(),
        default_value: cast_field(flat, &key("defaultvalue"), attribute_type)?,
        attribute_type,
        required: flat.flag(&key("required"))?,
        disabled: flat.flag(&key("disabled"))?,
        predefined,
    })
}

/// Decode the attribute values assigned to a file object.
pub(crate) fn decode_values(flat: &FlatRecord) -> Result<Vec<AssignedAttribute>, DecodeError> {
    attribute_indices(flat)?
        .into_iter()
        .map(|n| decode_value(flat, n))
        .collect()
}

fn decode_value(flat: &FlatRecord, n: u32) -> Result<AssignedAttribute, DecodeError> {
    require_block(flat, ATTRIBUTE_PREFIX, &block_keys(ATTRIBUTE_PREFIX, n, VALUE_FIELDS))?;

    let key = |field: &str| format!("{ATTRIBUTE_PREFIX}{n}_{field}");
    let data_type = AttributeType::from_tag(flat.integer(&key("datatype"))?);

    let enum_values = (data_type == AttributeType::Enumeration)
        .then(|| split_list(flat.get(&key("enumvalues")).unwrap_or_default()));

    Ok(AssignedAttribute {
        attribute_id: flat.field(&key("attributeid"))?.to_string(),
        name: flat.field(&key("name"))?.to_string(),
        description: flat.field(&key("description"))?.to_string(),
        disabled: flat.flag(&key("disabled"))?,
        required: flat.flag(&key("required"))?,
        value: cast_field(flat, &key("value"), data_type)?,
        data_type,
        enum_values,
    })
}

pub(crate) fn decode_users(flat: &FlatRecord) -> Result<Vec<UserAccess>, DecodeError> {
    sub_list_indices(flat, "user")?
        .into_iter()
        .map(|i| {
            require_block(flat, "user", &block_keys("user", i, &["name", "read", "write"]))?;
            Ok(UserAccess {
                name: flat.field(&format!("user{i}_name"))?.to_string(),
                read: flat.flag(&format!("user{i}_read"))?,
                write: flat.flag(&format!("user{i}_write"))?,
            })
        })
        .collect()
}

pub(crate) fn decode_groups(flat: &FlatRecord) -> Result<Vec<GroupAccess>, DecodeError> {
    sub_list_indices(flat, "group")?
        .into_iter()
        .map(|i| {
            require_block(
                flat,
                "group",
                &block_keys("group", i, &["id", "name", "read", "write"]),
            )?;
            Ok(GroupAccess {
                id: flat.field(&format!("group{i}_id"))?.to_string(),
                name: flat.field(&format!("group{i}_name"))?.to_string(),
                read: flat.flag(&format!("group{i}_read"))?,
                write: flat.flag(&format!("group{i}_write"))?,
            })
        })
        .collect()
}

/// Paths carry no suffix field: `path{N}` holds the path itself.
pub(crate) fn decode_paths(flat: &FlatRecord) -> Result<Vec<String>, DecodeError> {
    sub_list_indices(flat, "path")?
        .into_iter()
        .map(|i| {
            let key = format!("path{i}");
            require_block(flat, "path", std::slice::from_ref(&key))?;
            Ok(flat.field(&key)?.to_string())
        })
        .collect()
}
