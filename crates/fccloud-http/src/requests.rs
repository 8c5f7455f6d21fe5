//! Request form composition.
//!
//! The server expects repeating structures flattened the same way it sends
//! them: `attribute{i}_name`, `user{i}_read`, `path{i}` and so on, each list
//! followed by its `_total`. Booleans are sent as `true`/`false`.

use fccloud_core::{
    AdminMetadataSetRecord, AttributeDefinition, AttributeValue, FormParams, GroupAccess,
    UserAccess,
};

/// Set type the server assigns to user-created sets.
pub const CUSTOM_SET_TYPE: i64 = 3;

/// A metadata set definition to create or update.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataSetDefinition {
    /// Empty when creating.
    pub id: String,
    pub name: String,
    pub description: String,
    pub disabled: bool,
    pub allow_all_paths: bool,
    pub set_type: i64,
    pub attributes: Vec<AttributeDefinition>,
    pub users: Vec<UserAccess>,
    pub groups: Vec<GroupAccess>,
    pub paths: Vec<String>,
}

impl MetadataSetDefinition {
    /// A new custom set with no attributes or access entries.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: description.into(),
            disabled: false,
            allow_all_paths: false,
            set_type: CUSTOM_SET_TYPE,
            attributes: Vec::new(),
            users: Vec::new(),
            groups: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// The `add`/`update` request form, in the order the server reads it.
    pub fn to_form(&self) -> FormParams {
        let mut form = FormParams::new();
        push(&mut form, "id", &self.id);
        push(&mut form, "name", &self.name);
        push(&mut form, "description", &self.description);
        push(&mut form, "disabled", flag(self.disabled));
        push(&mut form, "allowallpaths", flag(self.allow_all_paths));
        push(&mut form, "type", self.set_type.to_string());

        for (i, attribute) in self.attributes.iter().enumerate() {
            let key = |field: &str| format!("attribute{i}_{field}");
            push(&mut form, key("attributeid"), &attribute.attribute_id);
            push(&mut form, key("name"), &attribute.name);
            push(&mut form, key("description"), &attribute.description);
            push(&mut form, key("type"), attribute.attribute_type.tag().to_string());
            push(&mut form, key("required"), flag(attribute.required));
            push(&mut form, key("disabled"), flag(attribute.disabled));
            push(&mut form, key("defaultvalue"), attribute.default_value.to_wire());
            if let Some(predefined) = &attribute.predefined {
                for (j, value) in predefined.values.iter().enumerate() {
                    push(&mut form, key(&format!("predefinedvalue{j}")), value);
                }
                push(&mut form, key("predefinedvalues_total"), predefined.values.len().to_string());
            }
        }
        push(&mut form, "attributes_total", self.attributes.len().to_string());

        for (i, user) in self.users.iter().enumerate() {
            push(&mut form, format!("user{i}_name"), &user.name);
            push(&mut form, format!("user{i}_read"), flag(user.read));
            push(&mut form, format!("user{i}_write"), flag(user.write));
        }
        push(&mut form, "users_total", self.users.len().to_string());

        for (i, group) in self.groups.iter().enumerate() {
            push(&mut form, format!("group{i}_id"), &group.id);
            push(&mut form, format!("group{i}_name"), &group.name);
            push(&mut form, format!("group{i}_read"), flag(group.read));
            push(&mut form, format!("group{i}_write"), flag(group.write));
        }
        push(&mut form, "groups_total", self.groups.len().to_string());

        for (i, path) in self.paths.iter().enumerate() {
            push(&mut form, format!("path{i}"), path);
        }
        push(&mut form, "paths_total", self.paths.len().to_string());

        form
    }
}

impl From<&AdminMetadataSetRecord> for MetadataSetDefinition {
    fn from(record: &AdminMetadataSetRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            disabled: record.disabled,
            allow_all_paths: record.allow_all_paths,
            set_type: record.set_type,
            attributes: record.attributes.clone(),
            users: record.users.clone(),
            groups: record.groups.clone(),
            paths: record.paths.clone(),
        }
    }
}

impl From<AdminMetadataSetRecord> for MetadataSetDefinition {
    fn from(record: AdminMetadataSetRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            disabled: record.disabled,
            allow_all_paths: record.allow_all_paths,
            set_type: record.set_type,
            attributes: record.attributes,
            users: record.users,
            groups: record.groups,
            paths: record.paths,
        }
    }
}

/// A new value for one attribute of a file object's metadata set.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeUpdate {
    pub attribute_id: String,
    pub value: AttributeValue,
}

impl AttributeUpdate {
    pub fn new(attribute_id: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            attribute_id: attribute_id.into(),
            value,
        }
    }
}

pub(crate) fn attribute_values_form(
    full_path: &str,
    set_id: &str,
    updates: &[AttributeUpdate],
) -> FormParams {
    let mut form = FormParams::new();
    push(&mut form, "fullpath", full_path);
    push(&mut form, "setid", set_id);
    for (i, update) in updates.iter().enumerate() {
        push(&mut form, format!("attribute{i}_attributeid"), &update.attribute_id);
        push(&mut form, format!("attribute{i}_value"), update.value.to_wire());
    }
    push(&mut form, "attributes_total", updates.len().to_string());
    form
}

/// Build a form from fixed pairs.
pub(crate) fn form<const N: usize>(pairs: [(&str, &str); N]) -> FormParams {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn push(form: &mut FormParams, key: impl Into<String>, value: impl Into<String>) {
    form.push((key.into(), value.into()));
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
