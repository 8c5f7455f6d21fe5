//! Decoder tests against recorded server responses.
//!
//! Fixtures under `tests/fixtures/` are response bodies in the shape the
//! server sends them.

use chrono::NaiveDate;
use fccloud_core::{
    AttributeType, AttributeValue, Collection, DecodeError, FlatRecord, RecordShape,
};

const AVAILABLE_SETS: &str = include_str!("fixtures/available_metadata_sets.xml");
const ADMIN_SETS: &str = include_str!("fixtures/admin_metadata_sets.xml");
const VALUES: &str = include_str!("fixtures/metadata_values.xml");

// ============================================================================
// Collection
// ============================================================================

#[test]
fn test_meta_total_and_record_count() {
    let sets = Collection::parse(
        AVAILABLE_SETS,
        "metadataset",
        RecordShape::MetadataSet,
        Some("meta"),
    )
    .unwrap();

    assert_eq!(sets.number_of_records(), 4);
    let meta = sets.meta_record().expect("meta record");
    assert_eq!(meta.value_for_key("total"), Some("4"));
}

#[test]
fn test_records_keep_document_order() {
    let sets = Collection::parse(AVAILABLE_SETS, "metadataset", RecordShape::MetadataSet, None)
        .unwrap();
    let names: Vec<_> = sets
        .records()
        .iter()
        .map(|r| r.as_metadata_set().unwrap().name.as_str())
        .collect();
    assert_eq!(names, vec!["Readable", "Default", "Image", "Document"]);
}

#[test]
fn test_unclosed_tag_is_a_parse_error() {
    let xml = "<metadatasets><metadataset><id>1</id></metadatasets>";
    let err = Collection::parse(xml, "metadataset", RecordShape::MetadataSet, Some("meta"))
        .unwrap_err();
    assert!(matches!(err, DecodeError::MalformedXml { .. }));
}

#[test]
fn test_no_matching_elements_is_empty_not_error() {
    let xml = "<metadatasets><meta><total>0</total></meta></metadatasets>";
    let sets = Collection::parse(xml, "metadataset", RecordShape::MetadataSet, Some("meta"))
        .unwrap();
    assert_eq!(sets.number_of_records(), 0);
    assert!(sets.meta_record().is_some());
}

#[test]
fn test_record_error_propagates() {
    let xml = "<metadatasets><metadataset><id>1</id><name>x</name></metadataset></metadatasets>";
    let err = Collection::parse(xml, "metadataset", RecordShape::MetadataSet, None).unwrap_err();
    assert_eq!(
        err.missing_fields().unwrap(),
        ["description", "disabled", "read", "write"]
    );
}

// ============================================================================
// Metadata sets
// ============================================================================

#[test]
fn test_seven_attribute_set() {
    let sets = Collection::parse(AVAILABLE_SETS, "metadataset", RecordShape::MetadataSet, None)
        .unwrap();
    let set = sets.records()[0].as_metadata_set().unwrap();

    assert_eq!(set.id, "5cb73b04adccf621f8014968");
    assert_eq!(set.description, "Readable files metadataset");
    assert!(!set.disabled);
    assert!(set.read && set.write);
    assert_eq!(set.attributes.len(), 7);
    assert_eq!(set.attributes_total as usize, set.attributes.len());

    let tags: Vec<_> = set.attributes.iter().map(|a| a.attribute_type.tag()).collect();
    assert_eq!(tags, vec![1, 2, 3, 4, 5, 6, 7]);

    let a = &set.attributes;
    assert_eq!(a[0].default_value, AttributeValue::Text("Unsummarized".into()));
    assert!(a[0].required);
    assert_eq!(a[1].default_value, AttributeValue::Integer(Some(1192)));
    assert_eq!(a[2].default_value, AttributeValue::Decimal(Some(5.5)));
    assert_eq!(a[3].default_value, AttributeValue::Boolean(false));
    assert!(!a[3].required);
    let published = NaiveDate::from_ymd_opt(1987, 7, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(a[4].default_value, AttributeValue::Date(Some(published)));
    assert_eq!(a[5].default_value, AttributeValue::Enumeration("PDF".into()));
    assert_eq!(
        a[6].default_value,
        AttributeValue::Array(vec!["Self-help".into(), "Philosophy".into()])
    );

    let predefined = a[5].predefined.as_ref().unwrap();
    assert_eq!(predefined.values, ["PDF", "Kindle", "Text", "Markdown"]);
    assert_eq!(predefined.total, 4);
    assert!(a[0].predefined.is_none());
    assert!(a[6].predefined_values().is_empty());
}

#[test]
fn test_default_values_round_trip() {
    let sets = Collection::parse(AVAILABLE_SETS, "metadataset", RecordShape::MetadataSet, None)
        .unwrap();
    let set = sets.records()[0].as_metadata_set().unwrap();
    for (index, attribute) in set.attributes.iter().enumerate() {
        let raw = set
            .data()
            .value_for_key(&format!("attribute{index}_defaultvalue"))
            .unwrap();
        assert_eq!(attribute.default_value.to_wire(), raw, "{}", attribute.name);
    }
}

#[test]
fn test_missing_attribute_field_is_named() {
    let mut flat = full_definition_record();
    flat = flat
        .iter()
        .filter(|(key, _)| *key != "attribute0_disabled")
        .collect();

    let err = RecordShape::MetadataSet.build(flat).unwrap_err();
    match err {
        DecodeError::MissingBlockFields { block, fields } => {
            assert_eq!(block, "attribute");
            assert_eq!(fields, vec!["attribute0_disabled"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_sparse_indices_are_legal() {
    let mut flat = full_definition_record();
    for (key, value) in definition("12", "Notes", "1", "") {
        flat.insert(key, value);
    }
    let set = RecordShape::MetadataSet
        .build(flat)
        .unwrap()
        .into_metadata_set()
        .unwrap();
    let names: Vec<_> = set.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Pages", "Notes"]);
}

#[test]
fn test_stated_total_is_not_enforced() {
    let mut flat = full_definition_record();
    flat.insert("attributes_total", "5");
    let set = RecordShape::MetadataSet
        .build(flat)
        .unwrap()
        .into_metadata_set()
        .unwrap();
    assert_eq!(set.attributes.len(), 1);
    assert_eq!(set.attributes_total, 5);
}

#[test]
fn test_malformed_attribute_key() {
    let mut flat = full_definition_record();
    flat.insert("attributeA_name", "oops");
    let err = RecordShape::MetadataSet.build(flat).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedKey { ref key } if key == "attributeA_name"));
}

#[test]
fn test_bad_integer_default_reports_key() {
    let mut flat = full_definition_record();
    flat.insert("attribute0_defaultvalue", "many");
    let err = RecordShape::MetadataSet.build(flat).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidValue { ref key, .. } if key == "attribute0_defaultvalue"
    ));
}

// ============================================================================
// Admin metadata sets
// ============================================================================

#[test]
fn test_admin_sub_lists() {
    let sets = Collection::parse(
        ADMIN_SETS,
        "metadataset",
        RecordShape::AdminMetadataSet,
        Some("meta"),
    )
    .unwrap();
    assert_eq!(sets.number_of_records(), 2);

    let set = sets.records()[1].as_admin_metadata_set().unwrap();
    assert_eq!(set.set_type, 3);
    assert!(!set.allow_all_paths);
    assert_eq!((set.users_total, set.groups_total, set.paths_total), (1, 1, 1));
    assert_eq!(set.users.len(), 1);
    assert_eq!(set.groups.len(), 1);
    assert_eq!(set.paths.len(), 1);

    assert_eq!(set.users[0].name, "jdoe");
    assert!(set.users[0].read);
    assert!(!set.users[0].write);
    assert_eq!(set.groups[0].id, "55557777bbbbccccddddaaaa");
    assert_eq!(set.groups[0].name, "EVERYONE");
    assert!(set.groups[0].read && set.groups[0].write);
    assert_eq!(set.paths[0], "/jdoe/contracts");

    let stage = set.attribute("5cc09402adccf621f8021957").unwrap();
    assert_eq!(stage.attribute_type, AttributeType::Enumeration);
    assert!(stage.disabled);
    assert_eq!(stage.predefined_values(), ["Draft", "Signed", "Expired"]);
    assert_eq!(set.attributes[1].default_value, AttributeValue::Decimal(None));
}

#[test]
fn test_admin_without_access_entries() {
    let sets = Collection::parse(ADMIN_SETS, "metadataset", RecordShape::AdminMetadataSet, None)
        .unwrap();
    let set = sets.records()[0].as_admin_metadata_set().unwrap();
    assert!(set.allow_all_paths);
    assert!(set.users.is_empty() && set.groups.is_empty() && set.paths.is_empty());
    assert_eq!(set.attributes[0].default_value, AttributeValue::Array(vec![]));
}

#[test]
fn test_admin_shape_requires_type() {
    let xml = "<r><metadataset><id>1</id><name>n</name><description></description>\
               <disabled></disabled><allowallpaths>1</allowallpaths></metadataset></r>";
    let err = Collection::parse(xml, "metadataset", RecordShape::AdminMetadataSet, None)
        .unwrap_err();
    assert_eq!(err.missing_fields().unwrap(), ["type"]);
}

// ============================================================================
// Metadata values
// ============================================================================

#[test]
fn test_metadata_values() {
    let values = Collection::parse(
        VALUES,
        "metadatasetvalue",
        RecordShape::MetadataValue,
        Some("meta"),
    )
    .unwrap();
    assert_eq!(values.number_of_records(), 2);

    let default = values.records()[0].as_metadata_value().unwrap();
    assert_eq!(default.set_type, 2);
    assert_eq!(default.attributes[0].value, AttributeValue::Array(vec![]));

    let film = values.records()[1].as_metadata_value().unwrap();
    assert!(film.read);
    assert!(!film.write);
    assert_eq!(film.attributes.len(), 7);

    let by_name = |name: &str| {
        film.attributes
            .iter()
            .find(|a| a.name == name)
            .unwrap()
            .value
            .clone()
    };
    assert_eq!(by_name("Title"), AttributeValue::Text("Untitled".into()));
    assert_eq!(by_name("Duration").as_i64(), Some(120));
    assert_eq!(by_name("Rating").as_f64(), Some(7.5));
    assert_eq!(by_name("Restricted").as_bool(), Some(true));
    assert_eq!(by_name("Release date").to_wire(), "1985-07-10 00:00:00");
    assert_eq!(by_name("Languages").as_list().unwrap(), ["en", "fr"]);

    let color = film.attribute("5cb7387fadccf621f801490c").unwrap();
    assert_eq!(color.data_type, AttributeType::Enumeration);
    assert_eq!(
        color.enum_values.as_deref().unwrap(),
        ["Red", "Green", "Blue"]
    );
    assert!(film.attributes[0].enum_values.is_none());
}

// ============================================================================
// Helpers
// ============================================================================

fn definition(index: &str, name: &str, ty: &str, default: &str) -> Vec<(String, String)> {
    [
        ("attributeid", format!("attr-{index}")),
        ("name", name.to_string()),
        ("description", String::new()),
        ("type", ty.to_string()),
        ("defaultvalue", default.to_string()),
        ("required", String::new()),
        ("disabled", String::new()),
    ]
    .into_iter()
    .map(|(field, value)| (format!("attribute{index}_{field}"), value))
    .collect()
}

fn full_definition_record() -> FlatRecord {
    let mut flat = FlatRecord::from_iter([
        ("id", "set-1"),
        ("name", "Book"),
        ("description", ""),
        ("disabled", ""),
        ("read", "1"),
        ("write", "1"),
        ("attributes_total", "1"),
    ]);
    for (key, value) in definition("0", "Pages", "2", "300") {
        flat.insert(key, value);
    }
    flat
}
