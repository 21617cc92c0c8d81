//! Configuration loading and its effect on mapping.

mod common;

use common::{Deep, Tagged};
use json_mapper::{KeyPathError, MapError, Mapper, MapperConfig};
use serde_json::json;

#[test]
fn config_loads_from_toml_with_defaults() {
    let config: MapperConfig = toml::from_str(
        r#"
            key_delimiter = "::"
            include_nulls = true
        "#,
    )
    .unwrap();
    assert_eq!(config.key_delimiter, "::");
    assert!(config.nested_keys);
    assert!(config.include_nulls);

    let empty: MapperConfig = toml::from_str("").unwrap();
    assert_eq!(empty, MapperConfig::default());
}

#[test]
fn config_serializes_to_json() {
    let value = serde_json::to_value(MapperConfig::new().with_nested_keys(false)).unwrap();
    assert_eq!(
        value,
        json!({"key_delimiter": ".", "nested_keys": false, "include_nulls": false})
    );
}

#[test]
fn loaded_config_drives_the_mapper() {
    let config: MapperConfig = toml::from_str(r#"key_delimiter = "::""#).unwrap();
    let mapper = Mapper::with_config(config).unwrap();
    assert_eq!(mapper.config().key_delimiter, "::");

    // "a.b.c" has no "::" and stays one literal key.
    let encoded = mapper.to_json(&Deep { value: 9 });
    assert_eq!(encoded, json!({"a.b.c": 9}));
}

#[test]
fn empty_delimiter_needs_flat_keys() {
    let config: MapperConfig = toml::from_str(r#"key_delimiter = """#).unwrap();
    assert!(matches!(
        Mapper::with_config(config.clone()),
        Err(MapError::KeyPath(KeyPathError::EmptyDelimiter))
    ));

    let flat = Mapper::with_config(config.with_nested_keys(false)).unwrap();
    let tagged: Tagged = flat.map(&json!({"id": 3})).unwrap();
    assert_eq!(tagged.id, 3);
}

#[test]
fn error_messages_name_the_problem() {
    let err = Mapper::with_config(MapperConfig::new().with_key_delimiter("")).unwrap_err();
    assert!(err.to_string().contains("delimiter"));

    let err = Mapper::new().try_map::<Tagged>("[1, 2]").unwrap_err();
    assert_eq!(err.to_string(), "expected a JSON object, found array");
}
