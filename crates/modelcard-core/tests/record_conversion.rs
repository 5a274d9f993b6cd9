//! Integration tests for turning record documents into model descriptions.

use std::io::Write;

use modelcard_core::{ModelDescription, ModelError, parse_records, read_records};

#[test]
fn test_demo_record_converts() {
    let records = parse_records(
        r#"{"name": "models/demo-1", "display_name": "Demo Model",
            "description": "A test model.",
            "input_token_limit": 8192, "output_token_limit": 2048}"#,
    )
    .unwrap();

    let model = ModelDescription::try_from(records.into_iter().next().unwrap()).unwrap();
    assert_eq!(model.name, "models/demo-1");
    assert_eq!(model.display_name, "Demo Model");
    assert_eq!(model.description, "A test model.");
    assert_eq!(model.input_token_limit, 8192);
    assert_eq!(model.output_token_limit, 2048);
}

#[test]
fn test_missing_description_surfaces_on_conversion() {
    let records = parse_records(
        r#"{"name": "models/demo-1", "displayName": "Demo Model",
            "inputTokenLimit": 8192, "outputTokenLimit": 2048}"#,
    )
    .unwrap();

    let err = ModelDescription::try_from(records[0].clone()).unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingField {
            field: "description"
        }
    );
}

#[test]
fn test_listing_file_with_mixed_records() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{"models": [
            {"name": "models/a", "displayName": "A", "description": "",
             "inputTokenLimit": 0, "outputTokenLimit": 0},
            {"name": "models/b"}
        ]}"#,
    )
    .unwrap();

    let results: Vec<_> = read_records(file.path())
        .unwrap()
        .into_iter()
        .map(ModelDescription::try_from)
        .collect();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err().missing_field(),
        Some("display_name")
    );
}

#[test]
fn test_description_serializes_with_snake_case_fields() {
    let model = ModelDescription::new("models/x", "X", "Text.", 1, 2);
    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(json["display_name"], "X");
    assert_eq!(json["input_token_limit"], 1);

    let back = parse_records(&json.to_string()).unwrap();
    assert_eq!(ModelDescription::try_from(back[0].clone()).unwrap(), model);
}
