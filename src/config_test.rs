#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_input_gives_defaults() {
    assert_eq!(TableConfig::from_json("").unwrap(), TableConfig::default());
    assert_eq!(TableConfig::from_json("  ").unwrap(), TableConfig::default());
}

#[test]
fn null_gives_defaults() {
    assert_eq!(TableConfig::from_json("null").unwrap(), TableConfig::default());
}

#[test]
fn empty_object_gives_defaults() {
    let config = TableConfig::from_json("{}").unwrap();
    assert_eq!(config.spritesheet_url, "/images/spritesheets/cards.json");
    assert_eq!(config.background, "forestgreen");
    assert_eq!(config.outline_color, "#ff00ff");
    assert_eq!(config.outline_width, 2.0);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = TableConfig::from_json(r##"{"background": "#003300", "outlineWidth": 3}"##).unwrap();
    assert_eq!(config.background, "#003300");
    assert_eq!(config.outline_width, 3.0);
    assert_eq!(config.hover_cursor, TableConfig::default().hover_cursor);
}

#[test]
fn malformed_config_is_an_error() {
    let err = TableConfig::from_json(r#"{"outlineWidth": "wide"}"#).unwrap_err();
    assert!(matches!(err, TableError::MalformedMessage(_)));
}
