#![allow(clippy::float_cmp)]

use super::*;

const SHEET: &str = r#"{
    "frames": {
        "AS": { "frame": { "x": 0, "y": 0, "w": 88, "h": 124 }, "rotated": false },
        "1B": { "frame": { "x": 88, "y": 0, "w": 88, "h": 124 }, "rotated": false }
    },
    "meta": { "image": "cards.png", "size": { "w": 176, "h": 124 } }
}"#;

#[test]
fn parses_pixi_manifest() {
    let atlas = TextureAtlas::from_json(SHEET).unwrap();
    assert_eq!(atlas.len(), 2);
    assert_eq!(atlas.image(), "cards.png");

    let deck = atlas.get(&CardId::deck_back()).unwrap();
    assert_eq!(deck.card(), &CardId::deck_back());
    assert_eq!(deck.frame().x, 88.0);
    assert_eq!(deck.frame().h, 124.0);
}

#[test]
fn missing_card_is_an_error() {
    let atlas = TextureAtlas::from_json(SHEET).unwrap();
    let err = atlas.get(&CardId::from("KH")).unwrap_err();
    assert!(matches!(err, TableError::MissingTexture(ref c) if c.as_str() == "KH"));
}

#[test]
fn malformed_manifest_is_an_error() {
    let err = TextureAtlas::from_json(r#"{ "frames": [] }"#).unwrap_err();
    assert!(matches!(err, TableError::MalformedAtlas(_)));
}

#[test]
fn from_frames_builds_lookup() {
    let frame = Frame { x: 1.0, y: 2.0, w: 3.0, h: 4.0 };
    let atlas = TextureAtlas::from_frames("sheet.png", [(CardId::from("QH"), frame)]);
    assert!(!atlas.is_empty());
    assert_eq!(atlas.get(&CardId::from("QH")).unwrap().frame(), frame);
}

#[test]
fn default_atlas_is_empty() {
    assert!(TextureAtlas::default().is_empty());
}

#[test]
fn image_url_relative_to_manifest() {
    assert_eq!(
        resolve_image_url("/images/spritesheets/cards.json", "cards.png"),
        "/images/spritesheets/cards.png"
    );
    assert_eq!(resolve_image_url("cards.json", "cards.png"), "cards.png");
    assert_eq!(resolve_image_url("/a/cards.json", "/b/cards.png"), "/b/cards.png");
}
