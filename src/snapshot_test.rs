use serde_json::json;

use super::*;

fn hand_json(face_up: &[usize]) -> serde_json::Value {
    let cards: Vec<_> = (0..HAND_SIZE)
        .map(|i| json!({ "name": format!("{}C", i + 2), "face_up?": face_up.contains(&i) }))
        .collect();
    json!(cards)
}

fn snapshot_json() -> serde_json::Value {
    json!({
        "state": "hold",
        "players": [
            { "id": 10, "position": "bottom", "hand": hand_json(&[0, 4]), "heldCard": "QD" },
            { "id": 20, "position": "top", "hand": hand_json(&[]), "heldCard": null }
        ],
        "tableCards": ["AS", "9H", "3C"],
        "playerId": 10,
        "playableCards": ["held", "hand_0", "hand_5"],
        "isFlipped": false
    })
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn snapshot_parses_wire_names() {
    let snap: Snapshot = serde_json::from_value(snapshot_json()).unwrap();
    assert_eq!(snap.state, Some(RoundState::Hold));
    assert_eq!(snap.player_id, 10);
    assert_eq!(snap.players.len(), 2);
    assert_eq!(snap.players[0].held_card, Some(CardId::from("QD")));
    assert_eq!(snap.players[1].held_card, None);
    assert_eq!(snap.players[1].position, Seat::Top);
    assert!(!snap.is_flipped);
}

#[test]
fn snapshot_without_round_has_no_state() {
    let snap: Snapshot = serde_json::from_value(json!({ "state": null, "players": [], "playerId": 1 })).unwrap();
    assert!(!snap.round_started());
    assert!(snap.table_cards.is_empty());
    assert!(snap.playable_cards.is_empty());
}

#[test]
fn unknown_round_state_is_playing() {
    let snap: Snapshot = serde_json::from_value(json!({ "state": "last_take", "playerId": 1 })).unwrap();
    assert_eq!(snap.state, Some(RoundState::Playing));
    assert!(snap.round_started());
    assert!(!snap.is_over());
}

#[test]
fn over_state_is_terminal() {
    let snap: Snapshot = serde_json::from_value(json!({ "state": "over", "playerId": 1 })).unwrap();
    assert!(snap.is_over());
}

#[test]
fn hand_must_have_six_slots() {
    let mut value = snapshot_json();
    value["players"][0]["hand"] = json!([{ "name": "AS", "face_up?": true }]);
    assert!(serde_json::from_value::<Snapshot>(value).is_err());
}

#[test]
fn player_lookup_by_id() {
    let snap: Snapshot = serde_json::from_value(snapshot_json()).unwrap();
    assert_eq!(snap.player(20).map(|p| p.position), Some(Seat::Top));
    assert!(snap.player(99).is_none());
    assert!(snap.is_local(10));
    assert!(!snap.is_local(20));
}

#[test]
fn playable_regions_parse() {
    let snap: Snapshot = serde_json::from_value(snapshot_json()).unwrap();
    assert!(snap.playable_cards.contains(&Region::Held));
    assert!(snap.playable_cards.contains(&Region::Hand(0)));
    assert!(snap.playable_cards.contains(&Region::Hand(5)));
    assert!(!snap.playable_cards.contains(&Region::Deck));
    assert!(!snap.playable_cards.contains(&Region::Hand(1)));
}

#[test]
fn visible_table_cards_capped_at_two() {
    let snap: Snapshot = serde_json::from_value(snapshot_json()).unwrap();
    assert_eq!(snap.visible_table_cards(), &[CardId::from("AS"), CardId::from("9H")]);
}

// =============================================================
// HandCard
// =============================================================

#[test]
fn face_down_card_shows_hand_back() {
    let snap: Snapshot = serde_json::from_value(snapshot_json()).unwrap();
    let hand = &snap.players[0].hand;
    assert_eq!(hand[0].visible_name(), CardId::from("2C"));
    assert_eq!(hand[1].visible_name(), CardId::hand_back());
    assert_eq!(hand[4].visible_name(), CardId::from("6C"));
}

// =============================================================
// Region
// =============================================================

#[test]
fn region_tokens_round_trip() {
    for token in ["deck", "table", "held", "hand_0", "hand_5"] {
        let region: Region = token.parse().unwrap();
        assert_eq!(region.to_string(), token);
    }
}

#[test]
fn region_rejects_unknown_tokens() {
    assert!("hand_6".parse::<Region>().is_err());
    assert!("hand_x".parse::<Region>().is_err());
    assert!("pile".parse::<Region>().is_err());
}

#[test]
fn hand_slots_cover_every_index() {
    let slots: Vec<Region> = Region::hand_slots().collect();
    assert_eq!(slots.len(), HAND_SIZE);
    assert_eq!(slots[3], Region::Hand(3));
}

#[test]
fn reserved_card_ids() {
    assert_eq!(CardId::deck_back().as_str(), "1B");
    assert_eq!(CardId::hand_back().as_str(), "2B");
}
