#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::assets::Frame;
use crate::snapshot::CardId;

fn texture(name: &str) -> Texture {
    Texture::new(CardId::from(name), Frame { x: 0.0, y: 0.0, w: 88.0, h: 124.0 })
}

fn card(name: &str) -> CardEntity {
    create_card_entity(texture(name), 10.0, 20.0, 0.5)
}

// =============================================================
// create_card_entity
// =============================================================

#[test]
fn create_sets_transform_and_scale() {
    let e = card("AS");
    assert_eq!(e.x, 10.0);
    assert_eq!(e.y, 20.0);
    assert_eq!(e.rotation, 0.5);
    assert_eq!(e.scale, CARD_SCALE);
    assert_eq!(e.width(), CARD_WIDTH);
    assert_eq!(e.height(), CARD_HEIGHT);
    assert!(e.visible);
}

#[test]
fn new_entity_is_inert() {
    let e = card("AS");
    assert!(!e.is_interactive());
    assert!(!e.is_outlined());
    assert!(e.activate().is_none());
}

#[test]
fn set_transform_round_trips() {
    let mut e = card("AS");
    e.set_transform(Coord::new(1.0, 2.0, 3.0));
    assert_eq!(e.transform(), Coord::new(1.0, 2.0, 3.0));
}

// =============================================================
// set_interactive / set_non_interactive
// =============================================================

#[test]
fn interactive_entity_emits_intent() {
    let mut e = card("1B");
    set_interactive(&mut e, || Intent::deck(4));
    assert!(e.is_interactive());
    assert!(e.is_outlined());
    assert_eq!(e.activate(), Some(Intent::deck(4)));
}

#[test]
fn set_interactive_twice_replaces_callback() {
    let fired = Rc::new(Cell::new(0));
    let mut e = card("1B");

    let first = Rc::clone(&fired);
    set_interactive(&mut e, move || {
        first.set(first.get() + 1);
        Intent::deck(1)
    });
    let second = Rc::clone(&fired);
    set_interactive(&mut e, move || {
        second.set(second.get() + 10);
        Intent::table(1)
    });

    assert_eq!(e.activate(), Some(Intent::table(1)));
    assert_eq!(fired.get(), 10);
}

#[test]
fn set_non_interactive_clears_everything() {
    let mut e = card("1B");
    set_interactive(&mut e, || Intent::deck(1));
    set_non_interactive(&mut e);
    assert!(!e.is_interactive());
    assert!(!e.is_outlined());
    assert!(e.activate().is_none());
}

#[test]
fn set_non_interactive_is_idempotent() {
    let mut e = card("1B");
    set_non_interactive(&mut e);
    set_non_interactive(&mut e);
    assert!(!e.is_interactive());
}

// =============================================================
// Stage
// =============================================================

#[test]
fn stage_preserves_insertion_order() {
    let mut stage = Stage::new();
    let a = stage.add(card("AS"));
    let b = stage.add(card("KS"));
    let order: Vec<EntityId> = stage.iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![a, b]);
    assert_eq!(stage.len(), 2);
}

#[test]
fn bring_to_front_reorders_draw() {
    let mut stage = Stage::new();
    let a = stage.add(card("AS"));
    let b = stage.add(card("KS"));
    stage.bring_to_front(a);
    let order: Vec<EntityId> = stage.iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![b, a]);
    assert_eq!(stage.len(), 2);
}

#[test]
fn stage_index_and_get() {
    let mut stage = Stage::new();
    let a = stage.add(card("AS"));
    stage[a].visible = false;
    assert!(!stage[a].visible);
    assert_eq!(stage.get(a).map(|e| e.texture.card().as_str()), Some("AS"));
    assert!(stage.get_mut(a).is_some());
}

#[test]
fn retire_hides_and_leaves_draw_order() {
    let mut stage = Stage::new();
    let a = stage.add(card("AS"));
    let b = stage.add(card("KS"));
    set_interactive(&mut stage[a], || Intent::deck(1));

    stage.retire(a);
    assert!(stage[a].is_retired());
    assert!(!stage[a].visible);
    assert!(!stage[a].is_interactive());
    let order: Vec<EntityId> = stage.iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![b]);
    assert_eq!(stage.len(), 2);

    stage.bring_to_front(a);
    assert_eq!(stage.iter().count(), 1);
}

#[test]
fn empty_stage() {
    let stage = Stage::new();
    assert!(stage.is_empty());
    assert_eq!(stage.iter().count(), 0);
}
