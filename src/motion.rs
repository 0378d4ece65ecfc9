//! Composite transitions built from tweens.
//!
//! Every "this card came from X" move is snap-then-animate: the entity's
//! transform is forced to the source anchor, then a tween carries it to its
//! real destination. Follow-up moves chain through completion callbacks,
//! which only ever see the sequencer, so any entity a chained tween touches
//! must already exist on the stage when the chain is built.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::{
    CENTER_X, DEAL_CHAIN_INDEX, DEAL_STAGGER_MS, DECK_SLIDE_MS, DECK_X, DISCARD_MS, DRAW_FROM_DECK_DELAY_MS, DRAW_MS,
    HAND_SIZE, SWAP_HELD_MS, SWAP_TABLE_DELAY_MS, SWAP_TABLE_MS, TABLE_CARD_X, TABLE_REVEAL_MS,
};
use crate::entity::{EntityId, Stage};
use crate::layout::{Coord, Seat, deck_top, hand_slot_coord, held_coord, rotation_at, table_anchor};
use crate::tween::{Easing, OnComplete, Props, Sequencer, Tween, stagger_delay};

/// Force `tween`'s target to `from`, then start the tween.
pub fn snap_then_animate(stage: &mut Stage, seq: &mut Sequencer, from: Coord, tween: Tween) {
    if let Some(entity) = stage.get_mut(tween.target()) {
        entity.set_transform(from);
    }
    seq.start(tween);
}

/// Deal a seat's six cards from the deck, last slot first.
///
/// `chained` runs when the third card dealt (the end of the first row)
/// lands.
pub fn deal_hand(
    stage: &mut Stage,
    seq: &mut Sequencer,
    seat: Seat,
    hand: &[EntityId; HAND_SIZE],
    mut chained: Option<OnComplete>,
) {
    let source = deck_top(CENTER_X);
    for (order, index) in (0..HAND_SIZE).rev().enumerate() {
        let mut tween = Tween::new(hand[index], Props::to(hand_slot_coord(seat, index)))
            .easing(Easing::CubicInOut)
            .delay(stagger_delay(HAND_SIZE, index, DEAL_STAGGER_MS));
        if order == DEAL_CHAIN_INDEX {
            if let Some(callback) = chained.take() {
                tween = tween.on_complete(callback);
            }
        }
        snap_then_animate(stage, seq, source, tween);
    }
}

/// Slide the deck left to make room for the table stack.
#[must_use]
pub fn slide_deck(deck: EntityId) -> Tween {
    Tween::new(deck, Props { x: Some(DECK_X), ..Props::default() })
        .duration(DECK_SLIDE_MS)
        .easing(Easing::QuadraticOut)
}

/// Show a table card and slide it out from under the deck.
#[must_use]
pub fn reveal_table_card(card: EntityId) -> Tween {
    Tween::new(card, Props { x: Some(TABLE_CARD_X), ..Props::default() }.with_visible(true))
        .duration(TABLE_REVEAL_MS)
        .easing(Easing::QuadraticOut)
}

/// Hide a table card under the deck until [`reveal_table_card`] runs.
pub fn tuck_table_card(stage: &mut Stage, card: EntityId) {
    if let Some(entity) = stage.get_mut(card) {
        entity.set_transform(Coord::new(DECK_X, table_anchor().y, 0.0));
        entity.visible = false;
    }
}

/// The post-deal chain: slide the deck, then reveal the table stack.
#[must_use]
pub fn after_deal(deck: EntityId, table: Vec<EntityId>) -> OnComplete {
    Box::new(move |seq: &mut Sequencer| {
        seq.start(slide_deck(deck).on_complete(move |seq| {
            for card in table {
                seq.start(reveal_table_card(card));
            }
        }));
    })
}

/// Draw the top of the deck into `seat`'s held position.
pub fn draw_from_deck(stage: &mut Stage, seq: &mut Sequencer, held: EntityId, seat: Seat, deck_x: f64) {
    let tween = Tween::new(held, Props::to(held_coord(seat)))
        .duration(DRAW_MS)
        .delay(DRAW_FROM_DECK_DELAY_MS)
        .easing(Easing::QuadraticInOut);
    snap_then_animate(stage, seq, deck_top(deck_x), tween);
}

/// Draw the table top into `seat`'s held position; `source` is where the
/// table card was.
pub fn draw_from_table(stage: &mut Stage, seq: &mut Sequencer, held: EntityId, seat: Seat, source: Coord) {
    let tween = Tween::new(held, Props::to(held_coord(seat)))
        .duration(DRAW_MS)
        .easing(Easing::QuadraticInOut);
    snap_then_animate(stage, seq, Coord::new(source.x, source.y, 0.0), tween);
}

/// Move a newly pushed table top from where the held card was.
pub fn discard_to_table(stage: &mut Stage, seq: &mut Sequencer, table_top: EntityId, seat: Seat, from: Coord) {
    let tween = Tween::new(table_top, Props::to(table_anchor()))
        .duration(DISCARD_MS)
        .easing(Easing::QuadraticInOut);
    snap_then_animate(stage, seq, Coord::new(from.x, from.y, rotation_at(seat)), tween);
}

/// Exchange a hand card with the held card.
///
/// The replaced card (the new table top) leaves the slot toward the table
/// while the held card slides into the slot. The hand entity, already
/// retextured, stays hidden until the held card lands on it; the held
/// entity is retired as it lands.
pub fn swap_into_hand(
    stage: &mut Stage,
    seq: &mut Sequencer,
    seat: Seat,
    slot: usize,
    hand: EntityId,
    held: Option<EntityId>,
    table_top: EntityId,
) {
    let slot_coord = hand_slot_coord(seat, slot);
    if let Some(entity) = stage.get_mut(hand) {
        entity.visible = false;
    }
    let show_hand = Tween::new(hand, Props::default().with_visible(true)).duration(0.0);

    match held {
        Some(held) => seq.start(
            Tween::new(held, Props::to_point(slot_coord.x, slot_coord.y).with_visible(false))
                .duration(SWAP_HELD_MS)
                .easing(Easing::QuadraticInOut)
                .retiring()
                .on_complete(move |seq| seq.start(show_hand)),
        ),
        None => seq.start(show_hand),
    }

    let outgoing = Tween::new(table_top, Props::to(table_anchor()))
        .duration(SWAP_TABLE_MS)
        .delay(SWAP_TABLE_DELAY_MS)
        .easing(Easing::QuadraticInOut);
    snap_then_animate(stage, seq, Coord::new(slot_coord.x, slot_coord.y, rotation_at(seat)), outgoing);
}
