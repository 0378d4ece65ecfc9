//! Seat-relative layout on the fixed logical canvas.
//!
//! Every seat is derived from one baseline: the `bottom` seat, two rows of
//! three cards along the bottom edge. `top` is its point-mirror about the
//! canvas center, and `left`/`right` swap the axes so the hand runs along
//! the side edge, rotated a quarter turn toward the center.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CARD_HEIGHT, CARD_WIDTH, CENTER_X, DECK_X, DECK_Y, DECK_Y_OFFSET, GAME_HEIGHT, GAME_WIDTH, HAND_X_PAD, HAND_Y_PAD,
    TABLE_CARD_X, TABLE_CARD_Y,
};

/// A player's seat relative to the local viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Bottom,
    Left,
    Top,
    Right,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::Bottom, Seat::Left, Seat::Top, Seat::Right];
}

/// Position and rotation (radians) of a card's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl Coord {
    #[must_use]
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }
}

/// Card rotation for a seat: upright for `bottom`/`top`, a quarter turn
/// toward the center for the side seats.
#[must_use]
pub fn rotation_at(seat: Seat) -> f64 {
    match seat {
        Seat::Bottom | Seat::Top => 0.0,
        Seat::Left => FRAC_PI_2,
        Seat::Right => -FRAC_PI_2,
    }
}

/// Center of hand slot `index` (0..6) for `seat`.
///
/// Slots 0..3 form the inner row (nearest the table), 3..6 the outer row,
/// ordered left to right from the seated player's point of view.
#[must_use]
pub fn hand_slot_coord(seat: Seat, index: usize) -> Coord {
    debug_assert!(index < crate::consts::HAND_SIZE);

    #[allow(clippy::cast_precision_loss)]
    let column = (index % 3) as f64 - 1.0;
    let x = CENTER_X + column * (CARD_WIDTH + HAND_X_PAD);
    let y = if index < 3 {
        GAME_HEIGHT - CARD_HEIGHT * 1.5 - HAND_Y_PAD * 1.3
    } else {
        GAME_HEIGHT - CARD_HEIGHT / 2.0 - HAND_Y_PAD
    };

    place(seat, x, y)
}

/// Where a drawn card is held for `seat`, beside the hand.
#[must_use]
pub fn held_coord(seat: Seat) -> Coord {
    let x = CENTER_X + CARD_WIDTH * 2.5;
    let y = GAME_HEIGHT - CARD_HEIGHT - HAND_Y_PAD;
    place(seat, x, y)
}

/// Deck x position: centered before the first round, shifted left once
/// the table has room for a face-up card beside it.
#[must_use]
pub fn deck_x(round_started: bool) -> f64 {
    if round_started { DECK_X } else { CENTER_X }
}

/// Where a card leaving the deck starts: the top of the deck pile.
#[must_use]
pub fn deck_top(deck_x: f64) -> Coord {
    Coord::new(deck_x, DECK_Y + DECK_Y_OFFSET, 0.0)
}

/// The single table anchor shared by every card on the table stack.
#[must_use]
pub fn table_anchor() -> Coord {
    Coord::new(TABLE_CARD_X, TABLE_CARD_Y, 0.0)
}

/// Map a point laid out for the `bottom` seat onto `seat`.
fn place(seat: Seat, x: f64, y: f64) -> Coord {
    let (x, y) = match seat {
        Seat::Bottom => (x, y),
        Seat::Top => (GAME_WIDTH - x, GAME_HEIGHT - y),
        Seat::Left => (GAME_WIDTH - y, x),
        Seat::Right => (y, GAME_HEIGHT - x),
    };
    Coord::new(x, y, rotation_at(seat))
}
