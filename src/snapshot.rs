//! Server-authoritative game snapshot.
//!
//! A `Snapshot` is replaced wholesale on every inbound push; the client never
//! edits one. It answers perspective questions (who is the local viewer,
//! which regions may they activate) and supplies the card identities the
//! orchestrator paints onto entities.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DECK_CARD, DOWN_CARD, HAND_SIZE};
use crate::layout::Seat;

/// Server-side player identifier.
pub type PlayerId = i64;

/// Opaque card identifier: a two-character rank+suit code or one of the
/// reserved back identifiers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The deck artwork.
    #[must_use]
    pub fn deck_back() -> Self {
        Self::new(DECK_CARD)
    }

    /// A face-down hand card.
    #[must_use]
    pub fn hand_back() -> Self {
        Self::new(DOWN_CARD)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phase of the current round as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    /// Players flip their first two cards.
    Flip2,
    /// Waiting for the active player to draw.
    Take,
    /// The active player holds a drawn card.
    Hold,
    /// The active player must flip a card.
    Flip,
    /// The round has ended; every hand is shown.
    Over,
    /// Any other in-round phase.
    #[serde(other)]
    Playing,
}

/// One hand slot as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    pub name: CardId,
    #[serde(rename = "face_up?", default)]
    pub face_up: bool,
}

impl HandCard {
    /// The identifier to show for this slot: the card itself when face-up,
    /// otherwise the hand-back.
    #[must_use]
    pub fn visible_name(&self) -> CardId {
        if self.face_up { self.name.clone() } else { CardId::hand_back() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    /// Seat relative to the local viewer.
    pub position: Seat,
    pub hand: [HandCard; HAND_SIZE],
    /// The card this player has drawn but not yet placed.
    #[serde(default)]
    pub held_card: Option<CardId>,
}

/// An interactive zone of the table, shared by `playableCards` and the
/// outbound intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    Deck,
    Table,
    Held,
    Hand(usize),
}

impl Region {
    /// Every hand slot region, in slot order.
    pub fn hand_slots() -> impl Iterator<Item = Region> {
        (0..HAND_SIZE).map(Region::Hand)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deck => f.write_str("deck"),
            Self::Table => f.write_str("table"),
            Self::Held => f.write_str("held"),
            Self::Hand(i) => write!(f, "hand_{i}"),
        }
    }
}

/// Error for a region token outside the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region token: {0:?}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deck" => Ok(Self::Deck),
            "table" => Ok(Self::Table),
            "held" => Ok(Self::Held),
            _ => match s.strip_prefix("hand_").map(str::parse::<usize>) {
                Some(Ok(i)) if i < HAND_SIZE => Ok(Self::Hand(i)),
                _ => Err(UnknownRegion(s.to_owned())),
            },
        }
    }
}

impl TryFrom<String> for Region {
    type Error = UnknownRegion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.to_string()
    }
}

/// Set of regions the local viewer may activate.
pub type RegionSet = BTreeSet<Region>;

/// The full authoritative game state pushed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// `None` until the first round starts.
    #[serde(default)]
    pub state: Option<RoundState>,
    #[serde(default)]
    pub players: Vec<Player>,
    /// Face-up discard pile, index 0 on top.
    #[serde(default)]
    pub table_cards: Vec<CardId>,
    /// The local viewer.
    pub player_id: PlayerId,
    #[serde(default)]
    pub playable_cards: RegionSet,
    /// Set once the round has ended and every hand must be shown.
    #[serde(default)]
    pub is_flipped: bool,
}

impl Snapshot {
    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Whether `id` is the local viewer.
    #[must_use]
    pub fn is_local(&self, id: PlayerId) -> bool {
        self.player_id == id
    }

    #[must_use]
    pub fn round_started(&self) -> bool {
        self.state.is_some()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == Some(RoundState::Over)
    }

    /// The table stack as it should be shown, capped at two cards.
    #[must_use]
    pub fn visible_table_cards(&self) -> &[CardId] {
        let len = self.table_cards.len().min(crate::consts::TABLE_STACK_MAX);
        &self.table_cards[..len]
    }
}
