//! Wire records exchanged with the network collaborator.
//!
//! Inbound: `game-loaded` and `round-started` carry a snapshot; `game-event`
//! carries a snapshot plus an action payload. The payload's `action` string
//! is checked against the closed set of [`GameEvent`] variants here, so an
//! unknown tag fails before any handler runs.
//!
//! Outbound: [`Intent`] records, one per user activation.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::snapshot::{PlayerId, Snapshot};

/// Action payload exactly as it arrives, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub action: String,
    pub player_id: PlayerId,
    #[serde(default)]
    pub hand_index: Option<usize>,
}

/// A validated game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flip { player_id: PlayerId, hand_index: usize },
    TakeFromDeck { player_id: PlayerId },
    TakeFromTable { player_id: PlayerId },
    Discard { player_id: PlayerId },
    Swap { player_id: PlayerId, hand_index: usize },
}

impl GameEvent {
    /// The wire name of this event's action.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::Flip { .. } => "flip",
            Self::TakeFromDeck { .. } => "take_from_deck",
            Self::TakeFromTable { .. } => "take_from_table",
            Self::Discard { .. } => "discard",
            Self::Swap { .. } => "swap",
        }
    }

    /// The acting player.
    #[must_use]
    pub fn player_id(&self) -> PlayerId {
        match *self {
            Self::Flip { player_id, .. }
            | Self::TakeFromDeck { player_id }
            | Self::TakeFromTable { player_id }
            | Self::Discard { player_id }
            | Self::Swap { player_id, .. } => player_id,
        }
    }
}

impl TryFrom<RawEvent> for GameEvent {
    type Error = TableError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let player_id = raw.player_id;
        match raw.action.as_str() {
            "flip" => Ok(Self::Flip {
                player_id,
                hand_index: raw.hand_index.ok_or(TableError::MissingHandIndex("flip"))?,
            }),
            "take_from_deck" => Ok(Self::TakeFromDeck { player_id }),
            "take_from_table" => Ok(Self::TakeFromTable { player_id }),
            "discard" => Ok(Self::Discard { player_id }),
            "swap" => Ok(Self::Swap {
                player_id,
                hand_index: raw.hand_index.ok_or(TableError::MissingHandIndex("swap"))?,
            }),
            _ => Err(TableError::UnknownAction(raw.action)),
        }
    }
}

/// Body of `game-loaded` and `round-started`.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotMessage {
    pub game: Snapshot,
}

/// Body of `game-event`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventMessage {
    pub game: Snapshot,
    pub event: RawEvent,
}

impl SnapshotMessage {
    /// Parse a `game-loaded` / `round-started` body.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MalformedMessage`] if the JSON does not match.
    pub fn parse(json: &str) -> Result<Self, TableError> {
        serde_json::from_str(json).map_err(TableError::MalformedMessage)
    }
}

impl EventMessage {
    /// Parse a `game-event` body and validate its action.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MalformedMessage`] if the JSON does not match,
    /// or the validation errors of [`GameEvent::try_from`].
    pub fn parse(json: &str) -> Result<(Snapshot, GameEvent), TableError> {
        let message: Self = serde_json::from_str(json).map_err(TableError::MalformedMessage)?;
        let event = GameEvent::try_from(message.event)?;
        Ok((message.game, event))
    }
}

/// Which region the user activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    DeckClick,
    TableClick,
    HandClick,
    HeldClick,
}

impl IntentKind {
    /// Event name pushed to the server.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::DeckClick => "deck-click",
            Self::TableClick => "table-click",
            Self::HandClick => "hand-click",
            Self::HeldClick => "held-click",
        }
    }
}

/// An outbound activation record. The client never changes its own model
/// on activation; it waits for the server's resulting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(skip)]
    pub kind: IntentKind,
    pub player_id: PlayerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_index: Option<usize>,
}

impl Intent {
    #[must_use]
    pub fn deck(player_id: PlayerId) -> Self {
        Self { kind: IntentKind::DeckClick, player_id, hand_index: None }
    }

    #[must_use]
    pub fn table(player_id: PlayerId) -> Self {
        Self { kind: IntentKind::TableClick, player_id, hand_index: None }
    }

    #[must_use]
    pub fn held(player_id: PlayerId) -> Self {
        Self { kind: IntentKind::HeldClick, player_id, hand_index: None }
    }

    #[must_use]
    pub fn hand(player_id: PlayerId, hand_index: usize) -> Self {
        Self { kind: IntentKind::HandClick, player_id, hand_index: Some(hand_index) }
    }

    /// Event name pushed to the server.
    #[must_use]
    pub fn event_name(&self) -> &'static str {
        self.kind.event_name()
    }
}
