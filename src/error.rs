//! Crate error type.
//!
//! Every variant except the parse failures means the inbound snapshot and
//! event disagree with each other or with the client's state. Nothing here
//! is retried: the table is purely reactive, so an error is surfaced to the
//! host as fatal for that event.

use crate::snapshot::{CardId, PlayerId};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The `action` tag of a game event is outside the known set.
    #[error("event does not have a valid action: {0:?}")]
    UnknownAction(String),
    /// A player-scoped event names a player absent from the snapshot.
    #[error("player {player_id} not found for {action}")]
    UnknownPlayer { action: &'static str, player_id: PlayerId },
    /// A `flip` or `swap` event arrived without a hand index.
    #[error("{0} requires a hand index")]
    MissingHandIndex(&'static str),
    #[error("hand index {0} out of range")]
    HandIndexOutOfRange(usize),
    /// A take event for a player whose snapshot shows no held card.
    #[error("player {0} has no held card")]
    MissingHeldCard(PlayerId),
    /// A `discard` or `swap` whose snapshot shows an empty table stack.
    #[error("{0} requires a table card")]
    EmptyTable(&'static str),
    /// A card identifier with no frame in the loaded atlas.
    #[error("no texture for card {0}")]
    MissingTexture(CardId),
    /// An event arrived before the texture atlas resolved.
    #[error("assets are not loaded yet")]
    AssetsNotLoaded,
    #[error("malformed message: {0}")]
    MalformedMessage(#[source] serde_json::Error),
    #[error("malformed spritesheet: {0}")]
    MalformedAtlas(#[source] serde_json::Error),
}
