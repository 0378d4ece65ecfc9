//! Presentation settings supplied by the host page.
//!
//! Geometry and timing are fixed in [`crate::consts`]; only the things a page
//! reasonably themes live here. Every field has a default, so the host may
//! pass `{}`, `null`, or nothing at all.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::TableError;

const DEFAULT_SPRITESHEET_URL: &str = "/images/spritesheets/cards.json";
const DEFAULT_BACKGROUND: &str = "forestgreen";
const DEFAULT_OUTLINE_COLOR: &str = "#ff00ff";
const DEFAULT_OUTLINE_WIDTH: f64 = 2.0;
const DEFAULT_HOVER_CURSOR: &str = "url('/images/cursor-click.png'),auto";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// URL of the spritesheet manifest; the sheet image resolves relative to it.
    pub spritesheet_url: String,
    /// Canvas fill behind every card.
    pub background: String,
    /// Stroke colour of the "playable" affordance.
    pub outline_color: String,
    pub outline_width: f64,
    /// CSS cursor shown while hovering an interactive card.
    pub hover_cursor: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            spritesheet_url: DEFAULT_SPRITESHEET_URL.to_owned(),
            background: DEFAULT_BACKGROUND.to_owned(),
            outline_color: DEFAULT_OUTLINE_COLOR.to_owned(),
            outline_width: DEFAULT_OUTLINE_WIDTH,
            hover_cursor: DEFAULT_HOVER_CURSOR.to_owned(),
        }
    }
}

impl TableConfig {
    /// Parse host JSON. Empty input and `null` give the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MalformedMessage`] if the JSON does not match.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: Option<Self> = serde_json::from_str(json).map_err(TableError::MalformedMessage)?;
        Ok(parsed.unwrap_or_default())
    }
}
