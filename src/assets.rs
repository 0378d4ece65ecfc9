//! Texture atlas: the asset collaborator's boundary.
//!
//! Card artwork ships as one spritesheet image plus a JSON manifest mapping
//! each card identifier to a frame rectangle. The manifest is resolved once,
//! asynchronously, by the host; until a `TextureAtlas` is handed to the
//! table no entity may be constructed.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::TableError;
use crate::snapshot::CardId;

/// Source rectangle of one card within the spritesheet image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// A drawable card face: which card it shows and where it lives in the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    card: CardId,
    frame: Frame,
}

impl Texture {
    #[must_use]
    pub fn new(card: CardId, frame: Frame) -> Self {
        Self { card, frame }
    }

    /// The card this texture shows.
    #[must_use]
    pub fn card(&self) -> &CardId {
        &self.card
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }
}

#[derive(Deserialize)]
struct SheetFrame {
    frame: Frame,
}

#[derive(Deserialize)]
struct SheetMeta {
    image: String,
}

#[derive(Deserialize)]
struct Sheet {
    frames: HashMap<String, SheetFrame>,
    meta: SheetMeta,
}

/// All card textures, keyed by card identifier.
#[derive(Debug, Clone, Default)]
pub struct TextureAtlas {
    image: String,
    textures: HashMap<CardId, Texture>,
}

impl TextureAtlas {
    /// Parse a spritesheet manifest (`{"frames": {...}, "meta": {"image": ...}}`).
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MalformedAtlas`] if the JSON does not match.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let sheet: Sheet = serde_json::from_str(json).map_err(TableError::MalformedAtlas)?;
        let textures = sheet
            .frames
            .into_iter()
            .map(|(name, entry)| {
                let card = CardId::new(name);
                (card.clone(), Texture::new(card, entry.frame))
            })
            .collect();
        Ok(Self { image: sheet.meta.image, textures })
    }

    /// Build an atlas directly from frames.
    #[must_use]
    pub fn from_frames(image: impl Into<String>, frames: impl IntoIterator<Item = (CardId, Frame)>) -> Self {
        let textures = frames
            .into_iter()
            .map(|(card, frame)| (card.clone(), Texture::new(card, frame)))
            .collect();
        Self { image: image.into(), textures }
    }

    /// Texture for `card`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingTexture`] if the sheet has no such frame.
    pub fn get(&self, card: &CardId) -> Result<Texture, TableError> {
        self.textures
            .get(card)
            .cloned()
            .ok_or_else(|| TableError::MissingTexture(card.clone()))
    }

    /// Image file name from the manifest, relative to the manifest URL.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Resolve the sheet image path against the manifest URL's directory.
#[must_use]
pub fn resolve_image_url(manifest_url: &str, image: &str) -> String {
    if image.starts_with('/') || image.contains("://") {
        return image.to_owned();
    }
    match manifest_url.rfind('/') {
        Some(idx) => format!("{}/{image}", &manifest_url[..idx]),
        None => image.to_owned(),
    }
}
