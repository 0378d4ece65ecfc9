//! Card entities and the stage that draws them.
//!
//! A `CardEntity` is one renderable card: a texture, a center-pivoted
//! transform, visibility, and an optional activation callback. The `Stage`
//! owns every entity ever created; ids stay valid for the life of the table
//! and the stage's order is the draw order (later entries on top).

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::assets::Texture;
use crate::consts::{CARD_HEIGHT, CARD_SCALE, CARD_WIDTH};
use crate::layout::Coord;
use crate::protocol::Intent;

/// Handle to an entity on the [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(usize);

/// Callback fired when the user activates an interactive entity.
pub type Activation = Box<dyn Fn() -> Intent>;

pub struct CardEntity {
    pub texture: Texture,
    /// Center x; the pivot is the card's geometric center.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Radians, about the center.
    pub rotation: f64,
    pub scale: f64,
    pub visible: bool,
    hit_enabled: bool,
    outlined: bool,
    retired: bool,
    on_activate: Option<Activation>,
}

impl CardEntity {
    #[must_use]
    pub fn transform(&self) -> Coord {
        Coord::new(self.x, self.y, self.rotation)
    }

    pub fn set_transform(&mut self, coord: Coord) {
        self.x = coord.x;
        self.y = coord.y;
        self.rotation = coord.rotation;
    }

    /// Whether pointer hits reach this entity.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.hit_enabled
    }

    /// Whether the entity has left play for good. Tweens no longer touch it.
    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Whether the "playable" outline is drawn.
    #[must_use]
    pub fn is_outlined(&self) -> bool {
        self.outlined
    }

    /// Fire the activation callback, if one is attached.
    #[must_use]
    pub fn activate(&self) -> Option<Intent> {
        if !self.hit_enabled {
            return None;
        }
        self.on_activate.as_ref().map(|cb| cb())
    }

    /// On-canvas width after scaling.
    #[must_use]
    pub fn width(&self) -> f64 {
        CARD_WIDTH * self.scale / CARD_SCALE
    }

    /// On-canvas height after scaling.
    #[must_use]
    pub fn height(&self) -> f64 {
        CARD_HEIGHT * self.scale / CARD_SCALE
    }
}

impl fmt::Debug for CardEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardEntity")
            .field("card", self.texture.card())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("rotation", &self.rotation)
            .field("visible", &self.visible)
            .field("interactive", &self.hit_enabled)
            .field("retired", &self.retired)
            .finish_non_exhaustive()
    }
}

/// Build a card at the given transform, pivoted on its center and scaled
/// to the fixed card size. New entities are visible and inert.
#[must_use]
pub fn create_card_entity(texture: Texture, x: f64, y: f64, rotation: f64) -> CardEntity {
    CardEntity {
        texture,
        x,
        y,
        rotation,
        scale: CARD_SCALE,
        visible: true,
        hit_enabled: false,
        outlined: false,
        retired: false,
        on_activate: None,
    }
}

/// Make `entity` hit-testable with the playable outline and exactly one
/// activation callback. Any earlier callback is dropped first.
pub fn set_interactive(entity: &mut CardEntity, on_activate: impl Fn() -> Intent + 'static) {
    entity.on_activate = None;
    entity.hit_enabled = true;
    entity.outlined = true;
    entity.on_activate = Some(Box::new(on_activate));
}

/// Clear hit-testing, outline and callback. Idempotent.
pub fn set_non_interactive(entity: &mut CardEntity) {
    entity.hit_enabled = false;
    entity.outlined = false;
    entity.on_activate = None;
}

/// Every entity on the table, in draw order.
#[derive(Debug, Default)]
pub struct Stage {
    entities: Vec<CardEntity>,
    order: Vec<EntityId>,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity on top of everything drawn so far.
    pub fn add(&mut self, entity: CardEntity) -> EntityId {
        let id = EntityId(self.entities.len());
        self.entities.push(entity);
        self.order.push(id);
        id
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&CardEntity> {
        self.entities.get(id.0)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut CardEntity> {
        self.entities.get_mut(id.0)
    }

    /// Move `id` to the top of the draw order.
    pub fn bring_to_front(&mut self, id: EntityId) {
        if let Some(pos) = self.order.iter().position(|e| *e == id) {
            self.order.remove(pos);
            self.order.push(id);
        }
    }

    /// Take `id` out of play: hidden, inert and dropped from the draw order.
    /// The slot stays allocated so ids held by pending tweens stay valid.
    pub fn retire(&mut self, id: EntityId) {
        if let Some(entity) = self.entities.get_mut(id.0) {
            entity.visible = false;
            entity.retired = true;
            set_non_interactive(entity);
        }
        self.order.retain(|e| *e != id);
    }

    /// Entities still in play, bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (EntityId, &CardEntity)> {
        self.order.iter().map(|id| (*id, &self.entities[id.0]))
    }

    /// Number of entities ever added, retired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Index<EntityId> for Stage {
    type Output = CardEntity;

    fn index(&self, id: EntityId) -> &CardEntity {
        &self.entities[id.0]
    }
}

impl IndexMut<EntityId> for Stage {
    fn index_mut(&mut self, id: EntityId) -> &mut CardEntity {
        &mut self.entities[id.0]
    }
}
