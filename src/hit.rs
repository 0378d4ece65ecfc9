#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::entity::{CardEntity, EntityId, Stage};

/// Whether `world_pt` falls inside the card's rotated rectangle.
#[must_use]
pub fn point_in_card(entity: &CardEntity, world_pt: Point) -> bool {
    let dx = world_pt.x - entity.x;
    let dy = world_pt.y - entity.y;
    let (sin, cos) = (-entity.rotation).sin_cos();
    let local_x = dx * cos - dy * sin;
    let local_y = dx * sin + dy * cos;
    local_x.abs() <= entity.width() / 2.0 && local_y.abs() <= entity.height() / 2.0
}

/// The topmost visible, interactive entity under `world_pt`.
///
/// Entities that are hidden or not interactive are transparent to the
/// pointer, so a playable card beneath an inert one is still reachable.
#[must_use]
pub fn hit_test(world_pt: Point, stage: &Stage) -> Option<EntityId> {
    stage
        .iter()
        .rev()
        .find(|(_, entity)| entity.visible && entity.is_interactive() && point_in_card(entity, world_pt))
        .map(|(id, _)| id)
}
