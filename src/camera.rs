#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{GAME_HEIGHT, GAME_WIDTH};

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fits the fixed logical canvas into the element's CSS box.
///
/// The logical square is scaled uniformly to the largest size that fits and
/// centered, so `offset_x` / `offset_y` are the letterbox margins in CSS
/// pixels and `scale` is CSS pixels per logical unit.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0 }
    }
}

impl Camera {
    /// Camera for an element displayed at `css_width` × `css_height`.
    /// A degenerate box keeps the identity mapping.
    #[must_use]
    pub fn fit(css_width: f64, css_height: f64) -> Self {
        if css_width <= 0.0 || css_height <= 0.0 {
            return Self::default();
        }
        let scale = (css_width / GAME_WIDTH).min(css_height / GAME_HEIGHT);
        Self {
            offset_x: (css_width - GAME_WIDTH * scale) / 2.0,
            offset_y: (css_height - GAME_HEIGHT * scale) / 2.0,
            scale,
        }
    }

    /// Convert a screen-space point (CSS pixels) to logical coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale,
            y: (screen.y - self.offset_y) / self.scale,
        }
    }

    /// Convert a logical point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale + self.offset_x,
            y: world.y * self.scale + self.offset_y,
        }
    }
}
