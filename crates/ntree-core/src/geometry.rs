// ABOUTME: Screen-space geometry shared by layout and rendering.
// ABOUTME: Points are in pixels with y growing downward.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` in the direction of `degrees`
    /// (0° points along +x, 90° along +y, i.e. down the screen).
    pub fn offset_polar(self, degrees: f32, distance: f32) -> Self {
        let radians = degrees.to_radians();
        Self {
            x: self.x + radians.cos() * distance,
            y: self.y + radians.sin() * distance,
        }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
