// ABOUTME: Color representation and semantic color classes.
// ABOUTME: The tree core only picks classes; the palette maps them to RGB.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const LIGHT_GRAY: Self = Self::rgb(0.784, 0.784, 0.784);
    pub const YELLOW: Self = Self::rgb(0.992, 0.976, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 0.894, 0.188);
    pub const RED: Self = Self::rgb(0.902, 0.161, 0.216);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(0.961, 0.961, 0.961);

    /// `#rrggbb` form, alpha is dropped
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Semantic class of a node circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorClass {
    /// Default node
    #[default]
    Neutral,
    /// Compared during a search and not matched
    Exploring,
    /// Search hit, or an ancestor of it
    Found,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub neutral: Color,
    pub exploring: Color,
    pub found: Color,
    /// Edges and node labels
    pub ink: Color,
    /// "Not Found!" banner and status messages
    pub alert: Color,
    pub background: Color,
}

impl Palette {
    pub fn resolve(&self, class: ColorClass) -> Color {
        match class {
            ColorClass::Neutral => self.neutral,
            ColorClass::Exploring => self.exploring,
            ColorClass::Found => self.found,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            neutral: Color::LIGHT_GRAY,
            exploring: Color::YELLOW,
            found: Color::GREEN,
            ink: Color::BLACK,
            alert: Color::RED,
            background: Color::WHITE,
        }
    }
}
