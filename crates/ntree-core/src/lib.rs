// ABOUTME: Shared types and configuration for ntree.
// ABOUTME: Defines screen points, semantic colors, and config file handling.

pub mod color;
pub mod config;
pub mod geometry;

pub use color::{Color, ColorClass, Palette};
pub use config::{Config, ConfigError, LayoutSettings};
pub use geometry::Point;
