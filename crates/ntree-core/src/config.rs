// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves canvas, layout and palette settings from TOML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Palette, Point};

/// Radial layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Radius of the root circle in pixels; each generation halves it
    pub base_radius: f32,

    /// Angle (degrees) every fan of children starts from
    pub base_angle: f32,

    /// Root position as a fraction of the canvas width
    pub origin_x: f32,

    /// Root position as a fraction of the canvas height
    pub origin_y: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            base_radius: 70.0,
            base_angle: 0.0,
            origin_x: 0.5,
            origin_y: 1.0 / 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas dimensions
    pub width: u32,
    pub height: u32,

    pub layout: LayoutSettings,

    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1800,
            height: 900,
            layout: LayoutSettings::default(),
            palette: Palette::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/ntree/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ntree").join("config.toml"))
    }

    /// Where the root node sits on the canvas
    pub fn origin(&self) -> Point {
        Point::new(
            self.width as f32 * self.layout.origin_x,
            self.height as f32 * self.layout.origin_y,
        )
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
