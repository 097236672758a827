//! Configuration persistence for overlay styling

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ShapeColor {
    pub const RED: ShapeColor = ShapeColor::rgb(1.0, 0.0, 0.0);
    pub const GREEN: ShapeColor = ShapeColor::rgb(0.0, 0.5, 0.0);
    pub const BLUE: ShapeColor = ShapeColor::rgb(0.0, 0.0, 1.0);
    pub const BLACK: ShapeColor = ShapeColor::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            255,
        ]
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self::RED
    }
}

/// Colors and stroke width used when drawing markers and overlays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Marker drawn at each clicked point
    pub marker_color: ShapeColor,
    /// Solid line joining the two points
    pub connector_color: ShapeColor,
    /// Dashed horizontal and vertical reference lines
    pub reference_color: ShapeColor,
    pub arc_color: ShapeColor,
    pub label_color: ShapeColor,
    /// Stroke width of lines and arc in image pixels
    pub line_width: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            marker_color: ShapeColor::RED,
            connector_color: ShapeColor::BLUE,
            reference_color: ShapeColor::RED,
            arc_color: ShapeColor::GREEN,
            label_color: ShapeColor::BLACK,
            line_width: 1.0,
        }
    }
}

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleMarkConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub style: OverlayStyle,
}

fn default_version() -> u32 {
    AngleMarkConfig::VERSION
}

impl Default for AngleMarkConfig {
    fn default() -> Self {
        Self {
            version: Self::VERSION,
            style: OverlayStyle::default(),
        }
    }
}

impl AngleMarkConfig {
    /// Current configuration file format version
    pub const VERSION: u32 = 1;

    const APP_DIR: &'static str = "anglemark";
    const FILE_NAME: &'static str = "config.json";

    /// Default location of the config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        let Some(path) = Self::default_path() else {
            log::error!("No config directory available, config not saved");
            return;
        };
        if let Err(err) = self.save_to(&path) {
            log::error!("Failed to save config: {:?}", err);
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        if config.version != Self::VERSION {
            log::warn!(
                "Config version {} differs from supported version {}",
                config.version,
                Self::VERSION
            );
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("writing config {}", path.display()))?;
        log::debug!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba_u8() {
        assert_eq!(ShapeColor::RED.to_rgba_u8(), [255, 0, 0, 255]);
        assert_eq!(ShapeColor::GREEN.to_rgba_u8(), [0, 128, 0, 255]);
        assert_eq!(ShapeColor::rgb(2.0, -1.0, 0.5).to_rgba_u8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AngleMarkConfig::default();
        config.style.line_width = 3.0;
        config.style.arc_color = ShapeColor::BLUE;
        config.save_to(&path).unwrap();

        let loaded = AngleMarkConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "style": { "line_width": 2.5 } }"#).unwrap();

        let loaded = AngleMarkConfig::load_from(&path).unwrap();
        assert_eq!(loaded.version, AngleMarkConfig::VERSION);
        assert_eq!(loaded.style.line_width, 2.5);
        assert_eq!(loaded.style.connector_color, ShapeColor::BLUE);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(AngleMarkConfig::load_from(&path).is_err());
    }
}
