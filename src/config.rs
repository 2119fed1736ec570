// SPDX-License-Identifier: MPL-2.0
//! Overlay configuration: every tunable of the lightbox in one place,
//! loadable from an `overlay.toml` file.
//!
//! All fields have defaults so a missing or partial file never prevents the
//! overlay from opening. Sizes are in logical pixels.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "overlay.toml";
const APP_NAME: &str = "IcedLightbox";

/// Fixed margins between the holder's outer bounds and the inner content
/// rectangle. These leave room for the decorative corners, so the geometry
/// solver treats them as hard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    /// Total horizontal inset (left + right).
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Fixed corner piece sizes. The right-hand pair may have a different width
/// than the left-hand pair; all four share one height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerSizes {
    pub left_width: f32,
    pub right_width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Soft padding subtracted from the viewport on each side before the
    /// contain-fit.
    pub viewport_padding_x: f32,
    pub viewport_padding_y: f32,

    /// Hard minimum size of the inner media region.
    pub min_content_width: f32,
    pub min_content_height: f32,

    /// Margins between holder bounds and the content rectangle.
    pub content_inset: Insets,

    /// Decorative corner footprints.
    pub corner: CornerSizes,

    /// Interior overlap applied to adaptive nine-slice pieces to hide
    /// anti-aliasing seams. Never applied on outward-facing edges.
    pub bleed: f32,

    /// Slide animation duration in milliseconds.
    pub slide_duration_ms: u64,

    /// Extra clearance added to the travel distance so the outgoing and
    /// incoming holders never overlap mid-slide.
    pub slide_margin: f32,

    /// Accent color used by the glow and outline layers, as `#rrggbb`.
    pub default_accent: String,

    /// Aspect ratio assumed for videos that do not supply one.
    pub default_video_aspect: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            viewport_padding_x: 72.0,
            viewport_padding_y: 56.0,
            min_content_width: 320.0,
            min_content_height: 220.0,
            content_inset: Insets {
                top: 26.0,
                right: 30.0,
                bottom: 26.0,
                left: 30.0,
            },
            corner: CornerSizes {
                left_width: 44.0,
                right_width: 52.0,
                height: 44.0,
            },
            bleed: 1.0,
            slide_duration_ms: 450,
            slide_margin: 60.0,
            default_accent: "#e8603c".to_string(),
            default_video_aspect: 16.0 / 9.0,
        }
    }
}

impl OverlayConfig {
    /// Smallest holder width that still honors the minimum content size.
    #[must_use]
    pub fn min_holder_width(&self) -> f32 {
        self.min_content_width + self.content_inset.horizontal()
    }

    /// Smallest holder height that still honors the minimum content size.
    #[must_use]
    pub fn min_holder_height(&self) -> f32 {
        self.min_content_height + self.content_inset.vertical()
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the overlay configuration from the platform config directory,
/// falling back to defaults when no file exists.
pub fn load() -> Result<OverlayConfig> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(OverlayConfig::default())
}

pub fn load_from_path(path: &Path) -> Result<OverlayConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &OverlayConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|e| crate::error::Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

/// Parses a `#rrggbb` accent string into an Iced color.
///
/// Malformed strings fall back to the default accent so a bad config file
/// never breaks rendering.
#[must_use]
pub fn parse_accent(hex: &str) -> iced::Color {
    fn channel(hex: &str, at: usize) -> Option<f32> {
        let byte = u8::from_str_radix(hex.get(at..at + 2)?, 16).ok()?;
        Some(f32::from(byte) / 255.0)
    }

    let trimmed = hex.trim().trim_start_matches('#');
    if trimmed.len() == 6 {
        if let (Some(r), Some(g), Some(b)) =
            (channel(trimmed, 0), channel(trimmed, 2), channel(trimmed, 4))
        {
            return iced::Color::from_rgb(r, g, b);
        }
    }
    iced::Color::from_rgb8(0xe8, 0x60, 0x3c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_coherent() {
        let config = OverlayConfig::default();
        assert!(config.min_holder_width() > config.min_content_width);
        assert!(config.min_holder_height() > config.min_content_height);
        assert!(config.bleed >= 0.0);
        assert!(config.slide_duration_ms > 0);
    }

    #[test]
    fn round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overlay.toml");

        let mut config = OverlayConfig::default();
        config.slide_duration_ms = 300;
        config.default_accent = "#123456".to_string();

        save_to_path(&config, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_uses_defaults_for_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overlay.toml");
        fs::write(&path, "slide_duration_ms = 200\n").unwrap();

        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.slide_duration_ms, 200);
        assert_eq!(
            loaded.min_content_width,
            OverlayConfig::default().min_content_width
        );
    }

    #[test]
    fn accent_parses_hex() {
        let color = parse_accent("#ff0080");
        assert!((color.r - 1.0).abs() < 1e-6);
        assert!(color.g.abs() < 1e-6);
        assert!((color.b - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn malformed_accent_falls_back() {
        let fallback = parse_accent("not-a-color");
        assert_eq!(fallback, iced::Color::from_rgb8(0xe8, 0x60, 0x3c));
    }
}
