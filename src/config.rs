//! Pipeline configuration.
//!
//! All tunables live in one explicit structure passed into each command, so
//! tests can point the pipeline at temporary directories instead of relying
//! on process-global paths. A sparse `config.toml` at the repository root
//! overrides the stock defaults; unknown keys are rejected to catch typos
//! early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! wallpaper_dir = "wallpapers"
//! manifest_path = "manifest.json"
//! gif_dir = "app_gifs"
//! base_url = "https://raw.githubusercontent.com/aliumujib/digital-wellbeing-wallpapers/main"
//! author = "Abdulmujeeb Aliu"
//! license = "CC0"
//!
//! [thumbnails]
//! max_width = 200           # Thumbnails fit within max_width x max_height
//! max_height = 356
//! quality = 75              # JPEG quality (0-100)
//! size_budget = 51200       # Warn when a thumbnail exceeds this (bytes)
//!
//! [images]
//! quality = 85              # JPEG quality for full-size recompression
//! size_budget = 1048576     # Warn when a full image exceeds this (bytes)
//!
//! [gif]
//! fps = 15                  # Output frame rate (lower = smaller files)
//! width = 320               # Output width; height keeps aspect ratio
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Pipeline configuration loaded from `config.toml`.
///
/// All fields have stock defaults matching the published repository layout.
/// User config files need only specify the values they want to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Root directory holding one subdirectory per category.
    pub wallpaper_dir: String,
    /// Where the generated catalog is written.
    pub manifest_path: String,
    /// Directory holding demo videos for GIF conversion.
    pub gif_dir: String,
    /// Base URL joined into entry `url`/`thumbnailUrl` fields.
    pub base_url: String,
    /// Attribution recorded on every catalog entry.
    pub author: String,
    pub license: String,
    pub thumbnails: ThumbnailSettings,
    pub images: ImageSettings,
    pub gif: GifSettings,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            wallpaper_dir: "wallpapers".to_string(),
            manifest_path: "manifest.json".to_string(),
            gif_dir: "app_gifs".to_string(),
            base_url:
                "https://raw.githubusercontent.com/aliumujib/digital-wellbeing-wallpapers/main"
                    .to_string(),
            author: "Abdulmujeeb Aliu".to_string(),
            license: "CC0".to_string(),
            thumbnails: ThumbnailSettings::default(),
            images: ImageSettings::default(),
            gif: GifSettings::default(),
        }
    }
}

impl PipelineConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thumbnails.quality > 100 {
            return Err(ConfigError::Validation(
                "thumbnails.quality must be 0-100".into(),
            ));
        }
        if self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 0-100".into(),
            ));
        }
        if self.thumbnails.max_width == 0 || self.thumbnails.max_height == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.max_width and max_height must be non-zero".into(),
            ));
        }
        if self.gif.fps == 0 {
            return Err(ConfigError::Validation("gif.fps must be non-zero".into()));
        }
        if self.gif.width == 0 {
            return Err(ConfigError::Validation("gif.width must be non-zero".into()));
        }
        Ok(())
    }
}

/// Thumbnail generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailSettings {
    /// Thumbnails are resized to fit within `max_width` x `max_height`,
    /// preserving aspect ratio.
    pub max_width: u32,
    pub max_height: u32,
    /// JPEG quality (0-100).
    pub quality: u8,
    /// Warn when an optimized thumbnail exceeds this many bytes.
    pub size_budget: u64,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            max_width: 200,
            max_height: 356,
            quality: 75,
            size_budget: 50 * 1024,
        }
    }
}

/// Full-size image optimization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageSettings {
    /// JPEG quality (0-100) for full-size recompression.
    pub quality: u8,
    /// Warn when an optimized full image exceeds this many bytes.
    pub size_budget: u64,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            quality: 85,
            size_budget: 1024 * 1024,
        }
    }
}

/// Video-to-GIF conversion settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GifSettings {
    /// Output frame rate.
    pub fps: u32,
    /// Output width in pixels; height is derived from the aspect ratio.
    pub width: u32,
}

impl Default for GifSettings {
    fn default() -> Self {
        Self { fps: 15, width: 320 }
    }
}

/// Load configuration from a `config.toml` path.
///
/// A missing file yields the stock defaults; a present file is parsed,
/// merged over the defaults via serde, and validated.
pub fn load(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        PipelineConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A fully documented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = PipelineConfig::default();
    format!(
        r#"# wallkit configuration
# All options are optional - the values below are the defaults.

# Root directory holding one subdirectory per category.
wallpaper_dir = "{wallpaper_dir}"

# Where the generated catalog is written.
manifest_path = "{manifest_path}"

# Directory holding demo videos (.mp4/.mov) for GIF conversion.
gif_dir = "{gif_dir}"

# Base URL joined into entry url/thumbnailUrl fields.
base_url = "{base_url}"

# Attribution recorded on every catalog entry.
author = "{author}"
license = "{license}"

[thumbnails]
max_width = {t_w}        # Thumbnails fit within max_width x max_height
max_height = {t_h}
quality = {t_q}           # JPEG quality (0-100)
size_budget = {t_b}      # Warn when a thumbnail exceeds this (bytes)

[images]
quality = {i_q}           # JPEG quality for full-size recompression
size_budget = {i_b}    # Warn when a full image exceeds this (bytes)

[gif]
fps = {g_fps}              # Output frame rate (lower = smaller files)
width = {g_w}            # Output width; height keeps aspect ratio
"#,
        wallpaper_dir = defaults.wallpaper_dir,
        manifest_path = defaults.manifest_path,
        gif_dir = defaults.gif_dir,
        base_url = defaults.base_url,
        author = defaults.author,
        license = defaults.license,
        t_w = defaults.thumbnails.max_width,
        t_h = defaults.thumbnails.max_height,
        t_q = defaults.thumbnails.quality,
        t_b = defaults.thumbnails.size_budget,
        i_q = defaults.images.quality,
        i_b = defaults.images.size_budget,
        g_fps = defaults.gif.fps,
        g_w = defaults.gif.width,
    )
}
