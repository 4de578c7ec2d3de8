//! Image operations: dimension probing, thumbnail generation, and JPEG
//! recompression. Pure Rust via the `image` crate — no external tools.
//!
//! Dimension probing sits behind the [`ImageProbe`] trait so the manifest
//! generator can run against a mock in tests and degrade gracefully in
//! production: a probe failure is never fatal, the generator substitutes
//! [`DEFAULT_DIMENSIONS`] and records a warning.

use image::imageops::FilterType;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

use crate::config::ThumbnailSettings;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Substituted when dimensions cannot be read: portrait phone wallpaper.
pub const DEFAULT_DIMENSIONS: (u32, u32) = (1080, 1920);

/// Capability for reading pixel dimensions from an image file.
pub trait ImageProbe {
    /// Returns (width, height) in pixels.
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), ImagingError>;
}

/// Production probe backed by `image::image_dimensions`, which reads
/// headers only and never decodes pixel data.
pub struct CrateProbe;

impl ImageProbe for CrateProbe {
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), ImagingError> {
        Ok(image::image_dimensions(path)?)
    }
}

/// Generate a thumbnail: decode, shrink to fit within the configured
/// bounds (never upscale), and encode as JPEG at the configured quality.
pub fn write_thumbnail(
    source: &Path,
    dest: &Path,
    settings: &ThumbnailSettings,
) -> Result<(), ImagingError> {
    let img = image::open(source)?;
    let img = if img.width() > settings.max_width || img.height() > settings.max_height {
        img.resize(settings.max_width, settings.max_height, FilterType::Lanczos3)
    } else {
        img
    };
    save_jpeg(&img.to_rgb8(), dest, settings.quality)
}

/// Re-encode a JPEG in place at the given quality. Returns the resulting
/// file size in bytes.
pub fn recompress_jpeg(path: &Path, quality: u8) -> Result<u64, ImagingError> {
    // Fully decoded before the destination is opened for writing.
    let rgb = image::open(path)?.to_rgb8();
    save_jpeg(&rgb, path, quality)?;
    Ok(std::fs::metadata(path)?.len())
}

fn save_jpeg(rgb: &image::RgbImage, dest: &Path, quality: u8) -> Result<(), ImagingError> {
    let file = File::create(dest)?;
    let mut writer = BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, quality);
    rgb.write_with_encoder(encoder)?;
    Ok(())
}
