//! Manifest generation: wallpaper tree → [`Catalog`].
//!
//! The generator walks categories and files in sorted order, derives one
//! [`WallpaperEntry`] per non-thumbnail image, and wraps the result in a
//! catalog stamped with the current UTC time. The document is built fully
//! in memory; [`write_catalog`] then performs the single overwriting write,
//! so an interrupted run leaves no partial manifest behind.
//!
//! Two capabilities are injected rather than reached for directly:
//!
//! - [`ImageProbe`] for pixel dimensions — probe failure substitutes
//!   [`DEFAULT_DIMENSIONS`](crate::imaging::DEFAULT_DIMENSIONS) and records
//!   a warning, never aborting the run.
//! - [`Clock`] for the `lastUpdated` stamp — tests freeze it so repeated
//!   runs over an unchanged tree produce byte-identical output.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::catalog::{CATALOG_VERSION, Catalog, WallpaperEntry};
use crate::config::PipelineConfig;
use crate::imaging::{DEFAULT_DIMENSIONS, ImageProbe};
use crate::{describe, naming, walk};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of the `lastUpdated` timestamp.
pub trait Clock {
    /// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
    fn now_utc(&self) -> String;
}

/// Wall-clock implementation used by the CLI.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> String {
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

/// Non-fatal conditions observed during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateWarning {
    /// The expected sibling thumbnail does not exist. The entry is still
    /// produced; the validator will flag the gap.
    MissingThumbnail { category: String, filename: String },
    /// Pixel dimensions could not be read; defaults were substituted.
    UnreadableDimensions {
        category: String,
        filename: String,
        detail: String,
    },
}

/// Output of a generation run: the catalog plus everything worth telling
/// the user about.
#[derive(Debug)]
pub struct GenerateResult {
    pub catalog: Catalog,
    pub warnings: Vec<GenerateWarning>,
}

/// Walk `root` and build a catalog.
pub fn generate(
    root: &Path,
    config: &PipelineConfig,
    probe: &impl ImageProbe,
    clock: &impl Clock,
) -> Result<GenerateResult, GenerateError> {
    let mut wallpapers = Vec::new();
    let mut warnings = Vec::new();

    for dir in walk::category_dirs(root)? {
        let category = walk::category_name(&dir);

        for image in walk::wallpaper_images(&dir)? {
            let filename = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let thumb_name = naming::thumbnail_name(&filename);
            if !dir.join(&thumb_name).exists() {
                warnings.push(GenerateWarning::MissingThumbnail {
                    category: category.clone(),
                    filename: filename.clone(),
                });
            }

            let file_size = fs::metadata(&image)?.len();

            let (width, height) = match probe.dimensions(&image) {
                Ok(dims) => dims,
                Err(err) => {
                    warnings.push(GenerateWarning::UnreadableDimensions {
                        category: category.clone(),
                        filename: filename.clone(),
                        detail: err.to_string(),
                    });
                    DEFAULT_DIMENSIONS
                }
            };

            wallpapers.push(WallpaperEntry {
                id: naming::entry_id(&category, &filename),
                display_name: naming::display_name(&filename),
                description: describe::description(&filename, &category),
                tags: describe::tags(&filename, &category),
                url: format!(
                    "{}/wallpapers/{}/{}",
                    config.base_url, category, filename
                ),
                thumbnail_url: format!(
                    "{}/wallpapers/{}/{}",
                    config.base_url, category, thumb_name
                ),
                filename,
                category: category.clone(),
                width,
                height,
                file_size,
                author: config.author.clone(),
                license: config.license.clone(),
            });
        }
    }

    Ok(GenerateResult {
        catalog: Catalog {
            version: CATALOG_VERSION,
            last_updated: clock.now_utc(),
            base_url: config.base_url.clone(),
            wallpapers,
        },
        warnings,
    })
}

/// Serialize the catalog as 2-space-indented JSON and overwrite the
/// manifest file in one write.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<(), GenerateError> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
