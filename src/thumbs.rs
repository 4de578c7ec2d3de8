//! Batch thumbnail generation.
//!
//! Walks every category and produces a `{stem}_thumb.jpg` next to each
//! full-size `.jpg` that does not already have one. Existing thumbnails are
//! left untouched, so re-running is cheap and idempotent. A file that fails
//! to decode or encode is reported and skipped; the batch continues.

use std::path::Path;

use crate::config::ThumbnailSettings;
use crate::imaging::write_thumbnail;
use crate::{naming, walk};

/// What happened to one candidate image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbOutcome {
    /// Thumbnail already present; nothing done.
    Exists,
    Generated,
    Failed { detail: String },
}

#[derive(Debug)]
pub struct ThumbResult {
    pub filename: String,
    pub thumb_name: String,
    pub outcome: ThumbOutcome,
}

#[derive(Debug)]
pub struct CategoryThumbs {
    pub category: String,
    pub results: Vec<ThumbResult>,
}

/// Generate thumbnails for every `.jpg` wallpaper under `root`.
///
/// Only enumeration errors are fatal; per-file failures are recorded in the
/// returned results.
pub fn generate_all(
    root: &Path,
    settings: &ThumbnailSettings,
) -> std::io::Result<Vec<CategoryThumbs>> {
    let mut categories = Vec::new();

    for dir in walk::category_dirs(root)? {
        let mut results = Vec::new();

        for image in walk::jpeg_files(&dir)? {
            let filename = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if naming::is_thumbnail(&filename) {
                continue;
            }

            let thumb_name = naming::thumbnail_name(&filename);
            let thumb_path = dir.join(&thumb_name);

            let outcome = if thumb_path.exists() {
                ThumbOutcome::Exists
            } else {
                match write_thumbnail(&image, &thumb_path, settings) {
                    Ok(()) => ThumbOutcome::Generated,
                    Err(err) => ThumbOutcome::Failed {
                        detail: err.to_string(),
                    },
                }
            };

            results.push(ThumbResult {
                filename,
                thumb_name,
                outcome,
            });
        }

        categories.push(CategoryThumbs {
            category: walk::category_name(&dir),
            results,
        });
    }

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 120, 40]));
        img.save(path).unwrap();
    }

    #[test]
    fn generates_missing_thumbnails() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        fs::create_dir(&work).unwrap();
        write_test_jpeg(&work.join("photo.jpg"), 400, 712);

        let categories = generate_all(tmp.path(), &ThumbnailSettings::default()).unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].results[0].outcome, ThumbOutcome::Generated);
        assert!(work.join("photo_thumb.jpg").exists());
    }

    #[test]
    fn existing_thumbnails_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        fs::create_dir(&work).unwrap();
        write_test_jpeg(&work.join("photo.jpg"), 100, 100);
        fs::write(work.join("photo_thumb.jpg"), b"existing").unwrap();

        let categories = generate_all(tmp.path(), &ThumbnailSettings::default()).unwrap();

        assert_eq!(categories[0].results[0].outcome, ThumbOutcome::Exists);
        // Untouched.
        assert_eq!(
            fs::read(work.join("photo_thumb.jpg")).unwrap(),
            b"existing"
        );
    }

    #[test]
    fn undecodable_file_reported_and_batch_continues() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        fs::create_dir(&work).unwrap();
        fs::write(work.join("broken.jpg"), b"not an image").unwrap();
        write_test_jpeg(&work.join("good.jpg"), 100, 100);

        let categories = generate_all(tmp.path(), &ThumbnailSettings::default()).unwrap();

        let results = &categories[0].results;
        assert!(matches!(results[0].outcome, ThumbOutcome::Failed { .. }));
        assert_eq!(results[1].outcome, ThumbOutcome::Generated);
    }

    #[test]
    fn thumbnail_files_are_not_candidates() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        fs::create_dir(&work).unwrap();
        write_test_jpeg(&work.join("photo.jpg"), 100, 100);
        write_test_jpeg(&work.join("photo_thumb.jpg"), 50, 50);

        let categories = generate_all(tmp.path(), &ThumbnailSettings::default()).unwrap();

        assert_eq!(categories[0].results.len(), 1);
        // No photo_thumb_thumb.jpg produced.
        assert!(!work.join("photo_thumb_thumb.jpg").exists());
    }
}
