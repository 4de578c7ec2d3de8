//! Directory enumeration shared by all batch commands.
//!
//! The wallpaper tree is exactly two levels deep: the root holds one
//! subdirectory per category, each category holds image files. Every
//! command walks it the same way — categories sorted by name, files sorted
//! by name — so catalog order, listing order, and processing order agree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::naming;

/// Immediate subdirectories of the root, sorted by name.
/// Non-directory entries are skipped.
pub fn category_dirs(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Supported image files in a category, sorted by name, excluding
/// thumbnail-marked files. These are the files that become catalog entries.
pub fn wallpaper_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            naming::is_supported_image(p)
                && p.file_name()
                    .map(|n| !naming::is_thumbnail(&n.to_string_lossy()))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// All `.jpg` files in a category, sorted by name, thumbnails included.
/// The thumbnail and optimize commands operate on JPEGs only.
pub fn jpeg_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("jpg"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Directory name as a category string.
pub fn category_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ============================================================================
// Tree listing
// ============================================================================

/// Snapshot of the wallpaper tree for the `list` command.
#[derive(Debug)]
pub struct TreeListing {
    pub categories: Vec<TreeCategory>,
}

#[derive(Debug)]
pub struct TreeCategory {
    pub name: String,
    pub images: Vec<TreeImage>,
}

#[derive(Debug)]
pub struct TreeImage {
    pub filename: String,
    pub bytes: u64,
    pub has_thumbnail: bool,
}

impl TreeListing {
    /// Total non-thumbnail image count.
    pub fn total_count(&self) -> usize {
        self.categories.iter().map(|c| c.images.len()).sum()
    }

    /// Total size in bytes across all non-thumbnail images.
    pub fn total_bytes(&self) -> u64 {
        self.categories
            .iter()
            .flat_map(|c| c.images.iter())
            .map(|i| i.bytes)
            .sum()
    }
}

impl TreeCategory {
    pub fn bytes(&self) -> u64 {
        self.images.iter().map(|i| i.bytes).sum()
    }
}

/// Walk the tree and collect the data the `list` command displays:
/// per-image size and thumbnail presence, per category.
pub fn tree_listing(root: &Path) -> io::Result<TreeListing> {
    let mut categories = Vec::new();
    for dir in category_dirs(root)? {
        let mut images = Vec::new();
        for image in wallpaper_images(&dir)? {
            let filename = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let bytes = fs::metadata(&image)?.len();
            let has_thumbnail = dir.join(naming::thumbnail_name(&filename)).exists();
            images.push(TreeImage {
                filename,
                bytes,
                has_thumbnail,
            });
        }
        categories.push(TreeCategory {
            name: category_name(&dir),
            images,
        });
    }
    Ok(TreeListing { categories })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn category_dirs_sorted_and_files_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("work")).unwrap();
        fs::create_dir(tmp.path().join("gaming")).unwrap();
        fs::write(tmp.path().join("README.md"), b"docs").unwrap();

        let dirs = category_dirs(tmp.path()).unwrap();
        let names: Vec<String> = dirs.iter().map(|d| category_name(d)).collect();
        assert_eq!(names, vec!["gaming", "work"]);
    }

    #[test]
    fn wallpaper_images_excludes_thumbnails_and_unsupported() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("work");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("b.jpg"), b"fake").unwrap();
        fs::write(dir.join("a.png"), b"fake").unwrap();
        fs::write(dir.join("b_thumb.jpg"), b"fake").unwrap();
        fs::write(dir.join("notes.txt"), b"text").unwrap();

        let files = wallpaper_images(&dir).unwrap();
        let names: Vec<&str> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn jpeg_files_includes_thumbnails() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("work");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a.jpg"), b"fake").unwrap();
        fs::write(dir.join("a_thumb.jpg"), b"fake").unwrap();
        fs::write(dir.join("c.png"), b"fake").unwrap();

        let files = jpeg_files(&dir).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn tree_listing_counts_and_sizes() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        fs::create_dir(&work).unwrap();
        fs::write(work.join("one.jpg"), vec![0u8; 100]).unwrap();
        fs::write(work.join("one_thumb.jpg"), vec![0u8; 10]).unwrap();
        fs::write(work.join("two.jpg"), vec![0u8; 50]).unwrap();

        let listing = tree_listing(tmp.path()).unwrap();
        assert_eq!(listing.total_count(), 2);
        assert_eq!(listing.total_bytes(), 150);
        assert!(listing.categories[0].images[0].has_thumbnail);
        assert!(!listing.categories[0].images[1].has_thumbnail);
    }

    #[test]
    fn empty_category_listed_with_no_images() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("empty")).unwrap();

        let listing = tree_listing(tmp.path()).unwrap();
        assert_eq!(listing.categories.len(), 1);
        assert!(listing.categories[0].images.is_empty());
    }
}
