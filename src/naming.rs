//! Centralized filename conventions for the wallpaper tree.
//!
//! All commands share the same conventions:
//! - Supported image extensions: `.jpg`, `.jpeg`, `.png`, `.webp`
//! - A thumbnail for `name.ext` lives at `name_thumb.ext` in the same
//!   directory; any filename containing `_thumb` is treated as a thumbnail
//!   and excluded from the catalog.
//! - Display names come from the stem with underscores as word separators:
//!   `neon_city.jpg` → "Neon City".
//! - Entry ids are `{category}_{stem}`: `gaming/neon_city.jpg` →
//!   `gaming_neon_city`.

use std::path::Path;

/// Substring that marks a file as a thumbnail.
pub const THUMB_MARKER: &str = "_thumb";

/// Extensions eligible for catalog entries (lowercase, no dot).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Whether a path is a regular file with a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Whether a filename is thumbnail-marked.
pub fn is_thumbnail(filename: &str) -> bool {
    filename.contains(THUMB_MARKER)
}

/// Derive the expected thumbnail filename: stem + marker + original extension.
///
/// `photo_one.jpg` → `photo_one_thumb.jpg`
pub fn thumbnail_name(filename: &str) -> String {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match path.extension() {
        Some(ext) => format!("{stem}{THUMB_MARKER}.{}", ext.to_string_lossy()),
        None => format!("{stem}{THUMB_MARKER}"),
    }
}

/// Filename stem, lowercased. Both description and tag inference match
/// keywords against this form.
pub fn lowercase_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Human-readable display name: strip the extension, title-case each
/// underscore-separated word.
///
/// `misty_mountain.jpg` → "Misty Mountain", `NEON_city.png` → "Neon City"
pub fn display_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Catalog id for an image: `{category}_{stem}`.
pub fn entry_id(category: &str, filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{category}_{stem}")
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
