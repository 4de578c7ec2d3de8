//! Serialized catalog types — the data contract between the generator and
//! the validator.
//!
//! The catalog (`manifest.json`) is a derived, regenerable cache of the
//! wallpaper directory tree. The filesystem is the source of truth: the
//! generator rebuilds the document from scratch on every run, so hand edits
//! to the file do not survive regeneration.
//!
//! Field names on the wire are camelCase to match the published manifest
//! format consumed by the mobile app.

use serde::{Deserialize, Serialize};

/// Current manifest format version.
pub const CATALOG_VERSION: u32 = 1;

/// The top-level manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub version: u32,
    /// UTC generation time, `YYYY-MM-DDTHH:MM:SSZ`.
    pub last_updated: String,
    /// Root URL that `url`/`thumbnailUrl` fields are joined against.
    pub base_url: String,
    /// One entry per non-thumbnail image, in category/filename walk order.
    /// The order is a side effect of generation and carries no guarantee;
    /// consumers must not depend on it.
    pub wallpapers: Vec<WallpaperEntry>,
}

/// One catalog record describing one image asset and its derived metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperEntry {
    /// `{category}_{stem}` — unique across the catalog for distinct
    /// (category, stem) pairs.
    pub id: String,
    pub filename: String,
    /// Name of the containing directory under the wallpaper root.
    pub category: String,
    /// Human-readable name derived from the filename.
    pub display_name: String,
    /// Derived from category/filename heuristics, see [`crate::describe`].
    pub description: String,
    pub url: String,
    pub thumbnail_url: String,
    pub width: u32,
    pub height: u32,
    /// Size in bytes at generation time.
    pub file_size: u64,
    /// Always includes the category; filename keywords may add more.
    pub tags: Vec<String>,
    pub author: String,
    pub license: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> WallpaperEntry {
        WallpaperEntry {
            id: "work_photo_one".to_string(),
            filename: "photo_one.jpg".to_string(),
            category: "work".to_string(),
            display_name: "Photo One".to_string(),
            description: "Professional wallpaper for focused work sessions".to_string(),
            url: "https://example.com/wallpapers/work/photo_one.jpg".to_string(),
            thumbnail_url: "https://example.com/wallpapers/work/photo_one_thumb.jpg".to_string(),
            width: 1080,
            height: 1920,
            file_size: 1234,
            tags: vec!["work".to_string()],
            author: "Abdulmujeeb Aliu".to_string(),
            license: "CC0".to_string(),
        }
    }

    #[test]
    fn wire_fields_are_camel_case() {
        let json = serde_json::to_value(sample_entry()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("displayName"));
        assert!(obj.contains_key("thumbnailUrl"));
        assert!(obj.contains_key("fileSize"));
        assert!(!obj.contains_key("display_name"));
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let catalog = Catalog {
            version: CATALOG_VERSION,
            last_updated: "2026-01-15T10:30:00Z".to_string(),
            base_url: "https://example.com".to_string(),
            wallpapers: vec![sample_entry()],
        };
        let json = serde_json::to_string_pretty(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.wallpapers.len(), 1);
        assert_eq!(parsed.wallpapers[0].id, "work_photo_one");
    }
}
