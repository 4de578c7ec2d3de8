//! Shared helpers for unit tests.

use tempfile::TempDir;

use crate::catalog::{Catalog, WallpaperEntry};
use crate::generate::Clock;

/// Build a temporary wallpaper tree: one directory per category, one fake
/// image file per listed filename. Contents are not decodable images, which
/// is fine for anything driven through a mock probe.
pub fn wallpaper_tree(categories: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (category, files) in categories {
        let dir = tmp.path().join(category);
        std::fs::create_dir(&dir).unwrap();
        for file in *files {
            std::fs::write(dir.join(file), b"fake image").unwrap();
        }
    }
    tmp
}

/// Look up a catalog entry by id, panicking with the available ids when it
/// is absent.
pub fn find_entry<'a>(catalog: &'a Catalog, id: &str) -> &'a WallpaperEntry {
    catalog.wallpapers.iter().find(|w| w.id == id).unwrap_or_else(|| {
        let available: Vec<&str> = catalog.wallpapers.iter().map(|w| w.id.as_str()).collect();
        panic!("no entry with id {id:?}, available: {available:?}");
    })
}

/// Clock pinned to a fixed instant so generated manifests are byte-stable.
pub struct FrozenClock(pub &'static str);

impl Default for FrozenClock {
    fn default() -> Self {
        FrozenClock("2026-01-15T10:30:00Z")
    }
}

impl Clock for FrozenClock {
    fn now_utc(&self) -> String {
        self.0.to_string()
    }
}
