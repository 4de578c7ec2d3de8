//! # Wallkit
//!
//! Asset pipeline for a statically-hosted wallpaper collection. The
//! filesystem is the data source: each directory under the wallpaper root is
//! a category, each image inside it is a wallpaper, and everything an app
//! needs to know about the collection is published as one JSON manifest.
//!
//! # Architecture: Manifest as the Contract
//!
//! The repository is consumed over raw HTTPS by clients that never list
//! directories — they fetch `manifest.json` and follow the URLs inside it.
//! Two operations anchor the pipeline:
//!
//! ```text
//! generate   wallpapers/  →  manifest.json   (filesystem → catalog)
//! validate   manifest.json + wallpapers/  →  report (do they still agree?)
//! ```
//!
//! Everything else is grooming around that contract: thumbnail generation,
//! JPEG recompression, demo video → GIF conversion, and a tree listing for
//! humans.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | The manifest wire types (`Catalog`, `WallpaperEntry`) |
//! | [`generate`] | Walks the wallpaper tree and builds the catalog |
//! | [`validate`] | Checks an existing manifest against the files on disk |
//! | [`naming`] | Filename conventions: thumbnail marker, ids, display names |
//! | [`describe`] | Keyword heuristics for descriptions and tags |
//! | [`walk`] | Directory enumeration and the human-readable tree listing |
//! | [`imaging`] | Image operations: dimension probing, thumbnails, recompression |
//! | [`thumbs`] | Batch thumbnail generation over the whole tree |
//! | [`optimize`] | Batch in-place JPEG recompression with size budgets |
//! | [`gif`] | Demo video → GIF conversion via ffmpeg |
//! | [`config`] | `config.toml` loading, defaults, and validation |
//! | [`report`] | CLI output formatting for every command |
//!
//! # Design Decisions
//!
//! ## Deterministic Output
//!
//! Categories and files are visited in sorted order and the timestamp comes
//! through a [`generate::Clock`] capability, so regenerating an unchanged
//! tree with a pinned clock produces a byte-identical manifest. That keeps
//! diffs reviewable and makes the generator trivially testable.
//!
//! ## Capabilities at the Seams
//!
//! The three places the pipeline touches something slow or external —
//! reading image headers ([`imaging::ImageProbe`]), the current time
//! ([`generate::Clock`]), and ffmpeg ([`gif::Transcoder`]) — are traits
//! with mock implementations in tests. Everything in between is plain
//! functions over plain data.
//!
//! ## Warnings vs Errors
//!
//! A missing thumbnail or an unreadable image header degrades the entry
//! (default dimensions, a warning in the output) but never aborts a
//! generation run; the collection should publish even when grooming is
//! behind. Only environmental failures — unreadable directories, unwritable
//! manifest — are errors.

pub mod catalog;
pub mod config;
pub mod describe;
pub mod generate;
pub mod gif;
pub mod imaging;
pub mod naming;
pub mod optimize;
pub mod report;
pub mod thumbs;
pub mod validate;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
