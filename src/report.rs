//! CLI output formatting for every command.
//!
//! Each command has a `format_*` function returning `Vec<String>` so tests
//! can assert on exact lines, and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.
//!
//! Status glyphs follow one convention throughout:
//!
//! ```text
//! ✓  done / exists / passed
//! ⚠  non-fatal warning (missing thumbnail, over budget)
//! ✗  failure
//! ```

use std::collections::HashSet;
use std::path::Path;

use crate::generate::{GenerateResult, GenerateWarning};
use crate::gif::{Conversion, ConvertOutcome};
use crate::optimize::{CategoryOptimize, OptimizeOutcome};
use crate::thumbs::{CategoryThumbs, ThumbOutcome};
use crate::validate::{EntryOutcome, FileCheck, ValidationReport};
use crate::walk::TreeListing;

fn kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

fn mb(bytes: u64) -> String {
    format!("{:.2}MB", bytes as f64 / (1024.0 * 1024.0))
}

// ============================================================================
// Generate
// ============================================================================

/// Format generation output: per-category progress, inline warnings, and a
/// closing summary.
pub fn format_generate_output(result: &GenerateResult, manifest_path: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Generating manifest from wallpaper folder structure...".to_string());
    lines.push(String::new());

    let missing_thumbs: HashSet<(&str, &str)> = result
        .warnings
        .iter()
        .filter_map(|w| match w {
            GenerateWarning::MissingThumbnail { category, filename } => {
                Some((category.as_str(), filename.as_str()))
            }
            _ => None,
        })
        .collect();

    let mut current_category: Option<&str> = None;
    for entry in &result.catalog.wallpapers {
        if current_category != Some(entry.category.as_str()) {
            if current_category.is_some() {
                lines.push(String::new());
            }
            lines.push(format!("Processing category: {}", entry.category));
            current_category = Some(&entry.category);
        }

        if missing_thumbs.contains(&(entry.category.as_str(), entry.filename.as_str())) {
            lines.push(format!("  ⚠ Missing thumbnail for {}", entry.filename));
        }
        lines.push(format!("  ✓ Added: {}", entry.filename));
    }

    for warning in &result.warnings {
        if let GenerateWarning::UnreadableDimensions {
            filename, detail, ..
        } = warning
        {
            lines.push(format!(
                "  ⚠ Could not read dimensions for {filename}: {detail} (using defaults)"
            ));
        }
    }

    lines.push(String::new());
    lines.push("✓ Manifest generated successfully!".to_string());
    lines.push(format!(
        "  Total wallpapers: {}",
        result.catalog.wallpapers.len()
    ));
    lines.push(format!("  Output: {}", manifest_path.display()));
    lines
}

pub fn print_generate_output(result: &GenerateResult, manifest_path: &Path) {
    for line in format_generate_output(result, manifest_path) {
        println!("{line}");
    }
}

// ============================================================================
// Validate
// ============================================================================

/// Format a validation report: header, per-entry checks, verdict.
pub fn format_validate_report(report: &ValidationReport) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Validating manifest...".to_string());
    lines.push(String::new());
    lines.push(format!("✓ Manifest version: {}", report.version));
    lines.push(format!("✓ Last updated: {}", report.last_updated));
    lines.push(format!("✓ Base URL: {}", report.base_url));
    lines.push(format!("✓ Total wallpapers: {}", report.total()));
    lines.push(String::new());

    if report.entries.is_empty() {
        lines.push("⚠ No wallpapers in manifest (this is OK for initial setup)".to_string());
        return lines;
    }

    for entry in &report.entries {
        lines.push(format!("Validating wallpaper {}: {}", entry.index, entry.id));
        match &entry.outcome {
            EntryOutcome::MissingFields(fields) => {
                lines.push(format!("  ✗ Missing fields: {}", fields.join(", ")));
            }
            EntryOutcome::Checked { full, thumbnail } => {
                lines.push(file_check_line(full, "Full size"));
                lines.push(file_check_line(thumbnail, "Thumbnail"));
            }
        }
        lines.push(String::new());
    }

    if report.passed() {
        lines.push("✓ Manifest validation successful!".to_string());
    } else {
        lines.push("✗ Manifest validation failed!".to_string());
    }
    lines
}

fn file_check_line(check: &FileCheck, label: &str) -> String {
    match check {
        FileCheck::Found { filename, bytes } => {
            format!("  ✓ {label} exists: {filename} ({})", kb(*bytes))
        }
        FileCheck::Missing(path) => format!("  ✗ {label} not found: {}", path.display()),
    }
}

pub fn print_validate_report(report: &ValidationReport) {
    for line in format_validate_report(report) {
        println!("{line}");
    }
}

// ============================================================================
// Tree listing
// ============================================================================

/// Format the repository tree with sizes, thumbnail markers, and totals.
pub fn format_tree(listing: &TreeListing) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Wallpaper repository structure".to_string());
    lines.push(String::new());
    lines.push("wallpapers/".to_string());

    for category in &listing.categories {
        if category.images.is_empty() {
            lines.push(format!("├── {}/ (empty)", category.name));
            continue;
        }

        lines.push(format!(
            "├── {}/ ({} wallpapers)",
            category.name,
            category.images.len()
        ));

        for (i, image) in category.images.iter().enumerate() {
            let connector = if i == category.images.len() - 1 {
                "└──"
            } else {
                "├──"
            };
            let thumb = if image.has_thumbnail { "✓" } else { "✗" };
            lines.push(format!(
                "│   {connector} {} ({}) [thumb: {thumb}]",
                image.filename,
                mb(image.bytes)
            ));
        }

        lines.push(format!("│       Subtotal: {}", mb(category.bytes())));
        lines.push("│".to_string());
    }

    let count = listing.total_count();
    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.push(format!("   Total wallpapers: {count}"));
    lines.push(format!("   Total size: {}", mb(listing.total_bytes())));
    if count > 0 {
        lines.push(format!(
            "   Average size: {} per wallpaper",
            mb(listing.total_bytes() / count as u64)
        ));
    }
    lines
}

pub fn print_tree(listing: &TreeListing) {
    for line in format_tree(listing) {
        println!("{line}");
    }
}

// ============================================================================
// Thumbnails
// ============================================================================

pub fn format_thumbs_output(categories: &[CategoryThumbs]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Generating thumbnails for all wallpapers...".to_string());
    lines.push(String::new());

    for category in categories {
        lines.push(format!("Processing category: {}", category.category));
        if category.results.is_empty() {
            lines.push(format!("  No images found in {}", category.category));
        }
        for result in &category.results {
            match &result.outcome {
                ThumbOutcome::Exists => {
                    lines.push(format!("  ✓ Thumbnail already exists: {}", result.thumb_name));
                }
                ThumbOutcome::Generated => {
                    lines.push(format!("  ✓ Generated thumbnail: {}", result.thumb_name));
                }
                ThumbOutcome::Failed { detail } => {
                    lines.push(format!(
                        "  ✗ Error generating thumbnail for {}: {detail}",
                        result.filename
                    ));
                }
            }
        }
        lines.push(String::new());
    }

    lines.push("✓ Thumbnail generation complete!".to_string());
    lines
}

pub fn print_thumbs_output(categories: &[CategoryThumbs]) {
    for line in format_thumbs_output(categories) {
        println!("{line}");
    }
}

// ============================================================================
// Optimize
// ============================================================================

pub fn format_optimize_output(categories: &[CategoryOptimize]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Optimizing all wallpaper images...".to_string());
    lines.push(String::new());

    for category in categories {
        lines.push(format!("Optimizing category: {}", category.category));
        if category.results.is_empty() {
            lines.push(format!("  No images found in {}", category.category));
        }
        for result in &category.results {
            match &result.outcome {
                OptimizeOutcome::Optimized { bytes } => {
                    lines.push(format!("  ✓ Optimized: {} ({})", result.filename, kb(*bytes)));
                }
                OptimizeOutcome::OverBudget { bytes, budget } => {
                    lines.push(format!(
                        "  ⚠ {} is {} (exceeds {})",
                        result.filename,
                        kb(*bytes),
                        kb(*budget)
                    ));
                }
                OptimizeOutcome::Failed { detail } => {
                    lines.push(format!(
                        "  ✗ Error optimizing {}: {detail}",
                        result.filename
                    ));
                }
            }
        }
        lines.push(String::new());
    }

    lines.push("✓ Image optimization complete!".to_string());
    lines
}

pub fn print_optimize_output(categories: &[CategoryOptimize]) {
    for line in format_optimize_output(categories) {
        println!("{line}");
    }
}

// ============================================================================
// GIF conversion
// ============================================================================

pub fn format_gif_output(conversions: &[Conversion]) -> Vec<String> {
    let mut lines = Vec::new();

    if conversions.is_empty() {
        lines.push("No video files found".to_string());
        return lines;
    }

    lines.push(format!("Found {} video file(s)", conversions.len()));
    lines.push(String::new());

    for conversion in conversions {
        match &conversion.outcome {
            ConvertOutcome::Skipped => {
                lines.push(format!("✓ GIF already exists: {}", conversion.gif));
            }
            ConvertOutcome::Converted {
                video_bytes,
                gif_bytes,
            } => {
                lines.push(format!("✓ Created: {}", conversion.gif));
                lines.push(format!("  Video size: {}", mb(*video_bytes)));
                lines.push(format!("  GIF size: {}", mb(*gif_bytes)));
                if *video_bytes > 0 {
                    let saved = (1.0 - *gif_bytes as f64 / *video_bytes as f64) * 100.0;
                    lines.push(format!("  Compression: {saved:.1}%"));
                }
            }
            ConvertOutcome::Failed { detail } => {
                lines.push(format!("✗ Error converting {}: {detail}", conversion.video));
            }
        }
        lines.push(String::new());
    }

    lines.push("✓ Conversion complete!".to_string());
    lines
}

pub fn print_gif_output(conversions: &[Conversion]) {
    for line in format_gif_output(conversions) {
        println!("{line}");
    }
}
