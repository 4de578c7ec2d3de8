//! Batch JPEG recompression for web delivery.
//!
//! Every `.jpg` under the wallpaper root is re-encoded in place: thumbnails
//! at the thumbnail quality, full-size images at the image quality. After
//! writing, the result is compared against its size budget and flagged when
//! it still exceeds it — the file is kept either way, the budget is
//! advisory. Per-file failures are reported and skipped.

use std::path::Path;

use crate::config::PipelineConfig;
use crate::imaging::recompress_jpeg;
use crate::{naming, walk};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizeOutcome {
    /// Re-encoded and within budget.
    Optimized { bytes: u64 },
    /// Re-encoded but still larger than its budget.
    OverBudget { bytes: u64, budget: u64 },
    Failed { detail: String },
}

#[derive(Debug)]
pub struct OptimizeResult {
    pub filename: String,
    pub outcome: OptimizeOutcome,
}

#[derive(Debug)]
pub struct CategoryOptimize {
    pub category: String,
    pub results: Vec<OptimizeResult>,
}

/// Recompress every `.jpg` under `root`, thumbnails and full images alike.
pub fn optimize_all(
    root: &Path,
    config: &PipelineConfig,
) -> std::io::Result<Vec<CategoryOptimize>> {
    let mut categories = Vec::new();

    for dir in walk::category_dirs(root)? {
        let mut results = Vec::new();

        for image in walk::jpeg_files(&dir)? {
            let filename = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let (quality, budget) = if naming::is_thumbnail(&filename) {
                (config.thumbnails.quality, config.thumbnails.size_budget)
            } else {
                (config.images.quality, config.images.size_budget)
            };

            let outcome = match recompress_jpeg(&image, quality) {
                Ok(bytes) if bytes > budget => OptimizeOutcome::OverBudget { bytes, budget },
                Ok(bytes) => OptimizeOutcome::Optimized { bytes },
                Err(err) => OptimizeOutcome::Failed {
                    detail: err.to_string(),
                },
            };

            results.push(OptimizeResult { filename, outcome });
        }

        categories.push(CategoryOptimize {
            category: walk::category_name(&dir),
            results,
        });
    }

    Ok(categories)
}
