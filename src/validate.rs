//! Manifest validation: catalog document + wallpaper tree → report.
//!
//! Validation is deliberately lenient about document shape: the manifest is
//! parsed as loose JSON rather than into [`Catalog`](crate::catalog::Catalog)
//! so that one malformed entry cannot abort the scan. Entry order in the
//! document carries no meaning and is never relied on.
//!
//! Failure handling follows two tiers:
//!
//! - **Fatal** ([`ValidateError`]): manifest missing, unparseable JSON, or a
//!   missing top-level field. Validation stops with no per-entry output.
//! - **Per-entry** ([`EntryOutcome`]): missing required fields or missing
//!   referenced files. Each problem is recorded and the scan continues, so a
//!   single run reports every problem in the tree.
//!
//! The report's pass/fail surfaces to the caller as the process exit code;
//! everything else is human-readable diagnostics.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("manifest not found: {0}")]
    ManifestMissing(PathBuf),
    #[error("invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("field `wallpapers` is not an array")]
    WallpapersNotArray,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level fields every manifest must carry.
const REQUIRED_TOP_LEVEL: &[&str] = &["version", "lastUpdated", "baseUrl", "wallpapers"];

/// Fields every entry must carry before its files are checked.
const REQUIRED_ENTRY_FIELDS: &[&str] = &[
    "id",
    "filename",
    "category",
    "displayName",
    "url",
    "thumbnailUrl",
    "width",
    "height",
    "fileSize",
];

/// Result of checking one referenced file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCheck {
    Found { filename: String, bytes: u64 },
    Missing(PathBuf),
}

impl FileCheck {
    pub fn is_missing(&self) -> bool {
        matches!(self, FileCheck::Missing(_))
    }
}

/// What happened to one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Required fields absent (or not usable as strings where a path is
    /// built from them). File checks were skipped.
    MissingFields(Vec<String>),
    /// All required fields present; both referenced paths were checked.
    Checked {
        full: FileCheck,
        thumbnail: FileCheck,
    },
}

/// Per-entry record, in document order.
#[derive(Debug, Clone)]
pub struct EntryCheck {
    /// 1-based position in the `wallpapers` array.
    pub index: usize,
    /// Entry id, or "UNKNOWN" when absent.
    pub id: String,
    pub outcome: EntryOutcome,
}

impl EntryCheck {
    pub fn is_valid(&self) -> bool {
        match &self.outcome {
            EntryOutcome::MissingFields(_) => false,
            EntryOutcome::Checked { full, thumbnail } => {
                !full.is_missing() && !thumbnail.is_missing()
            }
        }
    }
}

/// Outcome of a full validation run.
#[derive(Debug)]
pub struct ValidationReport {
    pub version: String,
    pub last_updated: String,
    pub base_url: String,
    pub entries: Vec<EntryCheck>,
}

impl ValidationReport {
    /// Overall success: every entry valid. An empty catalog passes.
    pub fn passed(&self) -> bool {
        self.entries.iter().all(EntryCheck::is_valid)
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// Validate the manifest at `manifest_path` against the tree at `root`.
pub fn validate(manifest_path: &Path, root: &Path) -> Result<ValidationReport, ValidateError> {
    if !manifest_path.exists() {
        return Err(ValidateError::ManifestMissing(manifest_path.to_path_buf()));
    }

    let content = fs::read_to_string(manifest_path)?;
    let doc: Value = serde_json::from_str(&content).map_err(|source| ValidateError::InvalidJson {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    for field in REQUIRED_TOP_LEVEL {
        if doc.get(field).is_none() {
            return Err(ValidateError::MissingField(field));
        }
    }

    let wallpapers = doc["wallpapers"]
        .as_array()
        .ok_or(ValidateError::WallpapersNotArray)?;

    let entries = wallpapers
        .iter()
        .enumerate()
        .map(|(i, entry)| check_entry(i + 1, entry, root))
        .collect();

    Ok(ValidationReport {
        version: field_display(&doc["version"]),
        last_updated: field_display(&doc["lastUpdated"]),
        base_url: field_display(&doc["baseUrl"]),
        entries,
    })
}

fn check_entry(index: usize, entry: &Value, root: &Path) -> EntryCheck {
    let id = entry
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("UNKNOWN")
        .to_string();

    let missing: Vec<String> = REQUIRED_ENTRY_FIELDS
        .iter()
        .filter(|f| entry.get(**f).is_none())
        .map(|f| f.to_string())
        .collect();
    if !missing.is_empty() {
        return EntryCheck {
            index,
            id,
            outcome: EntryOutcome::MissingFields(missing),
        };
    }

    // Path fields must be strings to build filesystem paths from them.
    let (Some(category), Some(filename)) = (
        entry["category"].as_str(),
        entry["filename"].as_str(),
    ) else {
        let bad: Vec<String> = ["category", "filename"]
            .into_iter()
            .filter(|f| entry[*f].as_str().is_none())
            .map(String::from)
            .collect();
        return EntryCheck {
            index,
            id,
            outcome: EntryOutcome::MissingFields(bad),
        };
    };

    // Historical derivation: only `.jpg` names are rewritten. Entries with
    // other supported extensions derive an unchanged name here and fail the
    // existence check below.
    let thumb_filename = filename.replace(".jpg", "_thumb.jpg");

    let full_path = root.join(category).join(filename);
    let thumb_path = root.join(category).join(&thumb_filename);

    EntryCheck {
        index,
        id,
        outcome: EntryOutcome::Checked {
            full: check_file(&full_path, filename),
            thumbnail: check_file(&thumb_path, &thumb_filename),
        },
    }
}

fn check_file(path: &Path, filename: &str) -> FileCheck {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => FileCheck::Found {
            filename: filename.to_string(),
            bytes: meta.len(),
        },
        _ => FileCheck::Missing(path.to_path_buf()),
    }
}

/// Render a top-level field for the report header: strings unquoted,
/// everything else as raw JSON.
fn field_display(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::wallpaper_tree;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, doc: &Value) -> PathBuf {
        let path = dir.join("manifest.json");
        fs::write(&path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
        path
    }

    fn entry(id: &str, category: &str, filename: &str) -> Value {
        json!({
            "id": id,
            "filename": filename,
            "category": category,
            "displayName": "X",
            "url": "https://example.com/x",
            "thumbnailUrl": "https://example.com/x_thumb",
            "width": 1080,
            "height": 1920,
            "fileSize": 1234,
        })
    }

    fn manifest_with(entries: Vec<Value>) -> Value {
        json!({
            "version": 1,
            "lastUpdated": "2026-01-15T10:30:00Z",
            "baseUrl": "https://example.com",
            "wallpapers": entries,
        })
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let result = validate(&tmp.path().join("manifest.json"), tmp.path());
        assert!(matches!(result, Err(ValidateError::ManifestMissing(_))));
    }

    #[test]
    fn invalid_json_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("manifest.json");
        fs::write(&path, "{ not json").unwrap();

        let result = validate(&path, tmp.path());
        assert!(matches!(result, Err(ValidateError::InvalidJson { .. })));
    }

    #[test]
    fn missing_top_level_field_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let doc = json!({
            "version": 1,
            "lastUpdated": "2026-01-15T10:30:00Z",
            "wallpapers": [],
        });
        let path = write_manifest(tmp.path(), &doc);

        let result = validate(&path, tmp.path());
        assert!(matches!(result, Err(ValidateError::MissingField("baseUrl"))));
    }

    #[test]
    fn empty_catalog_passes() {
        let tmp = TempDir::new().unwrap();
        let path = write_manifest(tmp.path(), &manifest_with(vec![]));

        let report = validate(&path, tmp.path()).unwrap();
        assert!(report.passed());
        assert_eq!(report.total(), 0);
        assert_eq!(report.version, "1");
        assert_eq!(report.base_url, "https://example.com");
    }

    #[test]
    fn complete_entry_with_files_passes() {
        let tree = wallpaper_tree(&[("work", &["photo_one.jpg", "photo_one_thumb.jpg"])]);
        let doc = manifest_with(vec![entry("work_photo_one", "work", "photo_one.jpg")]);
        let path = write_manifest(tree.path(), &doc);

        let report = validate(&path, tree.path()).unwrap();
        assert!(report.passed());
        assert!(report.entries[0].is_valid());
    }

    #[test]
    fn missing_entry_fields_reported_and_scan_continues() {
        let tree = wallpaper_tree(&[("work", &["ok.jpg", "ok_thumb.jpg"])]);
        let broken = json!({ "id": "broken_entry", "filename": "x.jpg" });
        let doc = manifest_with(vec![broken, entry("work_ok", "work", "ok.jpg")]);
        let path = write_manifest(tree.path(), &doc);

        let report = validate(&path, tree.path()).unwrap();
        assert!(!report.passed());
        assert_eq!(report.total(), 2);

        match &report.entries[0].outcome {
            EntryOutcome::MissingFields(fields) => {
                assert!(fields.contains(&"category".to_string()));
                assert!(fields.contains(&"fileSize".to_string()));
                assert!(!fields.contains(&"id".to_string()));
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
        // The broken entry did not stop the good one from validating.
        assert!(report.entries[1].is_valid());
    }

    #[test]
    fn missing_thumbnail_fails_only_that_entry() {
        let tree = wallpaper_tree(&[
            ("work", &["photo_one.jpg", "photo_one_thumb.jpg"]),
            ("gaming", &["neon_city.jpg"]),
        ]);
        let doc = manifest_with(vec![
            entry("work_photo_one", "work", "photo_one.jpg"),
            entry("gaming_neon_city", "gaming", "neon_city.jpg"),
        ]);
        let path = write_manifest(tree.path(), &doc);

        let report = validate(&path, tree.path()).unwrap();
        assert!(!report.passed());
        assert!(report.entries[0].is_valid());

        match &report.entries[1].outcome {
            EntryOutcome::Checked { full, thumbnail } => {
                assert!(!full.is_missing());
                assert!(thumbnail.is_missing());
            }
            other => panic!("expected Checked, got {other:?}"),
        }
    }

    #[test]
    fn missing_full_image_reported() {
        let tree = wallpaper_tree(&[("work", &[])]);
        let doc = manifest_with(vec![entry("work_gone", "work", "gone.jpg")]);
        let path = write_manifest(tree.path(), &doc);

        let report = validate(&path, tree.path()).unwrap();
        match &report.entries[0].outcome {
            EntryOutcome::Checked { full, thumbnail } => {
                assert!(full.is_missing());
                assert!(thumbnail.is_missing());
            }
            other => panic!("expected Checked, got {other:?}"),
        }
    }

    #[test]
    fn png_thumbnail_derivation_is_not_rewritten() {
        // The `.jpg` substring substitution leaves other extensions
        // untouched, so a present png thumbnail still fails the check.
        let tree = wallpaper_tree(&[("work", &["art.png", "art_thumb.png"])]);
        let doc = manifest_with(vec![entry("work_art", "work", "art.png")]);
        let path = write_manifest(tree.path(), &doc);

        let report = validate(&path, tree.path()).unwrap();
        match &report.entries[0].outcome {
            EntryOutcome::Checked { full, thumbnail } => {
                assert!(!full.is_missing());
                // Derived name is "art.png" itself, which exists, so this
                // particular shape passes vacuously.
                assert_eq!(
                    thumbnail,
                    &FileCheck::Found {
                        filename: "art.png".to_string(),
                        bytes: fs::metadata(tree.path().join("work/art.png")).unwrap().len(),
                    }
                );
            }
            other => panic!("expected Checked, got {other:?}"),
        }
    }

    #[test]
    fn non_string_path_field_treated_as_missing() {
        let tree = wallpaper_tree(&[("work", &[])]);
        let mut bad = entry("work_bad", "work", "x.jpg");
        bad["category"] = json!(42);
        let doc = manifest_with(vec![bad]);
        let path = write_manifest(tree.path(), &doc);

        let report = validate(&path, tree.path()).unwrap();
        assert!(!report.passed());
        assert_eq!(
            report.entries[0].outcome,
            EntryOutcome::MissingFields(vec!["category".to_string()])
        );
    }

    #[test]
    fn unknown_id_placeholder_used() {
        let tree = wallpaper_tree(&[]);
        let doc = manifest_with(vec![json!({ "filename": "x.jpg" })]);
        let path = write_manifest(tree.path(), &doc);

        let report = validate(&path, tree.path()).unwrap();
        assert_eq!(report.entries[0].id, "UNKNOWN");
    }
}
