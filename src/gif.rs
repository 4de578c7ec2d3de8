//! Demo video → GIF conversion.
//!
//! The catalog pipeline never depends on this module; it only shares the
//! repository layout. Conversion is delegated to a [`Transcoder`]
//! capability so the batch driver can be tested without ffmpeg installed.
//!
//! The production transcoder shells out to ffmpeg with the two-pass palette
//! pipeline: pass one generates an adaptive color palette
//! (`palettegen=stats_mode=diff`), pass two renders the GIF against it with
//! bayer dithering. The palette temp file is removed afterwards, and a
//! failed conversion removes its partial GIF so re-running picks the file
//! up again.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

use crate::config::GifSettings;

#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("ffmpeg is not installed or not on PATH")]
    FfmpegMissing,
    #[error("directory not found: {0}")]
    DirMissing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ffmpeg exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },
}

/// Capability for converting one video file to a GIF.
pub trait Transcoder {
    /// Whether the underlying tool is usable at all. Checked once before a
    /// batch; a negative answer aborts with installation guidance.
    fn is_available(&self) -> bool;

    /// Convert `video` to `gif`. Implementations clean up their own
    /// temporary and partial outputs on failure.
    fn transcode(&self, video: &Path, gif: &Path, settings: &GifSettings)
    -> Result<(), TranscodeError>;
}

/// Production transcoder shelling out to `ffmpeg`.
pub struct FfmpegTranscoder;

impl Transcoder for FfmpegTranscoder {
    fn is_available(&self) -> bool {
        Command::new("ffmpeg")
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn transcode(
        &self,
        video: &Path,
        gif: &Path,
        settings: &GifSettings,
    ) -> Result<(), TranscodeError> {
        let palette = video.with_file_name("palette.png");
        let result = two_pass(video, &palette, gif, settings);

        if palette.exists() {
            let _ = fs::remove_file(&palette);
        }
        if result.is_err() && gif.exists() {
            let _ = fs::remove_file(gif);
        }
        result
    }
}

fn two_pass(
    video: &Path,
    palette: &Path,
    gif: &Path,
    settings: &GifSettings,
) -> Result<(), TranscodeError> {
    let scale = format!(
        "fps={},scale={}:-1:flags=lanczos",
        settings.fps, settings.width
    );
    let video_arg = video.to_string_lossy();
    let palette_arg = palette.to_string_lossy();
    let gif_arg = gif.to_string_lossy();

    let palettegen = format!("{scale},palettegen=stats_mode=diff");
    run_ffmpeg(&[
        "-i",
        video_arg.as_ref(),
        "-vf",
        &palettegen,
        "-y",
        palette_arg.as_ref(),
    ])?;

    let paletteuse = format!(
        "{scale} [x]; [x][1:v] paletteuse=dither=bayer:bayer_scale=5:diff_mode=rectangle"
    );
    run_ffmpeg(&[
        "-i",
        video_arg.as_ref(),
        "-i",
        palette_arg.as_ref(),
        "-lavfi",
        &paletteuse,
        "-y",
        gif_arg.as_ref(),
    ])
}

fn run_ffmpeg(args: &[&str]) -> Result<(), TranscodeError> {
    let output = Command::new("ffmpeg").args(args).output()?;
    if output.status.success() {
        Ok(())
    } else {
        Err(TranscodeError::CommandFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Outcome of one video in a conversion batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// The GIF already exists; nothing done.
    Skipped,
    Converted { video_bytes: u64, gif_bytes: u64 },
    Failed { detail: String },
}

#[derive(Debug)]
pub struct Conversion {
    pub video: String,
    pub gif: String,
    pub outcome: ConvertOutcome,
}

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov"];

/// Convert every `.mp4`/`.mov` in `dir` to a sibling `.gif`.
///
/// Aborts up front when the transcoder is unavailable or the directory does
/// not exist; individual conversion failures are recorded and the batch
/// continues.
pub fn convert_all(
    dir: &Path,
    settings: &GifSettings,
    transcoder: &impl Transcoder,
) -> Result<Vec<Conversion>, TranscodeError> {
    if !transcoder.is_available() {
        return Err(TranscodeError::FfmpegMissing);
    }
    if !dir.is_dir() {
        return Err(TranscodeError::DirMissing(dir.to_path_buf()));
    }

    let mut videos: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| {
                        let ext = e.to_string_lossy().to_lowercase();
                        VIDEO_EXTENSIONS.contains(&ext.as_str())
                    })
                    .unwrap_or(false)
        })
        .collect();
    videos.sort();

    let mut conversions = Vec::new();
    for video in &videos {
        let gif = video.with_extension("gif");
        let video_name = video
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let gif_name = gif
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let outcome = if gif.exists() {
            ConvertOutcome::Skipped
        } else {
            match transcoder.transcode(video, &gif, settings) {
                Ok(()) => ConvertOutcome::Converted {
                    video_bytes: fs::metadata(video)?.len(),
                    gif_bytes: fs::metadata(&gif)?.len(),
                },
                Err(err) => ConvertOutcome::Failed {
                    detail: err.to_string(),
                },
            }
        };

        conversions.push(Conversion {
            video: video_name,
            gif: gif_name,
            outcome,
        });
    }

    Ok(conversions)
}
