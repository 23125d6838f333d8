//! FFmpeg execution adapter
//!
//! Clears a container's title tag with a stream-copy remux. The remux goes
//! into a temporary sibling file which only replaces the original, via an
//! atomic rename, after it has been checked; any earlier failure or crash
//! leaves the original untouched and the temporary file is removed on drop.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempPath;
use tracing::{debug, info};

use crate::adapters::process_runner::CommandRunner;
use crate::domain::errors::*;
use crate::ports::*;

/// FFmpeg-based title scrubber
pub struct FfmpegTitleScrubber {
    ffmpeg: CommandRunner,
    ffprobe: CommandRunner,
}

impl FfmpegTitleScrubber {
    /// Create a scrubber; `ffprobe` is used to check the remuxed file
    pub fn new(ffmpeg: impl Into<PathBuf>, ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: CommandRunner::new(ffmpeg),
            ffprobe: CommandRunner::new(ffprobe),
        }
    }

    /// Create the temporary output next to `video_path`, keeping its extension
    /// so ffmpeg picks the same container format
    fn temp_sibling(video_path: &Path) -> DomainResult<TempPath> {
        let dir = video_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let suffix = video_path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let file = tempfile::Builder::new()
            .prefix(".title-scrub-")
            .suffix(&suffix)
            .tempfile_in(dir)?;
        Ok(file.into_temp_path())
    }

    fn remux(&self, source: &Path, target: &Path) -> DomainResult<()> {
        let args = remux_args(source, target);
        let output = self.ffmpeg.run(&args).map_err(|e| {
            DomainError::RemuxFailed(format!(
                "could not run {}: {}",
                self.ffmpeg.program().display(),
                e
            ))
        })?;

        if !output.success {
            return Err(DomainError::RemuxFailed(format!(
                "{} on {}: {}",
                self.ffmpeg.program().display(),
                source.display(),
                output.failure_summary()
            )));
        }
        Ok(())
    }

    /// Reject empty or unreadable remux output before it replaces anything
    fn verify(&self, remuxed: &Path) -> DomainResult<()> {
        let size = fs::metadata(remuxed)?.len();
        if size == 0 {
            return Err(DomainError::RemuxFailed(format!(
                "{} produced an empty file",
                self.ffmpeg.program().display()
            )));
        }

        let args = [
            OsStr::new("-v"),
            OsStr::new("error"),
            OsStr::new("-show_format"),
            OsStr::new("-print_format"),
            OsStr::new("json"),
            remuxed.as_os_str(),
        ];
        let output = self.ffprobe.run(args).map_err(|e| {
            DomainError::RemuxFailed(format!(
                "could not run {} to verify output: {}",
                self.ffprobe.program().display(),
                e
            ))
        })?;
        if !output.success {
            return Err(DomainError::RemuxFailed(format!(
                "remuxed file is unreadable: {}",
                output.failure_summary()
            )));
        }

        debug!(bytes = size, "Remuxed file verified");
        Ok(())
    }
}

impl TitleScrubPort for FfmpegTitleScrubber {
    fn strip_title(&self, video_path: &Path) -> DomainResult<()> {
        info!(video = %video_path.display(), "Clearing embedded title");

        let temp = Self::temp_sibling(video_path)?;
        self.remux(video_path, &temp)?;
        self.verify(&temp)?;

        let permissions = fs::metadata(video_path)?.permissions();
        fs::set_permissions(&temp, permissions)?;

        temp.persist(video_path)
            .map_err(|e| DomainError::Io(e.error))?;
        Ok(())
    }
}

/// Arguments for a stream-copy remux with the title cleared.
///
/// Data streams are left out: chapter text tracks show up as `bin_data`,
/// which mp4 and matroska muxers refuse. Chapters travel via `-map_chapters`.
pub fn remux_args(source: &Path, target: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-v", "error", "-y", "-i"]
        .iter()
        .map(OsString::from)
        .collect();
    args.push(source.as_os_str().to_os_string());
    args.extend(
        [
            "-map",
            "0",
            "-map",
            "-0:d",
            "-map_metadata",
            "0",
            "-map_chapters",
            "0",
            "-metadata",
            "title=",
            "-c",
            "copy",
        ]
        .iter()
        .map(OsString::from),
    );
    args.push(target.as_os_str().to_os_string());
    args
}
