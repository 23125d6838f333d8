// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::rules;

/// A timestamp as reported by the media prober.
///
/// The prober's text is kept verbatim because it is written back into the
/// `start-time=`/`stop-time=` options; the parsed value is only used for
/// arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeTime {
    text: String,
    seconds: f64,
}

impl ProbeTime {
    /// Parse a decimal-seconds string. Returns `None` for non-numeric or
    /// non-finite input.
    pub fn parse(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let seconds = text.trim().parse::<f64>().ok()?;
        if !seconds.is_finite() {
            return None;
        }
        Some(Self { text, seconds })
    }

    /// Build from a value that has no original textual form
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            text: seconds.to_string(),
            seconds,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }
}

impl fmt::Display for ProbeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One chapter of a video: a named time range
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterRecord {
    pub start: ProbeTime,
    pub end: ProbeTime,
    pub title: String,
}

impl ChapterRecord {
    pub fn new(start: ProbeTime, end: ProbeTime, title: impl Into<String>) -> Self {
        Self {
            start,
            end,
            title: title.into(),
        }
    }

    /// Exact length in seconds
    pub fn duration(&self) -> f64 {
        self.end.seconds() - self.start.seconds()
    }

    /// Length rounded to whole seconds, as written into `<duration>`
    pub fn rounded_duration(&self) -> u64 {
        rules::round_duration(self.duration())
    }

    /// `MM:SS` form of the rounded length, as written into `<annotation>`
    pub fn annotation(&self) -> String {
        rules::format_annotation(self.rounded_duration())
    }
}

/// Request for building a playlist out of a video's chapters
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub video_path: PathBuf,
    /// Group tracks under collapsible nodes instead of scrubbing the title
    pub tree: bool,
}

impl BuildRequest {
    pub fn new(video_path: impl Into<PathBuf>, tree: bool) -> Self {
        Self {
            video_path: video_path.into(),
            tree,
        }
    }
}

/// Outcome of a playlist build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub title: String,
    pub track_count: usize,
    pub title_scrubbed: bool,
}

/// Why a path handed to the patcher was not processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    NotPlaylist,
}

/// Outcome of a multi-file patch run
#[derive(Debug, Default)]
pub struct PatchReport {
    /// Files written, one per input that needed changes
    pub written: Vec<PathBuf>,
    /// Inputs that were already patched
    pub unchanged: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    pub failed: Vec<(PathBuf, crate::domain::errors::DomainError)>,
}

impl PatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub(crate) fn skip(&mut self, path: &Path, reason: SkipReason) {
        self.skipped.push((path.to_path_buf(), reason));
    }
}
