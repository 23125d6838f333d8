//! FFprobe adapter for chapter and title lookup
//!
//! Runs `ffprobe -print_format json` and maps its output onto domain types.
//! Parsing is kept separate from execution so it can be tested on canned
//! JSON.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::adapters::process_runner::CommandRunner;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FfprobeAdapter {
    runner: CommandRunner,
}

impl FfprobeAdapter {
    /// Create new FFprobe adapter for the given executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            runner: CommandRunner::new(program),
        }
    }

    /// Run ffprobe with `-show_<section>` and return raw JSON
    fn probe_json(&self, video_path: &Path, section: &str) -> DomainResult<Vec<u8>> {
        let show = format!("-show_{}", section);
        let args = [
            OsStr::new("-v"),
            OsStr::new("quiet"),
            OsStr::new(&show),
            OsStr::new("-print_format"),
            OsStr::new("json"),
            video_path.as_os_str(),
        ];
        let output = self.runner.run(args).map_err(|e| {
            DomainError::ProbeFailed(format!(
                "could not run {}: {}",
                self.runner.program().display(),
                e
            ))
        })?;

        if !output.success {
            return Err(DomainError::ProbeFailed(format!(
                "{} on {}: {}",
                self.runner.program().display(),
                video_path.display(),
                output.failure_summary()
            )));
        }

        Ok(output.stdout)
    }
}

impl MediaProbePort for FfprobeAdapter {
    fn chapters(&self, video_path: &Path) -> DomainResult<Vec<ChapterRecord>> {
        let json = self.probe_json(video_path, "chapters")?;
        let chapters = parse_chapters(&json, video_path)?;
        debug!(count = chapters.len(), "Probed chapters");
        Ok(chapters)
    }

    fn title(&self, video_path: &Path) -> DomainResult<Option<String>> {
        let json = self.probe_json(video_path, "format")?;
        parse_title(&json, video_path)
    }
}

#[derive(Debug, Deserialize)]
struct ChaptersOutput {
    chapters: Option<Vec<RawChapter>>,
}

#[derive(Debug, Deserialize)]
struct RawChapter {
    start_time: Option<RawTime>,
    end_time: Option<RawTime>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// ffprobe prints times as strings; tolerate bare numbers too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTime {
    Text(String),
    Number(serde_json::Number),
}

impl RawTime {
    fn into_text(self) -> String {
        match self {
            RawTime::Text(text) => text,
            RawTime::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FormatOutput {
    format: Option<RawFormat>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// Tag lookup; an exact key wins, otherwise case is ignored (Matroska files
/// often report `TITLE`). Among several case variants the smallest key wins.
fn tag<'a>(tags: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    if let Some(value) = tags.get(key) {
        return Some(value.as_str());
    }
    tags.iter()
        .filter(|(k, _)| k.eq_ignore_ascii_case(key))
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, v)| v.as_str())
}

/// Parse `ffprobe -show_chapters -print_format json` output
pub fn parse_chapters(json: &[u8], video_path: &Path) -> DomainResult<Vec<ChapterRecord>> {
    let path = video_path.display().to_string();
    let output: ChaptersOutput = serde_json::from_slice(json)
        .map_err(|e| DomainError::ProbeFailed(format!("unreadable ffprobe output for {}: {}", path, e)))?;

    let raw_chapters = output
        .chapters
        .ok_or_else(|| DomainError::missing(&path, "chapters"))?;
    if raw_chapters.is_empty() {
        return Err(DomainError::missing(&path, "chapters (none found)"));
    }

    raw_chapters
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let title = tag(&raw.tags, "title")
                .ok_or_else(|| DomainError::missing(&path, format!("chapters[{}].tags.title", index)))?
                .to_string();
            let start = parse_time(raw.start_time, &path, index, "start_time")?;
            let end = parse_time(raw.end_time, &path, index, "end_time")?;
            Ok(ChapterRecord::new(start, end, title))
        })
        .collect()
}

fn parse_time(raw: Option<RawTime>, path: &str, index: usize, field: &str) -> DomainResult<ProbeTime> {
    let field = format!("chapters[{}].{}", index, field);
    let text = raw
        .ok_or_else(|| DomainError::missing(path, field.clone()))?
        .into_text();
    ProbeTime::parse(text.clone()).ok_or(DomainError::InvalidMetadata {
        path: path.to_string(),
        field,
        value: text,
    })
}

/// Parse `ffprobe -show_format -print_format json` output.
///
/// An absent or empty title tag is `Ok(None)`.
pub fn parse_title(json: &[u8], video_path: &Path) -> DomainResult<Option<String>> {
    let output: FormatOutput = serde_json::from_slice(json).map_err(|e| {
        DomainError::ProbeFailed(format!(
            "unreadable ffprobe output for {}: {}",
            video_path.display(),
            e
        ))
    })?;

    Ok(output
        .format
        .and_then(|format| tag(&format.tags, "title").map(str::to_string))
        .filter(|title| !title.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAPTERS: &str = r#"{
        "chapters": [
            {
                "id": 0,
                "time_base": "1/1000",
                "start": 0,
                "start_time": "0.000000",
                "end": 10400,
                "end_time": "10.400000",
                "tags": { "title": "Intro" }
            },
            {
                "id": 1,
                "time_base": "1/1000",
                "start": 10400,
                "start_time": "10.400000",
                "end": 20600,
                "end_time": 20.6,
                "tags": { "TITLE": "Main" }
            }
        ]
    }"#;

    fn video() -> &'static Path {
        Path::new("/videos/talk.mp4")
    }

    #[test]
    fn test_parse_chapters() {
        let chapters = parse_chapters(CHAPTERS.as_bytes(), video()).unwrap();
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "Intro");
        assert_eq!(chapters[0].start.as_str(), "0.000000");
        assert_eq!(chapters[0].end.as_str(), "10.400000");
        assert_eq!(chapters[1].title, "Main");
        assert_eq!(chapters[1].end.as_str(), "20.6");
        assert_eq!(chapters[1].rounded_duration(), 10);
    }

    #[test]
    fn test_missing_chapters_key() {
        let err = parse_chapters(b"{}", video()).unwrap_err();
        assert!(matches!(err, DomainError::MissingMetadata { ref field, .. } if field == "chapters"));
    }

    #[test]
    fn test_empty_chapter_list() {
        let err = parse_chapters(br#"{"chapters": []}"#, video()).unwrap_err();
        assert!(matches!(err, DomainError::MissingMetadata { .. }));
    }

    #[test]
    fn test_missing_chapter_title() {
        let json = br#"{"chapters": [{"start_time": "0.0", "end_time": "1.0"}]}"#;
        let err = parse_chapters(json, video()).unwrap_err();
        match err {
            DomainError::MissingMetadata { field, .. } => assert_eq!(field, "chapters[0].tags.title"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_chapter_end() {
        let json = br#"{"chapters": [{"start_time": "0.0", "tags": {"title": "x"}}]}"#;
        let err = parse_chapters(json, video()).unwrap_err();
        match err {
            DomainError::MissingMetadata { field, .. } => assert_eq!(field, "chapters[0].end_time"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_time() {
        let json = br#"{"chapters": [{"start_time": "N/A", "end_time": "1.0", "tags": {"title": "x"}}]}"#;
        let err = parse_chapters(json, video()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidMetadata { ref value, .. } if value == "N/A"));
    }

    #[test]
    fn test_garbage_json_is_probe_failure() {
        let err = parse_chapters(b"not json", video()).unwrap_err();
        assert!(matches!(err, DomainError::ProbeFailed(_)));
    }

    #[test]
    fn test_exact_tag_key_wins_over_case_variants() {
        let json = br#"{"format": {"tags": {"TITLE": "Upper", "title": "Exact", "Title": "Mixed"}}}"#;
        for _ in 0..16 {
            assert_eq!(parse_title(json, video()).unwrap().as_deref(), Some("Exact"));
        }

        let json = br#"{"format": {"tags": {"Title": "Mixed", "TITLE": "Upper"}}}"#;
        assert_eq!(parse_title(json, video()).unwrap().as_deref(), Some("Upper"));
    }

    #[test]
    fn test_parse_title_present() {
        let json = br#"{"format": {"filename": "talk.mp4", "tags": {"title": "Conference Talk"}}}"#;
        assert_eq!(
            parse_title(json, video()).unwrap().as_deref(),
            Some("Conference Talk")
        );
    }

    #[test]
    fn test_parse_title_absent_or_blank() {
        assert_eq!(parse_title(br#"{"format": {"filename": "a"}}"#, video()).unwrap(), None);
        assert_eq!(
            parse_title(br#"{"format": {"tags": {"title": ""}}}"#, video()).unwrap(),
            None
        );
        assert_eq!(parse_title(b"{}", video()).unwrap(), None);
    }
}
