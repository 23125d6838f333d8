// Domain rules - Business logic and policies

use std::path::Path;

/// Extension every playlist we read or write carries
pub const PLAYLIST_EXTENSION: &str = "xspf";

/// Suffix inserted before the extension of a built playlist
pub const BUILT_PLAYLIST_SUFFIX: &str = " - PLAYLIST";

/// Suffix inserted before the extension of a patched playlist
pub const PATCHED_PLAYLIST_SUFFIX: &str = " - PLAY AND PAUSE";

/// VLC option that makes the player pause on the last frame of an item
pub const PAUSE_AT_END_OPTION: &str = "play-and-pause";

/// Round a chapter length to whole seconds, half away from zero.
/// Negative lengths (end before start) clamp to zero.
pub fn round_duration(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    seconds.round() as u64
}

/// Format whole seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_annotation(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Case-insensitive `.xspf` check
pub fn has_playlist_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(PLAYLIST_EXTENSION))
        .unwrap_or(false)
}

/// Title used when the container carries no title tag: the file name
pub fn fallback_title(video_path: &Path) -> String {
    video_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| video_path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests;
