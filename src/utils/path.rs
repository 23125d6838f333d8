//! Path utilities: output naming and file URIs

use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::rules::{BUILT_PLAYLIST_SUFFIX, PATCHED_PLAYLIST_SUFFIX, PLAYLIST_EXTENSION};

/// `<dir>/<stem><suffix>.xspf` next to `path`
pub fn sibling_playlist(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = format!("{}{}.{}", stem, suffix, PLAYLIST_EXTENSION);
    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Where the playlist built from `video` is written
pub fn built_playlist_path(video: &Path) -> PathBuf {
    sibling_playlist(video, BUILT_PLAYLIST_SUFFIX)
}

/// Where the pause-at-end copy of `playlist` is written
pub fn patched_playlist_path(playlist: &Path) -> PathBuf {
    sibling_playlist(playlist, PATCHED_PLAYLIST_SUFFIX)
}

/// `file://` URI for `path`, made absolute and percent-encoded.
///
/// Falls back to prefixing the path verbatim when it cannot be expressed
/// as a URL (e.g. a relative path whose working directory vanished).
pub fn file_uri(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    match Url::from_file_path(&absolute) {
        Ok(url) => url.to_string(),
        Err(()) => format!("file://{}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_playlist_path() {
        assert_eq!(
            built_playlist_path(Path::new("/videos/talk.mp4")),
            PathBuf::from("/videos/talk - PLAYLIST.xspf")
        );
        assert_eq!(
            built_playlist_path(Path::new("talk.mkv")),
            PathBuf::from("talk - PLAYLIST.xspf")
        );
    }

    #[test]
    fn test_patched_playlist_path() {
        assert_eq!(
            patched_playlist_path(Path::new("/p/talk - PLAYLIST.xspf")),
            PathBuf::from("/p/talk - PLAYLIST - PLAY AND PAUSE.xspf")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_uri_encodes_reserved_characters() {
        assert_eq!(
            file_uri(Path::new("/videos/My Talk #1.mp4")),
            "file:///videos/My%20Talk%20%231.mp4"
        );
    }

    #[test]
    fn test_file_uri_makes_relative_paths_absolute() {
        let uri = file_uri(Path::new("clip.mp4"));
        assert!(uri.starts_with("file:///"));
        assert!(uri.ends_with("/clip.mp4"));
    }
}
