// Unit tests for business rules

use super::*;
use std::path::PathBuf;

#[test]
fn test_round_duration() {
    assert_eq!(round_duration(10.2), 10);
    assert_eq!(round_duration(125.7), 126);
    assert_eq!(round_duration(0.5), 1);
    assert_eq!(round_duration(0.0), 0);
    assert_eq!(round_duration(-3.0), 0);
    assert_eq!(round_duration(f64::NAN), 0);
}

#[test]
fn test_format_annotation() {
    assert_eq!(format_annotation(0), "00:00");
    assert_eq!(format_annotation(10), "00:10");
    assert_eq!(format_annotation(126), "02:06");
    assert_eq!(format_annotation(59 * 60 + 59), "59:59");
    assert_eq!(format_annotation(3600), "60:00");
}

#[test]
fn test_has_playlist_extension() {
    assert!(has_playlist_extension(Path::new("a/b/list.xspf")));
    assert!(has_playlist_extension(Path::new("LIST.XSPF")));
    assert!(!has_playlist_extension(Path::new("list.m3u")));
    assert!(!has_playlist_extension(Path::new("xspf")));
}

#[test]
fn test_fallback_title_keeps_file_name_only() {
    assert_eq!(
        fallback_title(&PathBuf::from("/videos/My Talk.mp4")),
        "My Talk.mp4"
    );
    assert_eq!(fallback_title(Path::new("clip.mkv")), "clip.mkv");
}

#[test]
fn test_round_duration_exact_halves_round_away_from_zero() {
    assert_eq!(round_duration(2.5), 3);
    assert_eq!(round_duration(12.5), 13);
    assert_eq!(round_duration(1.4999), 1);
}
