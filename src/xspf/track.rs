//! Mapping of chapters to playlist `<track>` elements

use std::path::Path;

use crate::domain::model::ChapterRecord;
use crate::utils::path::file_uri;
use crate::xspf::dom::Element;
use crate::xspf::namespace::{Namespace, VLC_NS};

/// Builds tracks that all point into the same source video
#[derive(Debug, Clone)]
pub struct TrackBuilder {
    location: String,
}

impl TrackBuilder {
    pub fn new(source_path: &Path) -> Self {
        Self {
            location: file_uri(source_path),
        }
    }

    /// URI every track's `<location>` carries
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Build the `<track>` for `chapter`; `index` becomes its `vlc:id`.
    ///
    /// The start/stop options carry the prober's text unchanged so VLC seeks
    /// to the exact chapter boundaries, not the rounded duration.
    pub fn build_track(&self, chapter: &ChapterRecord, index: usize) -> Element {
        let extension = Element::new(Namespace::Xspf, "extension")
            .with_attribute("application", VLC_NS)
            .with_child(Element::new(Namespace::Vlc, "id").with_text(index.to_string()))
            .with_child(
                Element::new(Namespace::Vlc, "option")
                    .with_text(format!("start-time={}", chapter.start)),
            )
            .with_child(
                Element::new(Namespace::Vlc, "option")
                    .with_text(format!("stop-time={}", chapter.end)),
            );

        Element::new(Namespace::Xspf, "track")
            .with_child(Element::new(Namespace::Xspf, "location").with_text(self.location.clone()))
            .with_child(Element::new(Namespace::Xspf, "title").with_text(chapter.title.clone()))
            .with_child(
                Element::new(Namespace::Xspf, "duration")
                    .with_text(chapter.rounded_duration().to_string()),
            )
            .with_child(Element::new(Namespace::Xspf, "annotation").with_text(chapter.annotation()))
            .with_child(extension)
    }
}

/// `vlc:id` of a track built by [`TrackBuilder`]
pub fn track_id(track: &Element) -> Option<String> {
    track
        .find(Namespace::Xspf, "extension")
        .and_then(|extension| extension.find_text(Namespace::Vlc, "id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProbeTime;

    fn chapter(start: &str, end: &str, title: &str) -> ChapterRecord {
        ChapterRecord::new(
            ProbeTime::parse(start).unwrap(),
            ProbeTime::parse(end).unwrap(),
            title,
        )
    }

    fn options(track: &Element) -> Vec<String> {
        track
            .find(Namespace::Xspf, "extension")
            .unwrap()
            .find_all(Namespace::Vlc, "option")
            .map(Element::text)
            .collect()
    }

    #[test]
    fn test_build_track_fields() {
        let builder = TrackBuilder::new(Path::new("/videos/talk.mp4"));
        let track = builder.build_track(&chapter("10.4", "20.6", "Opening"), 3);

        assert!(track.is(Namespace::Xspf, "track"));
        assert_eq!(
            track.find_text(Namespace::Xspf, "location").as_deref(),
            Some(builder.location())
        );
        assert!(builder.location().starts_with("file://"));
        assert_eq!(track.find_text(Namespace::Xspf, "title").as_deref(), Some("Opening"));
        assert_eq!(track.find_text(Namespace::Xspf, "duration").as_deref(), Some("10"));
        assert_eq!(track.find_text(Namespace::Xspf, "annotation").as_deref(), Some("00:10"));
        assert_eq!(track_id(&track).as_deref(), Some("3"));
    }

    #[test]
    fn test_build_track_keeps_probe_text_in_options() {
        let builder = TrackBuilder::new(Path::new("/videos/talk.mp4"));
        let track = builder.build_track(&chapter("0.000000", "125.700000", "Long"), 0);

        assert_eq!(track.find_text(Namespace::Xspf, "duration").as_deref(), Some("126"));
        assert_eq!(track.find_text(Namespace::Xspf, "annotation").as_deref(), Some("02:06"));
        assert_eq!(
            options(&track),
            vec!["start-time=0.000000", "stop-time=125.700000"]
        );
    }

    #[test]
    fn test_extension_is_tagged_with_vlc_application() {
        let builder = TrackBuilder::new(Path::new("/videos/talk.mp4"));
        let track = builder.build_track(&chapter("0", "1", "x"), 0);
        let extension = track.find(Namespace::Xspf, "extension").unwrap();
        assert_eq!(extension.attribute("application"), Some(VLC_NS));
    }
}
